//! Advice text keyed on a prediction outcome.

use serde_json::Value;

fn field_text(input: &Value, key: &str) -> String {
    match input.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Builds the recommendation for `prediction` (">50K" or "<=50K") using the
/// profile the prediction was made for. Missing fields render as empty text.
pub fn recommend(prediction: &str, input: &Value) -> String {
    let occupation = field_text(input, "occupation");

    if prediction == "<=50K" {
        let education = field_text(input, "educationNum");
        let hours = field_text(input, "hoursPerWeek");
        format!(
            "Based on your profile analysis, your predicted income is below $50K. \
Here are personalized recommendations to increase your earning potential:

**Education Enhancement**: With {education} years of education, consider pursuing \
advanced certifications or a higher degree in your field.

**Career Development**: Working {hours} hours per week in {occupation}, explore \
opportunities for skill upgrades and leadership roles.

**Strategic Growth**: Consider transitioning to higher-paying sectors or industries. \
Networking and continuous learning are key to career advancement.

**Additional Income Streams**: Explore freelancing, consulting, or side projects in \
your area of expertise to supplement your primary income."
        )
    } else {
        format!(
            "Congratulations! Your profile indicates an income above $50K. \
Here are ways to maintain and grow your financial success:

**Investment Planning**: With your strong income, focus on smart investments and \
wealth building strategies.

**Career Advancement**: Continue advancing in your {occupation} field. Seek \
executive roles or specialized positions.

**Skill Diversification**: Stay ahead by learning emerging technologies and \
industry trends.

**Financial Management**: Consider working with a financial advisor to optimize \
your earnings and plan for long-term wealth."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_below_threshold_interpolates_profile() {
        let input = json!({ "educationNum": 9, "hoursPerWeek": "35", "occupation": "Sales" });
        let text = recommend("<=50K", &input);
        assert!(text.starts_with("Based on your profile analysis"));
        assert!(text.contains("With 9 years of education"));
        assert!(text.contains("Working 35 hours per week in Sales"));
    }

    #[test]
    fn test_above_threshold_interpolates_occupation() {
        let input = json!({ "occupation": "Exec-managerial" });
        let text = recommend(">50K", &input);
        assert!(text.starts_with("Congratulations!"));
        assert!(text.contains("in your Exec-managerial field"));
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let text = recommend("<=50K", &json!({}));
        assert!(text.contains("With  years of education"));
        assert!(text.contains("hours per week in ,"));
    }
}
