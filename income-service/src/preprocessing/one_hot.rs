//! Drop-first one-hot encoding for models trained on dummy columns.
//!
//! The first category of each group (alphabetically) has no column and is
//! encoded as all zeros: Federal-gov, Divorced, Adm-clerical, Husband and
//! Amer-Indian-Eskimo.

use crate::preprocessing::categorical::GENDER;

pub const ONE_HOT_COLUMNS: [&str; 40] = [
    "Age",
    "EducationNum",
    "Gender",
    "Hours per Week",
    "Workclass_Local-gov",
    "Workclass_Never-worked",
    "Workclass_Private",
    "Workclass_Self-emp-inc",
    "Workclass_Self-emp-not-inc",
    "Workclass_State-gov",
    "Workclass_Without-pay",
    "Marital Status_Married-AF-spouse",
    "Marital Status_Married-civ-spouse",
    "Marital Status_Married-spouse-absent",
    "Marital Status_Never-married",
    "Marital Status_Separated",
    "Marital Status_Widowed",
    "Occupation_Armed-Forces",
    "Occupation_Craft-repair",
    "Occupation_Exec-managerial",
    "Occupation_Farming-fishing",
    "Occupation_Handlers-cleaners",
    "Occupation_Machine-op-inspct",
    "Occupation_No-occupation",
    "Occupation_Other-service",
    "Occupation_Priv-house-serv",
    "Occupation_Prof-specialty",
    "Occupation_Protective-serv",
    "Occupation_Sales",
    "Occupation_Tech-support",
    "Occupation_Transport-moving",
    "Relationship_Not-in-family",
    "Relationship_Other-relative",
    "Relationship_Own-child",
    "Relationship_Unmarried",
    "Relationship_Wife",
    "Race_Asian-Pac-Islander",
    "Race_Black",
    "Race_Other",
    "Race_White",
];

/// Raw profile for the one-hot schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub age: i64,
    pub education_num: i64,
    pub gender: String,
    pub hours_per_week: i64,
    pub workclass: String,
    pub marital_status: String,
    pub occupation: String,
    pub relationship: String,
    pub race: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OneHotRow {
    values: [f32; ONE_HOT_COLUMNS.len()],
}

impl OneHotRow {
    pub fn zeroed() -> Self {
        Self {
            values: [0.0; ONE_HOT_COLUMNS.len()],
        }
    }

    pub fn column_index(column: &str) -> Option<usize> {
        ONE_HOT_COLUMNS.iter().position(|c| *c == column)
    }

    /// Sets a column by name. Names outside the schema are dropped and
    /// reported by returning `false`.
    pub fn set(&mut self, column: &str, value: f32) -> bool {
        match Self::column_index(column) {
            Some(idx) => {
                self.values[idx] = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, column: &str) -> Option<f32> {
        Self::column_index(column).map(|idx| self.values[idx])
    }

    pub fn from_profile(profile: &Profile) -> Self {
        let mut row = Self::zeroed();
        row.set("Age", profile.age as f32);
        row.set("EducationNum", profile.education_num as f32);
        row.set("Gender", GENDER.encode(Some(&profile.gender)) as f32);
        row.set("Hours per Week", profile.hours_per_week as f32);

        let indicators = [
            ("Workclass", &profile.workclass),
            ("Marital Status", &profile.marital_status),
            ("Occupation", &profile.occupation),
            ("Relationship", &profile.relationship),
            ("Race", &profile.race),
        ];
        for (group, value) in indicators {
            let column = format!("{}_{}", group, value);
            if !row.set(&column, 1.0) {
                tracing::debug!(column = %column, "no indicator column, encoded as reference category");
            }
        }
        row
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Names of the non-zero columns, in schema order.
    pub fn active_columns(&self) -> Vec<&'static str> {
        ONE_HOT_COLUMNS
            .iter()
            .zip(self.values.iter())
            .filter(|(_, v)| **v != 0.0)
            .map(|(c, _)| *c)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn example_profile() -> Profile {
        Profile {
            age: 38,
            education_num: 10,
            gender: "Male".to_string(),
            hours_per_week: 70,
            workclass: "Private".to_string(),
            marital_status: "Married-civ-spouse".to_string(),
            occupation: "Handlers-cleaners".to_string(),
            relationship: "Husband".to_string(),
            race: "Black".to_string(),
        }
    }

    #[test]
    fn test_columns_are_unique() {
        let unique: HashSet<&str> = ONE_HOT_COLUMNS.iter().copied().collect();
        assert_eq!(unique.len(), ONE_HOT_COLUMNS.len());
    }

    #[test]
    fn test_zeroed_row() {
        let row = OneHotRow::zeroed();
        assert!(row.as_slice().iter().all(|v| *v == 0.0));
        assert!(row.active_columns().is_empty());
    }

    #[test]
    fn test_example_profile_columns() {
        let row = OneHotRow::from_profile(&example_profile());
        assert_eq!(row.get("Age"), Some(38.0));
        assert_eq!(row.get("EducationNum"), Some(10.0));
        assert_eq!(row.get("Gender"), Some(1.0));
        assert_eq!(row.get("Hours per Week"), Some(70.0));
        assert_eq!(
            row.active_columns(),
            vec![
                "Age",
                "EducationNum",
                "Gender",
                "Hours per Week",
                "Workclass_Private",
                "Marital Status_Married-civ-spouse",
                "Occupation_Handlers-cleaners",
                "Race_Black",
            ]
        );
    }

    #[test]
    fn test_husband_is_reference_category() {
        let row = OneHotRow::from_profile(&example_profile());
        assert_eq!(row.get("Relationship_Husband"), None);
        for column in ONE_HOT_COLUMNS.iter().filter(|c| c.starts_with("Relationship_")) {
            assert_eq!(row.get(column), Some(0.0), "{}", column);
        }
    }

    #[test]
    fn test_set_unknown_column_is_dropped() {
        let mut row = OneHotRow::zeroed();
        assert!(!row.set("Relationship_Husband", 1.0));
        assert!(row.set("Relationship_Wife", 1.0));
        assert_eq!(row.active_columns(), vec!["Relationship_Wife"]);
    }

    #[test]
    fn test_female_gender_is_zero() {
        let mut profile = example_profile();
        profile.gender = "Female".to_string();
        profile.relationship = "Wife".to_string();
        let row = OneHotRow::from_profile(&profile);
        assert_eq!(row.get("Gender"), Some(0.0));
        assert_eq!(row.get("Relationship_Wife"), Some(1.0));
    }
}
