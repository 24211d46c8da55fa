use crate::error::InferenceError;
use crate::model::classifier::Classifier;
use ndarray::Array2;
use serde::Serialize;

/// Label the classifier emits for the above-threshold class.
const ABOVE_THRESHOLD_LABEL: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IncomeBracket {
    #[serde(rename = ">50K")]
    AboveFiftyK,
    #[serde(rename = "<=50K")]
    AtOrBelowFiftyK,
}

impl IncomeBracket {
    pub fn from_label(label: i64) -> Self {
        if label == ABOVE_THRESHOLD_LABEL {
            IncomeBracket::AboveFiftyK
        } else {
            IncomeBracket::AtOrBelowFiftyK
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeBracket::AboveFiftyK => ">50K",
            IncomeBracket::AtOrBelowFiftyK => "<=50K",
        }
    }

    /// Constant used when the model gives no probability. Not calibrated.
    pub fn fallback_probability(&self) -> f32 {
        match self {
            IncomeBracket::AboveFiftyK => 0.5,
            IncomeBracket::AtOrBelowFiftyK => 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilitySource {
    Model,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub bracket: IncomeBracket,
    /// Probability of the above-threshold class, always in [0, 1].
    pub probability: f32,
    pub source: ProbabilitySource,
}

/// Classifies a single-row batch and attaches the above-threshold probability.
pub fn predict_single(
    classifier: &dyn Classifier,
    batch: &Array2<f32>,
) -> Result<Prediction, InferenceError> {
    let classification = classifier.classify(batch.view())?;
    let label = classification.labels.first().copied().ok_or_else(|| {
        InferenceError::InvalidRequest("model returned no prediction".to_string())
    })?;
    let bracket = IncomeBracket::from_label(label);

    let estimate = classification
        .probabilities
        .and_then(|proba| above_threshold_probability(&proba));

    let prediction = match estimate {
        Ok(probability) => Prediction {
            bracket,
            probability,
            source: ProbabilitySource::Model,
        },
        Err(err) => {
            tracing::debug!(error = %err, "probability estimate unavailable, using fallback");
            Prediction {
                bracket,
                probability: bracket.fallback_probability(),
                source: ProbabilitySource::Fallback,
            }
        }
    };
    Ok(prediction)
}

fn above_threshold_probability(proba: &Array2<f32>) -> Result<f32, InferenceError> {
    let p = proba
        .get([0, ABOVE_THRESHOLD_LABEL as usize])
        .copied()
        .ok_or(InferenceError::ProbabilityUnavailable)?;
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(InferenceError::ProbabilityUnavailable)
    }
}
