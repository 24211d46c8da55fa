use crate::error::InferenceError;
use ndarray::{Array2, ArrayView2};
use ort::session::Session;
use ort::value::{DynValue, Tensor};
use std::sync::Mutex;

/// A trained binary classifier over fixed-width feature rows.
pub trait Classifier: Send + Sync {
    /// Class label for each row of `rows`.
    fn predict(&self, rows: ArrayView2<'_, f32>) -> Result<Vec<i64>, InferenceError>;

    /// Per-class probabilities, one row per input row. Models without
    /// probability estimates keep the default.
    fn predict_proba(&self, _rows: ArrayView2<'_, f32>) -> Result<Array2<f32>, InferenceError> {
        Err(InferenceError::ProbabilityUnavailable)
    }

    /// Labels and probabilities together. Backends that can answer both from
    /// one pass override this.
    fn classify(&self, rows: ArrayView2<'_, f32>) -> Result<Classification, InferenceError> {
        let labels = self.predict(rows)?;
        let probabilities = self.predict_proba(rows);
        Ok(Classification {
            labels,
            probabilities,
        })
    }
}

/// Output of [`Classifier::classify`]. A probability failure does not fail
/// the classification.
#[derive(Debug)]
pub struct Classification {
    pub labels: Vec<i64>,
    pub probabilities: Result<Array2<f32>, InferenceError>,
}

/// Classifier backed by an ONNX Runtime session, e.g. a scikit-learn
/// pipeline exported with skl2onnx.
pub struct OnnxClassifier {
    session: Mutex<Session>,
    input_name: String,
    label_output: String,
    probability_output: Option<String>,
}

impl OnnxClassifier {
    pub fn new(
        session: Session,
        label_output: &str,
        probability_output: &str,
    ) -> Result<Self, InferenceError> {
        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| InferenceError::MissingOutput("<graph input>".to_string()))?;

        let has_output = |name: &str| session.outputs.iter().any(|o| o.name == name);
        if !has_output(label_output) {
            return Err(InferenceError::MissingOutput(label_output.to_string()));
        }
        let probability_output = if has_output(probability_output) {
            Some(probability_output.to_string())
        } else {
            tracing::warn!(
                output = probability_output,
                "model exposes no probability output, fallback probabilities will be used"
            );
            None
        };

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            label_output: label_output.to_string(),
            probability_output,
        })
    }

    pub fn has_probabilities(&self) -> bool {
        self.probability_output.is_some()
    }

    fn input_tensor(rows: ArrayView2<'_, f32>) -> Result<Tensor<f32>, InferenceError> {
        let shape = rows.shape().to_vec();
        let data: Vec<f32> = rows.iter().copied().collect();
        Ok(Tensor::from_array((shape, data.into_boxed_slice()))?)
    }

    /// Runs the graph once under the session lock and reads the label output
    /// and, when asked for, the probability output.
    fn run_outputs(
        &self,
        rows: ArrayView2<'_, f32>,
        with_probabilities: bool,
    ) -> Result<Classification, InferenceError> {
        let input = Self::input_tensor(rows)?;
        let mut session = self
            .session
            .lock()
            .map_err(|_| InferenceError::SessionPoisoned)?;
        let outputs = session.run(ort::inputs![self.input_name.as_str() => input])?;

        let (_, labels) = outputs[self.label_output.as_str()].try_extract_tensor::<i64>()?;
        let probabilities = match self.probability_output.as_deref() {
            Some(name) if with_probabilities => probability_matrix(&outputs[name]),
            _ => Err(InferenceError::ProbabilityUnavailable),
        };

        Ok(Classification {
            labels: labels.to_vec(),
            probabilities,
        })
    }
}

fn probability_matrix(value: &DynValue) -> Result<Array2<f32>, InferenceError> {
    let (shape, data) = value.try_extract_tensor::<f32>()?;
    let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();
    if dims.len() != 2 {
        return Err(InferenceError::ProbabilityUnavailable);
    }
    Ok(Array2::from_shape_vec((dims[0], dims[1]), data.to_vec())?)
}

impl Classifier for OnnxClassifier {
    fn predict(&self, rows: ArrayView2<'_, f32>) -> Result<Vec<i64>, InferenceError> {
        Ok(self.run_outputs(rows, false)?.labels)
    }

    fn predict_proba(&self, rows: ArrayView2<'_, f32>) -> Result<Array2<f32>, InferenceError> {
        self.run_outputs(rows, true)?.probabilities
    }

    fn classify(&self, rows: ArrayView2<'_, f32>) -> Result<Classification, InferenceError> {
        self.run_outputs(rows, true)
    }
}

#[cfg(test)]
pub(crate) mod stub {
    use super::*;

    /// Returns a fixed label and, optionally, a fixed above-threshold probability.
    pub struct FixedClassifier {
        pub label: i64,
        pub probability: Option<f32>,
    }

    impl FixedClassifier {
        pub fn without_probabilities(label: i64) -> Self {
            Self {
                label,
                probability: None,
            }
        }

        pub fn with_probability(label: i64, probability: f32) -> Self {
            Self {
                label,
                probability: Some(probability),
            }
        }
    }

    impl Classifier for FixedClassifier {
        fn predict(&self, rows: ArrayView2<'_, f32>) -> Result<Vec<i64>, InferenceError> {
            Ok(vec![self.label; rows.nrows()])
        }

        fn predict_proba(&self, rows: ArrayView2<'_, f32>) -> Result<Array2<f32>, InferenceError> {
            let p = self.probability.ok_or(InferenceError::ProbabilityUnavailable)?;
            let data = (0..rows.nrows()).flat_map(|_| [1.0 - p, p]).collect();
            Ok(Array2::from_shape_vec((rows.nrows(), 2), data)?)
        }
    }

    /// Fails every call, as a broken runtime would.
    pub struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn predict(&self, _rows: ArrayView2<'_, f32>) -> Result<Vec<i64>, InferenceError> {
            Err(InferenceError::InvalidRequest(
                "could not convert input to float tensor".to_string(),
            ))
        }
    }
}
