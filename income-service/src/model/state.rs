use crate::config::ModelConfig;
use crate::error::InferenceError;
use crate::model::classifier::Classifier;
use crate::model::loader;
use std::sync::Arc;

/// The process-wide classifier, loaded once at start-up.
///
/// A failed load leaves the slot empty; callers then get
/// [`InferenceError::ModelNotLoaded`] instead of a crash.
#[derive(Clone, Default)]
pub struct ModelState {
    classifier: Option<Arc<dyn Classifier>>,
}

impl ModelState {
    pub fn loaded(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier: Some(classifier),
        }
    }

    pub fn unloaded() -> Self {
        Self::default()
    }

    /// Loads the configured model, logging and swallowing any failure.
    pub fn load(config: &ModelConfig) -> Self {
        match loader::load_classifier(config) {
            Ok(classifier) => {
                tracing::info!(
                    path = %config.path,
                    probabilities = classifier.has_probabilities(),
                    "model ready"
                );
                Self::loaded(Arc::new(classifier))
            }
            Err(err) => {
                tracing::error!(path = %config.path, error = %err, "failed to load model");
                Self::unloaded()
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.classifier.is_some()
    }

    pub fn classifier(&self) -> Result<&Arc<dyn Classifier>, InferenceError> {
        self.classifier.as_ref().ok_or(InferenceError::ModelNotLoaded)
    }
}
