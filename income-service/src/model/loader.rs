use crate::config::ModelConfig;
use crate::error::InferenceError;
use crate::model::classifier::OnnxClassifier;
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::Path;

/// Names the process-wide ONNX Runtime environment. Call before the first
/// session is built; later sessions share it.
pub fn init_ort() -> Result<(), InferenceError> {
    ort::init().with_name("income-service").commit()?;
    Ok(())
}

/// Opens the classifier graph at `model_path`.
///
/// A missing file is [`InferenceError::ModelNotFound`]; a file the runtime
/// cannot parse is [`InferenceError::OrtError`].
pub fn load_model(model_path: impl AsRef<Path>) -> Result<Session, InferenceError> {
    let path = model_path.as_ref();
    if !path.exists() {
        return Err(InferenceError::ModelNotFound(path.display().to_string()));
    }

    // A single 9-wide row needs no intra-op parallelism.
    let session = Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(1)?
        .commit_from_file(path)?;

    tracing::info!(path = %path.display(), "loaded model");
    for (i, input) in session.inputs.iter().enumerate() {
        tracing::debug!("  input {}: {} ({:?})", i, input.name, input.input_type);
    }
    for (i, output) in session.outputs.iter().enumerate() {
        tracing::debug!("  output {}: {} ({:?})", i, output.name, output.output_type);
    }

    Ok(session)
}

/// Loads the classifier described by `config`.
pub fn load_classifier(config: &ModelConfig) -> Result<OnnxClassifier, InferenceError> {
    let session = load_model(&config.path)?;
    OnnxClassifier::new(session, &config.label_output, &config.probability_output)
}
