use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ndarray::ShapeError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Model not found at path: {0}")]
    ModelNotFound(String),

    #[error("Model not loaded")]
    ModelNotLoaded,

    #[error("ONNX Runtime error: {0}")]
    OrtError(#[from] ort::Error),

    #[error("Shape error: {0}")]
    ShapeError(#[from] ShapeError),

    /// Malformed request data. The message is surfaced to the caller verbatim.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Model has no output named `{0}`")]
    MissingOutput(String),

    #[error("Model does not provide probability estimates")]
    ProbabilityUnavailable,

    #[error("Model session lock poisoned")]
    SessionPoisoned,
}

impl InferenceError {
    /// Label used for the `kind` dimension of the error counter.
    pub fn kind(&self) -> &'static str {
        match self {
            InferenceError::ModelNotLoaded => "model_unavailable",
            _ => "request",
        }
    }
}

impl IntoResponse for InferenceError {
    fn into_response(self) -> Response {
        let status = match self {
            InferenceError::ModelNotLoaded => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
