use crate::model::ModelState;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};

/// Shared Application State
#[derive(Clone)]
pub struct AppState {
    pub model: ModelState,
    pub metrics: PrometheusHandle,
}

// --- DTOs (Data Transfer Objects) ---

#[derive(Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    pub message: String,
    pub status: String,
    pub model_loaded: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

// Prediction. The request body is read as raw JSON so it can be echoed back.
#[derive(Serialize, Deserialize, Debug)]
pub struct PredictResponse {
    pub prediction: String,
    pub probability: f32,
    pub features_received: serde_json::Value,
}

// Recommendation
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    pub prediction: String,
    #[serde(default)]
    pub input_data: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RecommendResponse {
    pub success: bool,
    pub recommendation: String,
}
