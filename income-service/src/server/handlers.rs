use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use metrics::{counter, histogram};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use crate::error::InferenceError;
use crate::model::prediction::{predict_single, ProbabilitySource};
use crate::preprocessing::IncomeFeatures;
use crate::server::types::*;
use crate::telemetry::{
    PREDICTIONS_TOTAL, PREDICTION_ERRORS_TOTAL, PREDICTION_FALLBACK_TOTAL,
    PREDICTION_LATENCY_SECONDS,
};

pub const SERVICE_MESSAGE: &str = "AI Income Predictor ML Service";

pub async fn root(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: SERVICE_MESSAGE.to_string(),
        status: "running".to_string(),
        model_loaded: state.model.is_loaded(),
    })
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let model = if state.model.is_loaded() {
        "loaded"
    } else {
        "not loaded"
    };
    Json(HealthResponse {
        status: "healthy".to_string(),
        model: model.to_string(),
    })
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictResponse>, InferenceError> {
    let start = Instant::now();
    let result = run_prediction(&state, payload);
    histogram!(PREDICTION_LATENCY_SECONDS).record(start.elapsed().as_secs_f64());
    match &result {
        Ok(response) => {
            counter!(PREDICTIONS_TOTAL, "bracket" => response.prediction.clone()).increment(1);
        }
        Err(err) => {
            tracing::warn!(error = %err, "prediction failed");
            counter!(PREDICTION_ERRORS_TOTAL, "kind" => err.kind()).increment(1);
        }
    }
    result.map(Json)
}

fn run_prediction(
    state: &AppState,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<PredictResponse, InferenceError> {
    // Availability is reported before the body is looked at.
    let classifier = state.model.classifier()?;
    let Json(body) = payload.map_err(|e| InferenceError::InvalidRequest(e.body_text()))?;

    let features = IncomeFeatures::from_json(&body)?;
    let encoded = features.encode();
    let batch = encoded.to_batch()?;
    let prediction = predict_single(classifier.as_ref(), &batch)?;

    if prediction.source == ProbabilitySource::Fallback {
        counter!(PREDICTION_FALLBACK_TOTAL).increment(1);
    }
    tracing::debug!(
        features = ?encoded.as_slice(),
        prediction = prediction.bracket.as_str(),
        probability = prediction.probability,
        "prediction served"
    );

    Ok(PredictResponse {
        prediction: prediction.bracket.as_str().to_string(),
        probability: prediction.probability,
        features_received: body,
    })
}

pub async fn recommend(
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendResponse>, InferenceError> {
    let Json(request) = payload.map_err(|e| InferenceError::InvalidRequest(e.body_text()))?;
    let recommendation = crate::recommendation::recommend(&request.prediction, &request.input_data);
    Ok(Json(RecommendResponse {
        success: true,
        recommendation,
    }))
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> String {
    state.metrics.render()
}
