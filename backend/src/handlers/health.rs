//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;
use shared::PredictionMethod;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub prediction_method: PredictionMethod,
    pub model_loaded: bool,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        prediction_method: state.predictor.active_method(),
        model_loaded: state.predictor.is_model_loaded(),
    })
}
