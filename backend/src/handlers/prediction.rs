//! HTTP handlers for yield prediction endpoints

use axum::{extract::State, Json};
use shared::{validate_prediction_request, ConfidenceReport, PredictionRequest, PredictionResult};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::AppState;

/// Predict the total yield of a crop
pub async fn predict_yield(
    State(state): State<AppState>,
    AppJson(request): AppJson<PredictionRequest>,
) -> AppResult<Json<PredictionResult>> {
    validate_prediction_request(&request)?;
    let result = state
        .predictor
        .predict(&request)
        .into_result()
        .map_err(AppError::from)?;
    Ok(Json(result))
}

/// Rule-based yield estimate, whether or not a model is loaded
pub async fn predict_fallback_yield(
    State(state): State<AppState>,
    AppJson(request): AppJson<PredictionRequest>,
) -> AppResult<Json<PredictionResult>> {
    validate_prediction_request(&request)?;
    Ok(Json(state.predictor.predict_fallback(&request)))
}

/// Report which prediction strategy is active
pub async fn get_confidence(State(state): State<AppState>) -> Json<ConfidenceReport> {
    Json(state.predictor.confidence())
}
