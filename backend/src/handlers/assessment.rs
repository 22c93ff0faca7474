//! HTTP handlers for crop assessment endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::services::{AssessCropInput, CropAssessment, CropAssessmentService};
use crate::AppState;

/// Assess a planned crop
pub async fn assess_crop(
    State(state): State<AppState>,
    AppJson(input): AppJson<AssessCropInput>,
) -> AppResult<Json<CropAssessment>> {
    let service = CropAssessmentService::new(
        state.predictor.clone(),
        state.config.surplus.high_surplus_threshold_tons,
    );
    let assessment = service.assess(input)?;
    Ok(Json(assessment))
}
