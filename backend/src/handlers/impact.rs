//! HTTP handlers for impact endpoints

use axum::Json;
use serde::Deserialize;
use shared::{validate_total_surplus, ImpactSummary};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;

#[derive(Debug, Deserialize)]
pub struct ImpactInput {
    pub total_surplus_tons: f64,
}

/// Impact of selling a total predicted surplus
pub async fn calculate_impact(
    AppJson(input): AppJson<ImpactInput>,
) -> AppResult<Json<ImpactSummary>> {
    validate_total_surplus(input.total_surplus_tons).map_err(|message| AppError::Validation {
        field: "total_surplus_tons".to_string(),
        message: message.to_string(),
    })?;
    Ok(Json(ImpactSummary::from_total_surplus(input.total_surplus_tons)))
}
