//! Route definitions for the Surplus-to-Sustain platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/predictions", prediction_routes())
        .route("/assessments", post(handlers::assess_crop))
        .route("/impact", post(handlers::calculate_impact))
}

/// Yield prediction routes
fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::predict_yield))
        .route("/confidence", get(handlers::get_confidence))
        .route("/fallback", post(handlers::predict_fallback_yield))
}
