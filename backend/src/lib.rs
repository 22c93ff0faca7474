//! Surplus-to-Sustain backend
//!
//! Yield prediction, surplus assessment and impact reporting for farmers,
//! served over HTTP.

use std::sync::Arc;

use axum::{http::Uri, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod ml;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::YieldPredictor;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub predictor: Arc<YieldPredictor>,
}

impl AppState {
    pub fn new(config: Config, predictor: YieldPredictor) -> Self {
        Self {
            config: Arc::new(config),
            predictor: Arc::new(predictor),
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Surplus-to-Sustain API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Route {}", uri.path()))
}
