//! Surplus-to-Sustain - Backend Server
//!
//! Predicts harvest yield and surplus so farmers can plan sales, storage and
//! donations before the crop comes in.

use std::net::SocketAddr;

use surplus_backend::{create_app, AppState, Config, YieldPredictor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing
    let json = config.log.json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "surplus_server=debug,surplus_backend=debug,tower_http=debug".into()
            }),
        )
        .with((!json).then(tracing_subscriber::fmt::layer))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .init();

    config.validate()?;

    tracing::info!("Starting Surplus-to-Sustain Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the trained model once; failures leave the server on rule-based estimation
    let predictor = YieldPredictor::load(&config.prediction);
    tracing::info!("Prediction method: {}", predictor.active_method());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState::new(config, predictor);

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
