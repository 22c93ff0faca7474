//! Configuration management for the Surplus-to-Sustain server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with SURPLUS_ prefix

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Yield prediction configuration
    pub prediction: PredictionConfig,

    /// Surplus alerting configuration
    pub surplus: SurplusConfig,

    /// Log output configuration
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

/// What to do when a categorical value was never seen during training
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnseenCategoryPolicy {
    /// Refuse the prediction and name the offending field
    #[default]
    Reject,
    /// Answer from the lookup tables and tag the result FALLBACK
    Fallback,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PredictionConfig {
    /// Directory holding the trained model artifacts
    pub artifact_dir: PathBuf,

    pub model_file: String,

    pub encoders_file: String,

    pub feature_cols_file: String,

    pub unseen_category: UnseenCategoryPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SurplusConfig {
    /// Surplus above which an alert is raised (tons)
    pub high_surplus_threshold_tons: f64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LogConfig {
    /// Emit JSON log lines instead of the human-readable format
    pub json: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("SURPLUS_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("prediction.artifact_dir", "artifacts")?
            .set_default("prediction.model_file", "model.json")?
            .set_default("prediction.encoders_file", "encoders.json")?
            .set_default("prediction.feature_cols_file", "feature_cols.json")?
            .set_default("prediction.unseen_category", "reject")?
            .set_default(
                "surplus.high_surplus_threshold_tons",
                shared::HIGH_SURPLUS_THRESHOLD_TONS,
            )?
            .set_default("log.json", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SURPLUS_ prefix)
            .add_source(
                Environment::with_prefix("SURPLUS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject values the type system lets through
    pub fn validate(&self) -> AppResult<()> {
        let threshold = self.surplus.high_surplus_threshold_tons;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(AppError::Configuration(format!(
                "surplus.high_surplus_threshold_tons must be a non-negative number, got {}",
                threshold
            )));
        }
        if self.prediction.model_file.is_empty()
            || self.prediction.encoders_file.is_empty()
            || self.prediction.feature_cols_file.is_empty()
        {
            return Err(AppError::Configuration(
                "prediction artifact file names must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            artifact_dir: PathBuf::from("artifacts"),
            model_file: "model.json".to_string(),
            encoders_file: "encoders.json".to_string(),
            feature_cols_file: "feature_cols.json".to_string(),
            unseen_category: UnseenCategoryPolicy::Reject,
        }
    }
}

impl Default for SurplusConfig {
    fn default() -> Self {
        Self {
            high_surplus_threshold_tons: shared::HIGH_SURPLUS_THRESHOLD_TONS,
        }
    }
}
