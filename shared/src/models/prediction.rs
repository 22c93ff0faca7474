//! Yield prediction models

use serde::{Deserialize, Serialize};

use crate::types::{IrrigationType, Season, SoilType};

/// Seasonal rainfall assumed when the farmer does not supply one (mm)
pub const DEFAULT_RAINFALL_MM: f64 = 750.0;

/// Mean temperature assumed when the farmer does not supply one (°C)
pub const DEFAULT_TEMPERATURE_C: f64 = 27.0;

/// Relative humidity assumed when the farmer does not supply one (%)
pub const DEFAULT_HUMIDITY_PCT: f64 = 70.0;

fn default_rainfall() -> f64 {
    DEFAULT_RAINFALL_MM
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE_C
}

fn default_humidity() -> f64 {
    DEFAULT_HUMIDITY_PCT
}

/// Input to a yield prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub crop_name: String,
    /// Cultivated area in hectares
    pub area: f64,
    #[serde(default)]
    pub soil_type: SoilType,
    #[serde(default)]
    pub season: Season,
    #[serde(default)]
    pub irrigation_type: IrrigationType,
    #[serde(default = "default_rainfall")]
    pub rainfall_mm: f64,
    #[serde(default = "default_temperature")]
    pub temperature_c: f64,
    #[serde(default = "default_humidity")]
    pub humidity_pct: f64,
}

impl PredictionRequest {
    /// Request with the default soil, season, irrigation and weather values
    pub fn new(crop_name: impl Into<String>, area: f64) -> Self {
        Self {
            crop_name: crop_name.into(),
            area,
            soil_type: SoilType::default(),
            season: Season::default(),
            irrigation_type: IrrigationType::default(),
            rainfall_mm: DEFAULT_RAINFALL_MM,
            temperature_c: DEFAULT_TEMPERATURE_C,
            humidity_pct: DEFAULT_HUMIDITY_PCT,
        }
    }

    pub fn with_irrigation(mut self, irrigation_type: impl Into<IrrigationType>) -> Self {
        self.irrigation_type = irrigation_type.into();
        self
    }

    pub fn with_soil(mut self, soil_type: impl Into<SoilType>) -> Self {
        self.soil_type = soil_type.into();
        self
    }

    pub fn with_season(mut self, season: impl Into<Season>) -> Self {
        self.season = season.into();
        self
    }

    pub fn with_weather(mut self, rainfall_mm: f64, temperature_c: f64, humidity_pct: f64) -> Self {
        self.rainfall_mm = rainfall_mm;
        self.temperature_c = temperature_c;
        self.humidity_pct = humidity_pct;
        self
    }
}

/// Strategy that produced a yield estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictionMethod {
    /// Trained regression model
    Model,
    /// Lookup-table estimate
    Fallback,
}

impl std::fmt::Display for PredictionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictionMethod::Model => write!(f, "MODEL"),
            PredictionMethod::Fallback => write!(f, "FALLBACK"),
        }
    }
}

/// A yield estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Estimated total yield in tons, rounded to 2 decimals
    pub yield_tons: f64,
    pub method: PredictionMethod,
}

/// Why a prediction was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    /// A categorical value is outside the vocabulary the model was trained on
    UnseenCategory { field: String, value: String },
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::UnseenCategory { field, value } => {
                write!(f, "value '{}' for {} was not seen during training", value, field)
            }
        }
    }
}

/// Result of asking the predictor for an estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PredictionOutcome {
    Predicted {
        yield_tons: f64,
        method: PredictionMethod,
    },
    Rejected {
        reason: RejectionReason,
    },
}

impl PredictionOutcome {
    pub fn predicted(result: PredictionResult) -> Self {
        PredictionOutcome::Predicted {
            yield_tons: result.yield_tons,
            method: result.method,
        }
    }

    pub fn into_result(self) -> Result<PredictionResult, RejectionReason> {
        match self {
            PredictionOutcome::Predicted { yield_tons, method } => {
                Ok(PredictionResult { yield_tons, method })
            }
            PredictionOutcome::Rejected { reason } => Err(reason),
        }
    }
}

/// Qualitative confidence label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    High,
    Medium,
}

/// Which strategy is active and how much to trust it.
///
/// This describes the process, not an individual prediction: it is not an
/// error bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceReport {
    pub level: ConfidenceLevel,
    pub method: String,
    pub description: String,
}

impl ConfidenceReport {
    pub fn for_model_state(model_loaded: bool) -> Self {
        if model_loaded {
            Self {
                level: ConfidenceLevel::High,
                method: "Machine Learning (Random Forest)".to_string(),
                description: "Based on trained model with weather and soil factors".to_string(),
            }
        } else {
            Self {
                level: ConfidenceLevel::Medium,
                method: "Rule-based Estimation".to_string(),
                description: "Based on historical average yields".to_string(),
            }
        }
    }
}
