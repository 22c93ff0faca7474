//! Crop assessment service
//!
//! Turns a planned crop into a yield estimate, a surplus figure, an expected
//! harvest date and the follow-up actions for that surplus.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{
    calculate_surplus, classify_surplus, expected_harvest_date, high_surplus_alert, round2,
    validate_consumption_field, validate_prediction_request, ConfidenceReport, CropStatus,
    InvalidCropStatus, IrrigationType, PredictionMethod, PredictionRequest, Recommendation,
    Season, SoilType, SurplusAlert, SurplusLevel, DEFAULT_HUMIDITY_PCT, DEFAULT_RAINFALL_MM,
    DEFAULT_TEMPERATURE_C,
};

use crate::error::{AppError, AppResult};
use crate::services::prediction::YieldPredictor;

fn default_rainfall() -> f64 {
    DEFAULT_RAINFALL_MM
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE_C
}

fn default_humidity() -> f64 {
    DEFAULT_HUMIDITY_PCT
}

/// Input for assessing a planned crop
#[derive(Debug, Clone, Deserialize)]
pub struct AssessCropInput {
    pub crop_name: String,
    pub area: f64,
    pub planting_date: NaiveDate,
    #[serde(default)]
    pub soil_type: SoilType,
    #[serde(default)]
    pub season: Season,
    #[serde(default)]
    pub irrigation_type: IrrigationType,
    /// Tons the farmer keeps for the household
    #[serde(default)]
    pub expected_consumption: f64,
    #[serde(default = "default_rainfall")]
    pub rainfall_mm: f64,
    #[serde(default = "default_temperature")]
    pub temperature_c: f64,
    #[serde(default = "default_humidity")]
    pub humidity_pct: f64,
    /// Lifecycle stage, `planned` when omitted
    #[serde(default)]
    pub status: Option<String>,
}

impl AssessCropInput {
    fn prediction_request(&self) -> PredictionRequest {
        PredictionRequest {
            crop_name: self.crop_name.trim().to_string(),
            area: self.area,
            soil_type: self.soil_type.clone(),
            season: self.season.clone(),
            irrigation_type: self.irrigation_type.clone(),
            rainfall_mm: self.rainfall_mm,
            temperature_c: self.temperature_c,
            humidity_pct: self.humidity_pct,
        }
    }

    fn crop_status(&self) -> AppResult<CropStatus> {
        match &self.status {
            None => Ok(CropStatus::default()),
            Some(status) => status
                .parse::<CropStatus>()
                .map_err(|e: InvalidCropStatus| AppError::Validation {
                    field: "status".to_string(),
                    message: e.to_string(),
                }),
        }
    }
}

/// Assessment of a planned crop
#[derive(Debug, Clone, Serialize)]
pub struct CropAssessment {
    pub crop_name: String,
    pub area: f64,
    pub planting_date: NaiveDate,
    pub expected_harvest_date: Option<NaiveDate>,
    pub status: CropStatus,
    pub predicted_yield_tons: f64,
    pub prediction_method: PredictionMethod,
    pub expected_consumption: f64,
    pub predicted_surplus_tons: f64,
    pub surplus_level: SurplusLevel,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<SurplusAlert>,
    pub confidence: ConfidenceReport,
}

/// Crop assessment service
#[derive(Clone)]
pub struct CropAssessmentService {
    predictor: Arc<YieldPredictor>,
    high_surplus_threshold_tons: f64,
}

impl CropAssessmentService {
    pub fn new(predictor: Arc<YieldPredictor>, high_surplus_threshold_tons: f64) -> Self {
        Self {
            predictor,
            high_surplus_threshold_tons,
        }
    }

    /// Assess a planned crop
    pub fn assess(&self, input: AssessCropInput) -> AppResult<CropAssessment> {
        let request = input.prediction_request();
        validate_prediction_request(&request)?;
        validate_consumption_field(input.expected_consumption)?;
        let status = input.crop_status()?;

        let prediction = self
            .predictor
            .predict(&request)
            .into_result()
            .map_err(AppError::from)?;

        let surplus = calculate_surplus(prediction.yield_tons, input.expected_consumption);
        let surplus_level = classify_surplus(surplus);
        let alert =
            high_surplus_alert(&request.crop_name, surplus, self.high_surplus_threshold_tons);

        if let Some(alert) = &alert {
            tracing::info!(
                crop = %request.crop_name,
                %status,
                surplus_tons = surplus,
                "{}",
                alert.title
            );
        }

        Ok(CropAssessment {
            expected_harvest_date: expected_harvest_date(input.planting_date, &request.crop_name),
            planting_date: input.planting_date,
            crop_name: request.crop_name,
            area: request.area,
            status,
            predicted_yield_tons: prediction.yield_tons,
            prediction_method: prediction.method,
            expected_consumption: input.expected_consumption,
            predicted_surplus_tons: round2(surplus),
            surplus_level,
            recommendations: surplus_level.recommendations(),
            alert,
            confidence: self.predictor.confidence(),
        })
    }
}
