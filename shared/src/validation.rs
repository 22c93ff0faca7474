//! Validation utilities for crop plans and yield predictions
//!
//! Helpers return `Result<(), &'static str>`; request-level validators tag the
//! failure with the offending field so the HTTP layer can report it.

use thiserror::Error;

use crate::models::PredictionRequest;

/// Longest accepted crop name (characters)
pub const MAX_CROP_NAME_LEN: usize = 64;

/// Largest accepted cultivated area (hectares)
pub const MAX_CULTIVATED_AREA_HA: f64 = 100_000.0;

/// Largest accepted total surplus (tons)
pub const MAX_TOTAL_SURPLUS_TONS: f64 = 1_000_000_000.0;

/// A failed check on a single request field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationFailure {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationFailure {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

trait OnField {
    fn on(self, field: &'static str) -> Result<(), ValidationFailure>;
}

impl OnField for Result<(), &'static str> {
    fn on(self, field: &'static str) -> Result<(), ValidationFailure> {
        self.map_err(|message| ValidationFailure::new(field, message))
    }
}

// ============================================================================
// Field Validations
// ============================================================================

/// Validate cultivated area (hectares)
pub fn validate_cultivated_area(area: f64) -> Result<(), &'static str> {
    if !area.is_finite() {
        return Err("Area must be a finite number");
    }
    if area <= 0.0 {
        return Err("Area must be greater than zero");
    }
    if area > MAX_CULTIVATED_AREA_HA {
        return Err("Area must be at most 100000 hectares");
    }
    Ok(())
}

/// Validate the farmer's own expected consumption (tons)
pub fn validate_expected_consumption(consumption: f64) -> Result<(), &'static str> {
    if !consumption.is_finite() {
        return Err("Expected consumption must be a finite number");
    }
    if consumption < 0.0 {
        return Err("Expected consumption cannot be negative");
    }
    Ok(())
}

/// Validate a total surplus figure (tons)
pub fn validate_total_surplus(total: f64) -> Result<(), &'static str> {
    if !total.is_finite() {
        return Err("Total surplus must be a finite number");
    }
    if total < 0.0 {
        return Err("Total surplus cannot be negative");
    }
    if total > MAX_TOTAL_SURPLUS_TONS {
        return Err("Total surplus must be at most 1000000000 tons");
    }
    Ok(())
}

/// Validate crop name
pub fn validate_crop_name(crop_name: &str) -> Result<(), &'static str> {
    let trimmed = crop_name.trim();
    if trimmed.is_empty() {
        return Err("Crop name is required");
    }
    if trimmed.chars().count() > MAX_CROP_NAME_LEN {
        return Err("Crop name must be at most 64 characters");
    }
    Ok(())
}

pub fn validate_rainfall(rainfall_mm: f64) -> Result<(), &'static str> {
    if !rainfall_mm.is_finite() {
        return Err("Rainfall must be a finite number");
    }
    if rainfall_mm < 0.0 {
        return Err("Rainfall cannot be negative");
    }
    Ok(())
}

pub fn validate_temperature(temperature_c: f64) -> Result<(), &'static str> {
    if !temperature_c.is_finite() {
        return Err("Temperature must be a finite number");
    }
    Ok(())
}

/// Validate relative humidity (0-100%)
pub fn validate_humidity(humidity_pct: f64) -> Result<(), &'static str> {
    if !humidity_pct.is_finite() {
        return Err("Humidity must be a finite number");
    }
    if !(0.0..=100.0).contains(&humidity_pct) {
        return Err("Humidity must be between 0 and 100%");
    }
    Ok(())
}

// ============================================================================
// Request Validations
// ============================================================================

/// Validate the weather covariates of a request
pub fn validate_weather_covariates(
    rainfall_mm: f64,
    temperature_c: f64,
    humidity_pct: f64,
) -> Result<(), ValidationFailure> {
    validate_rainfall(rainfall_mm).on("rainfall_mm")?;
    validate_temperature(temperature_c).on("temperature_c")?;
    validate_humidity(humidity_pct).on("humidity_pct")?;
    Ok(())
}

/// Validate a prediction request before it reaches the predictor
pub fn validate_prediction_request(request: &PredictionRequest) -> Result<(), ValidationFailure> {
    validate_crop_name(&request.crop_name).on("crop_name")?;
    validate_cultivated_area(request.area).on("area")?;
    validate_weather_covariates(
        request.rainfall_mm,
        request.temperature_c,
        request.humidity_pct,
    )
}

/// Validate an expected consumption figure, tagged with its field name
pub fn validate_consumption_field(consumption: f64) -> Result<(), ValidationFailure> {
    validate_expected_consumption(consumption).on("expected_consumption")
}
