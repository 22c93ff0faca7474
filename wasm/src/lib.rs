//! WebAssembly module for Surplus-to-Sustain
//!
//! Provides client-side previews while a farmer fills in a crop plan:
//! - Rule-based yield estimates
//! - Surplus and urgency level
//! - Expected harvest date
//! - Offline input validation

use chrono::NaiveDate;
use shared::IrrigationType;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("surplus-wasm ready"));
}

/// Rule-based yield estimate in tons
#[wasm_bindgen]
pub fn predict_fallback_yield(crop_name: &str, area: f64, irrigation_type: &str) -> f64 {
    if shared::validate_cultivated_area(area).is_err() {
        return 0.0;
    }
    shared::predict_fallback(crop_name, area, &IrrigationType::from(irrigation_type))
}

/// Predicted surplus in tons, never negative
#[wasm_bindgen]
pub fn calculate_surplus(yield_tons: f64, expected_consumption: f64) -> f64 {
    shared::calculate_surplus(yield_tons, expected_consumption)
}

/// Surplus urgency: HIGH, MODERATE or LOW
#[wasm_bindgen]
pub fn classify_surplus(surplus_tons: f64) -> String {
    shared::classify_surplus(surplus_tons).to_string()
}

/// Expected harvest date (YYYY-MM-DD) for a planting date in the same format
#[wasm_bindgen]
pub fn expected_harvest_date(planting_date: &str, crop_name: &str) -> Option<String> {
    let planted = NaiveDate::parse_from_str(planting_date, "%Y-%m-%d").ok()?;
    shared::expected_harvest_date(planted, crop_name)
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// Validation message for a cultivated area, or nothing when it is valid
#[wasm_bindgen]
pub fn validate_cultivated_area(area: f64) -> Option<String> {
    shared::validate_cultivated_area(area)
        .err()
        .map(str::to_string)
}
