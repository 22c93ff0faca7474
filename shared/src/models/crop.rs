//! Crop models

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use thiserror::Error;

/// Growing period for crops missing from the table (days)
pub const DEFAULT_GROWTH_DAYS: i64 = 90;

/// Days from planting to harvest
pub const GROWTH_PERIODS: &[(&str, i64)] = &[
    ("tomato", 75),
    ("onion", 120),
    ("potato", 90),
    ("wheat", 120),
    ("rice", 120),
    ("cabbage", 70),
    ("cauliflower", 75),
    ("brinjal", 60),
    ("chili", 80),
];

/// Growing period of a crop in days
pub fn growth_period_days(crop_name: &str) -> i64 {
    let crop = crop_name.trim().to_lowercase();
    GROWTH_PERIODS
        .iter()
        .find(|(name, _)| *name == crop)
        .map(|(_, days)| *days)
        .unwrap_or(DEFAULT_GROWTH_DAYS)
}

/// Expected harvest date, `None` if the date would overflow
pub fn expected_harvest_date(planting_date: NaiveDate, crop_name: &str) -> Option<NaiveDate> {
    planting_date.checked_add_signed(Duration::days(growth_period_days(crop_name)))
}

/// Lifecycle of a logged crop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CropStatus {
    #[default]
    Planned,
    Growing,
    Harvested,
    Sold,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid crop status: {0}")]
pub struct InvalidCropStatus(pub String);

impl std::str::FromStr for CropStatus {
    type Err = InvalidCropStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "planned" => Ok(CropStatus::Planned),
            "growing" => Ok(CropStatus::Growing),
            "harvested" => Ok(CropStatus::Harvested),
            "sold" => Ok(CropStatus::Sold),
            _ => Err(InvalidCropStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for CropStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropStatus::Planned => write!(f, "planned"),
            CropStatus::Growing => write!(f, "growing"),
            CropStatus::Harvested => write!(f, "harvested"),
            CropStatus::Sold => write!(f, "sold"),
        }
    }
}
