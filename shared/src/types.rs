//! Common types used across the platform
//!
//! The categorical crop attributes accept any string. Values outside the
//! known vocabulary are kept as `Other` so that the rule-based estimator can
//! apply its default multiplier instead of rejecting the request.

use serde::{Deserialize, Serialize};

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Soil types recognised by the estimator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SoilType {
    #[default]
    Loamy,
    Clay,
    Sandy,
    Black,
    /// Any other soil description, stored lower-cased
    Other(String),
}

impl SoilType {
    pub fn as_str(&self) -> &str {
        match self {
            SoilType::Loamy => "loamy",
            SoilType::Clay => "clay",
            SoilType::Sandy => "sandy",
            SoilType::Black => "black",
            SoilType::Other(value) => value,
        }
    }
}

impl From<&str> for SoilType {
    fn from(value: &str) -> Self {
        match normalize(value).as_str() {
            "loamy" => SoilType::Loamy,
            "clay" => SoilType::Clay,
            "sandy" => SoilType::Sandy,
            "black" => SoilType::Black,
            other => SoilType::Other(other.to_string()),
        }
    }
}

impl From<String> for SoilType {
    fn from(value: String) -> Self {
        SoilType::from(value.as_str())
    }
}

impl From<SoilType> for String {
    fn from(value: SoilType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Indian cropping seasons
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Season {
    /// Monsoon season (June - October)
    #[default]
    Kharif,
    /// Winter season (October - March)
    Rabi,
    /// Summer season between rabi and kharif
    Zaid,
    Other(String),
}

impl Season {
    pub fn as_str(&self) -> &str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
            Season::Other(value) => value,
        }
    }
}

impl From<&str> for Season {
    fn from(value: &str) -> Self {
        match normalize(value).as_str() {
            "kharif" => Season::Kharif,
            "rabi" => Season::Rabi,
            "zaid" => Season::Zaid,
            other => Season::Other(other.to_string()),
        }
    }
}

impl From<String> for Season {
    fn from(value: String) -> Self {
        Season::from(value.as_str())
    }
}

impl From<Season> for String {
    fn from(value: Season) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Irrigation methods
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IrrigationType {
    #[default]
    Drip,
    Sprinkler,
    Flood,
    Rainfed,
    Other(String),
}

impl IrrigationType {
    pub fn as_str(&self) -> &str {
        match self {
            IrrigationType::Drip => "drip",
            IrrigationType::Sprinkler => "sprinkler",
            IrrigationType::Flood => "flood",
            IrrigationType::Rainfed => "rainfed",
            IrrigationType::Other(value) => value,
        }
    }
}

impl From<&str> for IrrigationType {
    fn from(value: &str) -> Self {
        match normalize(value).as_str() {
            "drip" => IrrigationType::Drip,
            "sprinkler" => IrrigationType::Sprinkler,
            "flood" => IrrigationType::Flood,
            "rainfed" => IrrigationType::Rainfed,
            other => IrrigationType::Other(other.to_string()),
        }
    }
}

impl From<String> for IrrigationType {
    fn from(value: String) -> Self {
        IrrigationType::from(value.as_str())
    }
}

impl From<IrrigationType> for String {
    fn from(value: IrrigationType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for IrrigationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
