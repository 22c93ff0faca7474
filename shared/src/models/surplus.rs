//! Surplus models

use serde::Serialize;

/// Surplus above which a high-surplus alert is raised (tons)
pub const HIGH_SURPLUS_THRESHOLD_TONS: f64 = 3.0;

/// Surplus above which the surplus is considered moderate (tons)
pub const MODERATE_SURPLUS_THRESHOLD_TONS: f64 = 1.0;

/// Predicted surplus: yield minus the farmer's own consumption, floored at zero
pub fn calculate_surplus(yield_tons: f64, expected_consumption: f64) -> f64 {
    (yield_tons - expected_consumption).max(0.0)
}

/// Urgency of a predicted surplus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurplusLevel {
    /// More than 3 tons
    High,
    /// More than 1 ton
    Moderate,
    Low,
}

impl std::fmt::Display for SurplusLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurplusLevel::High => write!(f, "HIGH"),
            SurplusLevel::Moderate => write!(f, "MODERATE"),
            SurplusLevel::Low => write!(f, "LOW"),
        }
    }
}

/// Classify a surplus by urgency
pub fn classify_surplus(surplus_tons: f64) -> SurplusLevel {
    if surplus_tons > HIGH_SURPLUS_THRESHOLD_TONS {
        SurplusLevel::High
    } else if surplus_tons > MODERATE_SURPLUS_THRESHOLD_TONS {
        SurplusLevel::Moderate
    } else {
        SurplusLevel::Low
    }
}

/// Recommendation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Suggested next step for handling a surplus
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Recommendation {
    fn new(title: &str, description: &str, priority: Priority) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            priority,
        }
    }
}

impl SurplusLevel {
    /// Recommendations for this level, most urgent first
    pub fn recommendations(&self) -> Vec<Recommendation> {
        match self {
            SurplusLevel::High => vec![
                Recommendation::new(
                    "Pre-book Processors",
                    "Contact top-rated processors immediately",
                    Priority::High,
                ),
                Recommendation::new(
                    "Reserve Storage",
                    "Book community cold storage space now",
                    Priority::High,
                ),
                Recommendation::new(
                    "Coordinate Donation",
                    "Arrange NGO pickup for tax benefits",
                    Priority::Medium,
                ),
                Recommendation::new(
                    "Plan Composting",
                    "Schedule waste-to-compost for remainder",
                    Priority::Low,
                ),
            ],
            SurplusLevel::Moderate => vec![
                Recommendation::new(
                    "Contact Markets",
                    "Reach out to local retailers and markets",
                    Priority::High,
                ),
                Recommendation::new(
                    "Find Processors",
                    "Check with food processing units",
                    Priority::Medium,
                ),
                Recommendation::new(
                    "Consider Donation",
                    "Donate excess for social impact",
                    Priority::Low,
                ),
            ],
            SurplusLevel::Low => vec![
                Recommendation::new(
                    "Normal Sale",
                    "Proceed with regular market sale",
                    Priority::High,
                ),
                Recommendation::new(
                    "Best Price",
                    "Wait for optimal market prices",
                    Priority::Medium,
                ),
            ],
        }
    }
}

/// Kind of in-app alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Warning,
}

/// Alert record produced for the notification layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurplusAlert {
    pub title: String,
    pub message: String,
    pub kind: AlertKind,
}

/// Alert for a surplus strictly above `threshold_tons`, if any
pub fn high_surplus_alert(
    crop_name: &str,
    surplus_tons: f64,
    threshold_tons: f64,
) -> Option<SurplusAlert> {
    if surplus_tons > threshold_tons {
        Some(SurplusAlert {
            title: "High Surplus Alert!".to_string(),
            message: format!(
                "Your {} crop has {:.1} tons predicted surplus. Take action now!",
                crop_name, surplus_tons
            ),
            kind: AlertKind::Warning,
        })
    } else {
        None
    }
}
