//! Business logic services for the Surplus-to-Sustain platform

pub mod assessment;
pub mod prediction;

pub use assessment::{AssessCropInput, CropAssessment, CropAssessmentService};
pub use prediction::YieldPredictor;
