//! Yield prediction service
//!
//! Wraps the trained model (when its artifacts could be loaded) and the
//! lookup-table estimator. The choice is made once at start-up and never
//! changes afterwards.

use shared::{
    predict_fallback, round2, ConfidenceReport, PredictionMethod, PredictionOutcome,
    PredictionRequest, PredictionResult,
};

use crate::config::{PredictionConfig, UnseenCategoryPolicy};
use crate::ml::{ArtifactError, ArtifactPaths, ModelArtifacts};

/// Yield predictor shared by all handlers
#[derive(Debug, Clone)]
pub struct YieldPredictor {
    artifacts: Option<ModelArtifacts>,
    unseen_category: UnseenCategoryPolicy,
}

impl YieldPredictor {
    /// Load the configured artifacts, falling back to the lookup tables on any failure
    pub fn load(config: &PredictionConfig) -> Self {
        let paths = ArtifactPaths::from_config(config);

        match ModelArtifacts::load(&paths) {
            Ok(artifacts) => {
                tracing::info!(
                    model = %paths.model.display(),
                    trees = artifacts.tree_count(),
                    "Trained yield model loaded"
                );
                Self::with_artifacts(artifacts, config.unseen_category)
            }
            Err(ArtifactError::Missing(path)) => {
                tracing::warn!(
                    missing = %path.display(),
                    "No trained yield model found, using rule-based estimation"
                );
                Self::fallback_only()
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Failed to load trained yield model, using rule-based estimation"
                );
                Self::fallback_only()
            }
        }
    }

    /// Predictor without a trained model
    pub fn fallback_only() -> Self {
        Self {
            artifacts: None,
            unseen_category: UnseenCategoryPolicy::default(),
        }
    }

    pub fn with_artifacts(
        artifacts: ModelArtifacts,
        unseen_category: UnseenCategoryPolicy,
    ) -> Self {
        Self {
            artifacts: Some(artifacts),
            unseen_category,
        }
    }

    pub fn is_model_loaded(&self) -> bool {
        self.artifacts.is_some()
    }

    /// Strategy answering requests that the model can encode
    pub fn active_method(&self) -> PredictionMethod {
        if self.is_model_loaded() {
            PredictionMethod::Model
        } else {
            PredictionMethod::Fallback
        }
    }

    /// Estimate the total yield for `request`.
    ///
    /// Expects a request that already passed validation.
    pub fn predict(&self, request: &PredictionRequest) -> PredictionOutcome {
        let Some(artifacts) = &self.artifacts else {
            return PredictionOutcome::predicted(self.predict_fallback(request));
        };

        match artifacts.predict(request) {
            Ok(raw) => {
                let result = PredictionResult {
                    yield_tons: round2(raw.max(0.0)),
                    method: PredictionMethod::Model,
                };
                tracing::debug!(
                    crop = %request.crop_name,
                    area = request.area,
                    yield_tons = result.yield_tons,
                    method = %result.method,
                    "Yield predicted"
                );
                PredictionOutcome::predicted(result)
            }
            Err(reason) => match self.unseen_category {
                UnseenCategoryPolicy::Reject => {
                    tracing::info!(%reason, "Prediction rejected");
                    PredictionOutcome::Rejected { reason }
                }
                UnseenCategoryPolicy::Fallback => {
                    tracing::warn!(%reason, "Answering from rule-based estimation");
                    PredictionOutcome::predicted(self.predict_fallback(request))
                }
            },
        }
    }

    /// Lookup-table estimate, regardless of whether a model is loaded
    pub fn predict_fallback(&self, request: &PredictionRequest) -> PredictionResult {
        let yield_tons =
            predict_fallback(&request.crop_name, request.area, &request.irrigation_type);
        tracing::debug!(
            crop = %request.crop_name,
            area = request.area,
            yield_tons,
            method = %PredictionMethod::Fallback,
            "Yield predicted"
        );
        PredictionResult {
            yield_tons,
            method: PredictionMethod::Fallback,
        }
    }

    pub fn confidence(&self) -> ConfidenceReport {
        ConfidenceReport::for_model_state(self.is_model_loaded())
    }
}
