//! Trained yield model: artifact loading, category encoding and forest evaluation

pub mod artifacts;
pub mod encoder;
pub mod forest;

pub use artifacts::{ArtifactError, ArtifactPaths, ModelArtifacts, FEATURE_COLUMNS};
pub use encoder::{CategoricalEncoders, CategoryEncoder};
pub use forest::{RandomForestRegressor, RegressionTree};
