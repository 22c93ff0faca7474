//! Loading of the trained model artifacts
//!
//! A model is made of three JSON files in one directory: the forest, the
//! category encoders and the ordered feature-column list. All three are read
//! and cross-checked once; any failure leaves the caller on the lookup-table
//! estimator.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use shared::{PredictionRequest, RejectionReason};
use thiserror::Error;

use super::encoder::{encode_field, CategoricalEncoders};
use super::forest::RandomForestRegressor;
use crate::config::PredictionConfig;

/// Training feature order
pub const FEATURE_COLUMNS: [&str; 8] = [
    "crop_name_encoded",
    "area",
    "soil_type_encoded",
    "season_encoded",
    "irrigation_type_encoded",
    "rainfall",
    "temperature",
    "humidity",
];

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported model format version {0}")]
    UnsupportedVersion(u32),

    #[error("inconsistent artifacts: {0}")]
    Inconsistent(String),
}

/// Locations of the three artifact files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub encoders: PathBuf,
    pub feature_cols: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::from_config(&PredictionConfig {
            artifact_dir: dir.as_ref().to_path_buf(),
            ..PredictionConfig::default()
        })
    }

    pub fn from_config(config: &PredictionConfig) -> Self {
        let dir = &config.artifact_dir;
        Self {
            model: dir.join(&config.model_file),
            encoders: dir.join(&config.encoders_file),
            feature_cols: dir.join(&config.feature_cols_file),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ArtifactError::Missing(path.to_path_buf())
        } else {
            ArtifactError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// A validated forest together with the encoders it was trained with
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    forest: RandomForestRegressor,
    encoders: CategoricalEncoders,
}

impl ModelArtifacts {
    /// Read and validate all three artifacts
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        let forest: RandomForestRegressor = read_json(&paths.model)?;
        let encoders: CategoricalEncoders = read_json(&paths.encoders)?;
        let feature_cols: Vec<String> = read_json(&paths.feature_cols)?;

        if feature_cols != FEATURE_COLUMNS {
            return Err(ArtifactError::Inconsistent(format!(
                "feature columns {:?} do not match the expected order",
                feature_cols
            )));
        }

        Self::new(forest, encoders)
    }

    pub fn new(
        forest: RandomForestRegressor,
        encoders: CategoricalEncoders,
    ) -> Result<Self, ArtifactError> {
        forest.validate()?;

        if forest.n_features != FEATURE_COLUMNS.len() {
            return Err(ArtifactError::Inconsistent(format!(
                "model expects {} features, {} are provided",
                forest.n_features,
                FEATURE_COLUMNS.len()
            )));
        }
        if let Some(field) = encoders.first_empty() {
            return Err(ArtifactError::Inconsistent(format!(
                "encoder for {} has no classes",
                field
            )));
        }

        Ok(Self { forest, encoders })
    }

    pub fn tree_count(&self) -> usize {
        self.forest.trees.len()
    }

    /// Feature vector in training column order
    pub fn encode_features(
        &self,
        request: &PredictionRequest,
    ) -> Result<[f64; 8], RejectionReason> {
        let crop = encode_field(&self.encoders.crop_name, "crop_name", &request.crop_name)?;
        let soil = encode_field(
            &self.encoders.soil_type,
            "soil_type",
            request.soil_type.as_str(),
        )?;
        let season = encode_field(&self.encoders.season, "season", request.season.as_str())?;
        let irrigation = encode_field(
            &self.encoders.irrigation_type,
            "irrigation_type",
            request.irrigation_type.as_str(),
        )?;

        Ok([
            crop,
            request.area,
            soil,
            season,
            irrigation,
            request.rainfall_mm,
            request.temperature_c,
            request.humidity_pct,
        ])
    }

    /// Raw, unrounded forest output for `request`
    pub fn predict(&self, request: &PredictionRequest) -> Result<f64, RejectionReason> {
        let features = self.encode_features(request)?;
        Ok(self.forest.predict(&features))
    }
}
