//! Fake model artifacts for integration tests

#![allow(dead_code)]

use std::path::Path;

use serde_json::{json, Value};
use surplus_backend::config::{Config, PredictionConfig, UnseenCategoryPolicy};
use surplus_backend::{AppState, YieldPredictor};
use tempfile::TempDir;

pub fn feature_cols() -> Value {
    json!([
        "crop_name_encoded",
        "area",
        "soil_type_encoded",
        "season_encoded",
        "irrigation_type_encoded",
        "rainfall",
        "temperature",
        "humidity"
    ])
}

pub fn encoders() -> Value {
    json!({
        "crop_name": ["onion", "tomato"],
        "soil_type": ["black", "clay", "loamy", "sandy"],
        "season": ["kharif", "rabi", "zaid"],
        "irrigation_type": ["drip", "flood", "rainfed", "sprinkler"]
    })
}

/// Two stumps: area <= 2.5 gives 10/30, crop code <= 0.5 gives 20/40.
///
/// tomato on 5 ha predicts 35.0, onion on 2 ha predicts 15.0.
pub fn model() -> Value {
    json!({
        "format_version": 1,
        "kind": "random_forest_regressor",
        "n_features": 8,
        "trees": [
            {
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "feature": [1, -2, -2],
                "threshold": [2.5, -2.0, -2.0],
                "value": [20.0, 10.0, 30.0]
            },
            {
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "feature": [0, -2, -2],
                "threshold": [0.5, -2.0, -2.0],
                "value": [30.0, 20.0, 40.0]
            }
        ]
    })
}

pub fn write_json(dir: &Path, file: &str, value: &Value) {
    std::fs::write(dir.join(file), serde_json::to_vec_pretty(value).unwrap()).unwrap();
}

/// Temp directory holding a complete, valid artifact set
pub fn artifact_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_json(dir.path(), "model.json", &model());
    write_json(dir.path(), "encoders.json", &encoders());
    write_json(dir.path(), "feature_cols.json", &feature_cols());
    dir
}

pub fn prediction_config(dir: &Path, unseen_category: UnseenCategoryPolicy) -> PredictionConfig {
    PredictionConfig {
        artifact_dir: dir.to_path_buf(),
        unseen_category,
        ..PredictionConfig::default()
    }
}

/// Predictor backed by the fake forest
pub fn model_predictor(dir: &TempDir, unseen_category: UnseenCategoryPolicy) -> YieldPredictor {
    let predictor = YieldPredictor::load(&prediction_config(dir.path(), unseen_category));
    assert!(predictor.is_model_loaded());
    predictor
}

pub fn app_state(predictor: YieldPredictor) -> AppState {
    let config = Config {
        environment: "test".to_string(),
        ..Config::default()
    };
    AppState::new(config, predictor)
}
