//! Random forest regressor evaluated from flattened tree arrays
//!
//! Each tree stores its nodes as parallel arrays indexed by node id. A node
//! whose `children_left` entry is `-1` is a leaf and its `value` is the tree
//! output. Internal nodes send a sample left when
//! `x[feature] <= threshold`. The forest prediction is the mean over trees.

use serde::Deserialize;

use super::artifacts::ArtifactError;

/// Marker for "no child" in the children arrays
pub const LEAF: i64 = -1;

/// Supported `model.json` format version
pub const FORMAT_VERSION: u32 = 1;

/// Expected `kind` tag of `model.json`
pub const MODEL_KIND: &str = "random_forest_regressor";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegressionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

impl RegressionTree {
    pub fn node_count(&self) -> usize {
        self.children_left.len()
    }

    /// Check the node arrays describe a well-formed tree over `n_features`.
    ///
    /// Children must point strictly forward, which rules out cycles and makes
    /// `predict` terminate.
    pub fn validate(&self, n_features: usize) -> Result<(), String> {
        let n = self.node_count();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err(format!("node arrays differ in length (expected {})", n));
        }

        for node in 0..n {
            let left = self.children_left[node];
            let right = self.children_right[node];

            if left == LEAF {
                if right != LEAF {
                    return Err(format!("node {} has a right child but no left child", node));
                }
                if !self.value[node].is_finite() {
                    return Err(format!("leaf {} has a non-finite value", node));
                }
                continue;
            }

            for child in [left, right] {
                if child <= node as i64 || child >= n as i64 {
                    return Err(format!("node {} has out-of-range child {}", node, child));
                }
            }

            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(format!("node {} splits on unknown feature {}", node, feature));
            }
            if self.threshold[node].is_nan() {
                return Err(format!("node {} has a NaN threshold", node));
            }
        }

        Ok(())
    }

    /// Output of the leaf reached by `features`. Assumes `validate` passed.
    pub fn predict(&self, features: &[f64]) -> f64 {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left == LEAF {
                return self.value[node];
            }
            let feature = self.feature[node] as usize;
            node = if features[feature] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }
}

/// Contents of `model.json`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RandomForestRegressor {
    pub format_version: u32,
    pub kind: String,
    pub n_features: usize,
    pub trees: Vec<RegressionTree>,
}

impl RandomForestRegressor {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.format_version != FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion(self.format_version));
        }
        if self.kind != MODEL_KIND {
            return Err(ArtifactError::Inconsistent(format!(
                "unexpected model kind '{}'",
                self.kind
            )));
        }
        if self.trees.is_empty() {
            return Err(ArtifactError::Inconsistent("forest has no trees".to_string()));
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features).map_err(|reason| {
                ArtifactError::Inconsistent(format!("tree {}: {}", index, reason))
            })?;
        }
        Ok(())
    }

    /// Mean of the tree outputs
    pub fn predict(&self, features: &[f64]) -> f64 {
        let total: f64 = self.trees.iter().map(|tree| tree.predict(features)).sum();
        total / self.trees.len() as f64
    }
}
