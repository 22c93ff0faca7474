//! Category encoders fitted at training time
//!
//! Each encoder is the sorted class list of one categorical field; the code
//! of a value is its index in that list.

use serde::Deserialize;
use shared::RejectionReason;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CategoryEncoder {
    classes: Vec<String>,
}

impl CategoryEncoder {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Integer code of `value`, matched after trimming and lower-casing
    pub fn encode(&self, value: &str) -> Option<usize> {
        let value = value.trim().to_lowercase();
        self.classes.iter().position(|class| *class == value)
    }
}

/// Contents of `encoders.json`, one encoder per categorical feature
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoricalEncoders {
    pub crop_name: CategoryEncoder,
    pub soil_type: CategoryEncoder,
    pub season: CategoryEncoder,
    pub irrigation_type: CategoryEncoder,
}

impl CategoricalEncoders {
    /// Name of the first encoder without any class
    pub fn first_empty(&self) -> Option<&'static str> {
        [
            ("crop_name", &self.crop_name),
            ("soil_type", &self.soil_type),
            ("season", &self.season),
            ("irrigation_type", &self.irrigation_type),
        ]
        .into_iter()
        .find(|(_, encoder)| encoder.classes.is_empty())
        .map(|(field, _)| field)
    }
}

/// Encode `value` of `field`, or explain why it cannot be encoded
pub fn encode_field(
    encoder: &CategoryEncoder,
    field: &str,
    value: &str,
) -> Result<f64, RejectionReason> {
    encoder
        .encode(value)
        .map(|code| code as f64)
        .ok_or_else(|| RejectionReason::UnseenCategory {
            field: field.to_string(),
            value: value.to_string(),
        })
}
