//! Categorical fields consumed by the classification model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A questionnaire answer that is label-encoded before reaching the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalField {
    RequestReason,
    Diagnosis,
    HousingType,
    IncomeBracket,
}

impl CategoricalField {
    /// Every categorical field, in questionnaire order.
    pub const ALL: [CategoricalField; 4] = [
        CategoricalField::RequestReason,
        CategoricalField::Diagnosis,
        CategoricalField::HousingType,
        CategoricalField::IncomeBracket,
    ];

    /// Column / feature name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoricalField::RequestReason => "request_reason",
            CategoricalField::Diagnosis => "diagnosis",
            CategoricalField::HousingType => "housing_type",
            CategoricalField::IncomeBracket => "income_bracket",
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a feature name matches no categorical field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown categorical field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for CategoricalField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoricalField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
