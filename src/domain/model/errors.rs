//! Encoding registry error types.

use thiserror::Error;

use super::CategoricalField;

/// Failures translating between labels and model codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("Value '{value}' is not in the trained vocabulary for '{field}'")]
    UnknownCategory {
        field: CategoricalField,
        value: String,
    },

    #[error("Code {code} is outside the trained target range (0..{known})")]
    UnknownCode { code: u32, known: usize },
}

/// A label encoder whose class list breaks label-encoder semantics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncoderDefinitionError {
    #[error("Encoder has no classes")]
    Empty,

    #[error("Encoder classes are not sorted: '{previous}' precedes '{next}'")]
    Unsorted { previous: String, next: String },

    #[error("Encoder class '{0}' appears more than once")]
    Duplicate(String),
}

/// An inconsistent set of encoders and feature names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryDefinitionError {
    #[error("No encoder provided for '{0}'")]
    MissingEncoder(CategoricalField),

    #[error("Feature '{0}' is listed more than once")]
    DuplicateFeature(CategoricalField),

    #[error("Feature '{0}' is missing from the feature order")]
    MissingFeature(CategoricalField),
}
