//! Classifier port - the pre-trained model's input/output contract.
//!
//! The core knows nothing about the model beyond this trait: it hands over a
//! feature vector laid out in the registry's feature order and receives a
//! target code. Implementations must be pure and deterministic; failures are
//! reported, never retried.

use crate::domain::model::FeatureVector;

/// Errors raised by a classifier while predicting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelInferenceError {
    #[error("Model expects {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("Model traversal failed: {0}")]
    Traversal(String),

    #[error("Model produced no prediction")]
    NoPrediction,
}

/// Port for the opaque classification model.
pub trait Classifier: Send + Sync {
    /// Predicts a target code for one encoded sample.
    fn predict(&self, features: &FeatureVector) -> Result<u32, ModelInferenceError>;
}
