//! Affectation pipeline error types.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::model::EncodingError;
use crate::ports::{HistoryStoreError, ModelInferenceError};

use super::AffectationRecord;

/// Typed failures of the encode → predict → decode → persist pipeline.
#[derive(Debug, Error)]
pub enum AffectationError {
    /// An answer or a predicted code lies outside the trained vocabulary.
    #[error("Encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    /// The classifier could not produce a prediction. Nothing was written.
    #[error("Model inference failed: {0}")]
    ModelInference(#[from] ModelInferenceError),

    /// The prediction succeeded but the record could not be appended.
    ///
    /// The record is carried so the caller can still show or retry it.
    #[error("History store unavailable, record not saved: {source}")]
    StoreUnavailable {
        record: Box<AffectationRecord>,
        #[source]
        source: HistoryStoreError,
    },
}

impl AffectationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AffectationError::Encoding(EncodingError::UnknownCategory { .. }) => {
                ErrorCode::UnknownCategory
            }
            AffectationError::Encoding(EncodingError::UnknownCode { .. }) => ErrorCode::UnknownCode,
            AffectationError::ModelInference(_) => ErrorCode::ModelInferenceFailed,
            AffectationError::StoreUnavailable { .. } => ErrorCode::StoreUnavailable,
        }
    }

    /// Record computed before the failure, if any.
    pub fn unsaved_record(&self) -> Option<&AffectationRecord> {
        match self {
            AffectationError::StoreUnavailable { record, .. } => Some(&**record),
            _ => None,
        }
    }
}
