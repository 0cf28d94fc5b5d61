//! Shared JSON error envelope and API error mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::application::WizardError;
use crate::domain::affectation::{AffectationError, AffectationRecord};
use crate::domain::foundation::ErrorCode;
use crate::domain::model::EncodingRegistry;
use crate::domain::wizard::WizardSession;
use crate::ports::HistoryStoreError;

use super::wizard::dto::WizardView;

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Serialize) -> Self {
        self.details = serde_json::to_value(details).ok();
        self
    }
}

/// Details of a 503 raised after a successful prediction.
#[derive(Serialize)]
struct UnsavedRecord<'a> {
    record: &'a AffectationRecord,
    summary: String,
}

/// An error ready to be rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, body: ErrorResponse) -> Self {
        Self { status, body }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ErrorResponse::bad_request(message))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// An answer body that could not be read, rendered like a rejected answer.
    pub fn unreadable_answer(
        rejection: &JsonRejection,
        session: &WizardSession,
        registry: &EncodingRegistry,
    ) -> Self {
        let message = format!("Answer could not be read: {}", rejection.body_text());
        let view = WizardView::from_session(session, registry).with_message(message.clone());
        Self::new(
            rejection.status(),
            ErrorResponse::new(ErrorCode::ValidationFailed, message).with_details(view),
        )
    }

    /// Maps a wizard failure, attaching the session view where one exists.
    pub fn from_wizard(err: WizardError, registry: &EncodingRegistry) -> Self {
        match err {
            WizardError::SessionNotFound(id) => Self::new(
                StatusCode::NOT_FOUND,
                ErrorResponse::new(ErrorCode::SessionNotFound, format!("Session {} not found", id)),
            ),
            WizardError::Rejected { session, rejection } => {
                let message = rejection.user_message();
                let view = WizardView::from_session(&session, registry)
                    .with_message(message.clone());
                Self::new(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse::new(ErrorCode::ValidationFailed, message).with_details(view),
                )
            }
            WizardError::NotAtResult { session } => {
                let view = WizardView::from_session(&session, registry);
                Self::new(
                    StatusCode::CONFLICT,
                    ErrorResponse::new(
                        ErrorCode::IncompleteAnswers,
                        "The questionnaire is not complete yet",
                    )
                    .with_details(view),
                )
            }
            WizardError::Affectation { source, .. } => Self::from(source),
            WizardError::SessionStore(err) => {
                tracing::error!(error = %err, "Session store failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(err.code, err.message),
                )
            }
        }
    }
}

impl From<AffectationError> for ApiError {
    fn from(err: AffectationError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            AffectationError::Encoding(_) => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new(code, message),
            ),
            AffectationError::ModelInference(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(code, message),
            ),
            AffectationError::StoreUnavailable { record, .. } => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new(code, message).with_details(UnsavedRecord {
                    summary: record.summary(),
                    record: record.as_ref(),
                }),
            ),
        }
    }
}

impl From<HistoryStoreError> for ApiError {
    fn from(err: HistoryStoreError) -> Self {
        tracing::error!(error = %err, "History store failure");
        let status = match err {
            HistoryStoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HistoryStoreError::Malformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(
            status,
            ErrorResponse::new(ErrorCode::StoreUnavailable, err.to_string()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::affectation::answers::tests::dupont_answers;
    use crate::domain::model::{CategoricalField, EncodingError};
    use crate::ports::ModelInferenceError;

    #[test]
    fn encoding_error_is_unprocessable() {
        let err = ApiError::from(AffectationError::from(EncodingError::UnknownCategory {
            field: CategoricalField::HousingType,
            value: "Yourte".to_string(),
        }));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.body.code, "UNKNOWN_CATEGORY");
    }

    #[test]
    fn inference_error_is_internal() {
        let err = ApiError::from(AffectationError::from(ModelInferenceError::NoPrediction));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body.code, "MODEL_INFERENCE_FAILED");
    }

    #[test]
    fn store_error_carries_record() {
        let err = ApiError::from(AffectationError::StoreUnavailable {
            record: Box::new(AffectationRecord::new(dupont_answers(), "Hébergement")),
            source: HistoryStoreError::Unavailable("disk full".to_string()),
        });
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.body.code, "STORE_UNAVAILABLE");
        let details = err.body.details.unwrap();
        assert_eq!(details["record"]["assigned_service"], "Hébergement");
    }
}
