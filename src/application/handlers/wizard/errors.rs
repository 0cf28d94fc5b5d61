//! Wizard handler errors.

use thiserror::Error;

use crate::domain::affectation::AffectationError;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::wizard::{StepRejected, WizardSession};

/// Failures of the wizard handlers.
///
/// Variants that leave a session in a meaningful state carry it, so the
/// caller can re-render the current step alongside the error.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Wizard session {0} not found")]
    SessionNotFound(SessionId),

    #[error("{rejection}")]
    Rejected {
        session: Box<WizardSession>,
        rejection: StepRejected,
    },

    #[error("Wizard session is not on the result step")]
    NotAtResult { session: Box<WizardSession> },

    #[error("{source}")]
    Affectation {
        session: Box<WizardSession>,
        #[source]
        source: AffectationError,
    },

    #[error("Session store failed: {0}")]
    SessionStore(#[from] DomainError),
}

impl WizardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            WizardError::Rejected { .. } => ErrorCode::ValidationFailed,
            WizardError::NotAtResult { .. } => ErrorCode::IncompleteAnswers,
            WizardError::Affectation { source, .. } => source.code(),
            WizardError::SessionStore(err) => err.code,
        }
    }

    /// The session as it stands after the failure, when there is one.
    pub fn session(&self) -> Option<&WizardSession> {
        match self {
            WizardError::Rejected { session, .. }
            | WizardError::NotAtResult { session }
            | WizardError::Affectation { session, .. } => Some(&**session),
            WizardError::SessionNotFound(_) | WizardError::SessionStore(_) => None,
        }
    }
}
