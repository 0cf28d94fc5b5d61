//! Request and response bodies for the wizard endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::affectation::AffectationRecord;
use crate::domain::foundation::SessionId;
use crate::domain::model::EncodingRegistry;
use crate::domain::wizard::{PartialAnswers, RawAnswer, StepPrompt, WizardSession, WizardStep};

/// Body of `POST /api/wizard/sessions/:id/answers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    /// Step the client was shown when the user answered.
    pub step: WizardStep,
    pub value: RawAnswer,
}

/// The completed affectation shown on the result step.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeView {
    pub record: AffectationRecord,
    pub summary: String,
}

/// Everything a client needs to render the current step.
#[derive(Debug, Clone, Serialize)]
pub struct WizardView {
    pub session_id: SessionId,
    pub step: WizardStep,
    pub prompt: StepPrompt,
    pub answers: PartialAnswers,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<OutcomeView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WizardView {
    pub fn from_session(session: &WizardSession, registry: &EncodingRegistry) -> Self {
        Self {
            session_id: *session.id(),
            step: session.step(),
            prompt: session.prompt(registry),
            answers: session.answers().clone(),
            outcome: session.outcome().map(|record| OutcomeView {
                summary: record.summary(),
                record: record.clone(),
            }),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
