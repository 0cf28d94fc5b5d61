//! WizardSession aggregate - the explicit finite-state machine behind the questionnaire.
//!
//! A session holds the current step and the answers gathered so far. The only
//! ways to change it are:
//! - `submit` - validate the answer for the current step and move forward one step
//! - `restart` - discard every answer and go back to the first step
//! - `record_outcome` - attach the pipeline result once the result step is reached
//!
//! A rejected answer never changes the session; it is returned as a
//! `StepRejected` carrying a user-facing message.

use serde::Serialize;
use thiserror::Error;

use crate::domain::affectation::{AffectationRecord, Age, AnswerSet};
use crate::domain::foundation::{SessionId, StateMachine, Timestamp, ValidationError};
use crate::domain::model::{CategoricalField, EncodingRegistry};

use super::{RawAnswer, StepPrompt, StepSequence, WizardStep};

/// Answers gathered so far; each key is set only once its step validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartialAnswers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub housing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_bracket: Option<String>,
}

impl PartialAnswers {
    /// True when no key has been answered.
    pub fn is_empty(&self) -> bool {
        *self == PartialAnswers::default()
    }

    /// The complete answer set, once all seven keys are present.
    pub fn complete(&self) -> Option<AnswerSet> {
        AnswerSet::new(
            self.name.clone()?,
            self.surname.clone()?,
            self.age?,
            self.request_reason.clone()?,
            self.diagnosis.clone()?,
            self.housing_type.clone()?,
            self.income_bracket.clone()?,
        )
        .ok()
    }
}

/// Why an answer was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    #[error("Answer was for step {submitted:?} but the current step is {current:?}")]
    OutOfOrder {
        submitted: WizardStep,
        current: WizardStep,
    },

    #[error("The questionnaire is complete; restart to answer again")]
    AlreadyComplete,
}

/// An answer refused at `step`; the session stayed on that step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct StepRejected {
    pub step: WizardStep,
    pub reason: RejectionReason,
}

impl StepRejected {
    fn new(step: WizardStep, reason: impl Into<RejectionReason>) -> Self {
        Self {
            step,
            reason: reason.into(),
        }
    }

    /// Message suitable for display next to the input.
    pub fn user_message(&self) -> String {
        match &self.reason {
            RejectionReason::Invalid(ValidationError::UnknownOption { .. }) => {
                format!("Valeur non reconnue. {}", self.reason)
            }
            _ => self.reason.to_string(),
        }
    }
}

/// One user's pass through the questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct WizardSession {
    id: SessionId,
    step: WizardStep,
    answers: PartialAnswers,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<AffectationRecord>,
    started_at: Timestamp,
    updated_at: Timestamp,
}

impl WizardSession {
    /// Creates an empty session on the first step.
    pub fn start(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            step: StepSequence::first(),
            answers: PartialAnswers::default(),
            outcome: None,
            started_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn answers(&self) -> &PartialAnswers {
        &self.answers
    }

    pub fn outcome(&self) -> Option<&AffectationRecord> {
        self.outcome.as_ref()
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// True when the result step is reached but no record is attached yet.
    pub fn awaiting_outcome(&self) -> bool {
        StepSequence::is_last(self.step) && self.outcome.is_none()
    }

    /// Complete answer set; only available on the result step.
    pub fn answer_set(&self) -> Option<AnswerSet> {
        if StepSequence::is_last(self.step) {
            self.answers.complete()
        } else {
            None
        }
    }

    /// Prompt for the current step.
    pub fn prompt(&self, registry: &EncodingRegistry) -> StepPrompt {
        StepPrompt::for_step(self.step, registry)
    }

    /// Validates `answer` against the current step and advances by one.
    ///
    /// `step` is the step the caller is answering; a stale submission is
    /// rejected rather than applied to whatever step is current.
    pub fn submit(
        &mut self,
        step: WizardStep,
        answer: &RawAnswer,
        registry: &EncodingRegistry,
    ) -> Result<WizardStep, StepRejected> {
        let current = self.step;
        if step != current {
            return Err(StepRejected::new(
                current,
                RejectionReason::OutOfOrder {
                    submitted: step,
                    current,
                },
            ));
        }
        let next = StepSequence::next(current)
            .ok_or_else(|| StepRejected::new(current, RejectionReason::AlreadyComplete))?;
        let next = current
            .transition_to(next)
            .map_err(|e| StepRejected::new(current, e))?;

        self.apply(current, answer, registry)
            .map_err(|e| StepRejected::new(current, e))?;

        self.step = next;
        self.touch();
        Ok(next)
    }

    /// Discards every answer and any outcome, returning to the first step.
    pub fn restart(&mut self) {
        self.step = StepSequence::first();
        self.answers = PartialAnswers::default();
        self.outcome = None;
        self.touch();
    }

    /// Attaches the pipeline's record. Only valid on the result step.
    pub fn record_outcome(&mut self, record: AffectationRecord) -> Result<(), ValidationError> {
        if !StepSequence::is_last(self.step) {
            return Err(ValidationError::invalid_format(
                "outcome",
                format!("cannot record an outcome at step {:?}", self.step),
            ));
        }
        self.outcome = Some(record);
        self.touch();
        Ok(())
    }

    /// True when the session saw no activity for `idle_secs` before `now`.
    pub fn is_idle(&self, now: &Timestamp, idle_secs: i64) -> bool {
        now.duration_since(&self.updated_at).num_seconds() > idle_secs
    }

    fn apply(
        &mut self,
        step: WizardStep,
        answer: &RawAnswer,
        registry: &EncodingRegistry,
    ) -> Result<(), ValidationError> {
        match step {
            WizardStep::Name => self.answers.name = Some(answer.require_text("name")?),
            WizardStep::Surname => self.answers.surname = Some(answer.require_text("surname")?),
            WizardStep::Age => self.answers.age = Some(answer.require_age()?),
            WizardStep::RequestReason => {
                self.answers.request_reason =
                    Some(answer.require_choice(CategoricalField::RequestReason, registry)?)
            }
            WizardStep::Diagnosis => {
                self.answers.diagnosis =
                    Some(answer.require_choices(CategoricalField::Diagnosis, registry)?)
            }
            WizardStep::HousingType => {
                self.answers.housing_type =
                    Some(answer.require_choice(CategoricalField::HousingType, registry)?)
            }
            WizardStep::IncomeBracket => {
                self.answers.income_bracket =
                    Some(answer.require_choice(CategoricalField::IncomeBracket, registry)?)
            }
            WizardStep::Result => {}
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
