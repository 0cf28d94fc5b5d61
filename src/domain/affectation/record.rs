//! Affectation Record - a completed wizard run and the service it was assigned.

use serde::{Deserialize, Serialize};

use super::AnswerSet;

/// Durable outcome of one completed wizard run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectationRecord {
    #[serde(flatten)]
    answers: AnswerSet,
    assigned_service: String,
}

impl AffectationRecord {
    pub fn new(answers: AnswerSet, assigned_service: impl Into<String>) -> Self {
        Self {
            answers,
            assigned_service: assigned_service.into(),
        }
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn assigned_service(&self) -> &str {
        &self.assigned_service
    }

    /// One-line summary shown at the end of the wizard.
    pub fn summary(&self) -> String {
        format!(
            "{} {} ({} ans) est orienté vers le service {}.",
            self.answers.surname(),
            self.answers.name(),
            self.answers.age(),
            self.assigned_service
        )
    }
}
