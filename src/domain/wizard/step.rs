//! Wizard steps and their fixed ordering.
//!
//! # Step Order
//!
//! 0. Name → 1. Surname → 2. Age → 3. RequestReason → 4. Diagnosis →
//! 5. HousingType → 6. IncomeBracket → 7. Result
//!
//! There is no backward move: the only way to an earlier step is a restart,
//! which always lands on `Name`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;
use crate::domain::model::CategoricalField;

/// One screen of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Name,
    Surname,
    Age,
    RequestReason,
    Diagnosis,
    HousingType,
    IncomeBracket,
    Result,
}

impl WizardStep {
    /// 0-based position of the step (7 = result).
    pub fn index(&self) -> u8 {
        StepSequence::order_index(*self) as u8
    }

    /// Answer key collected at this step, `None` for the result step.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            WizardStep::Name => Some("name"),
            WizardStep::Surname => Some("surname"),
            WizardStep::Age => Some("age"),
            WizardStep::RequestReason => Some("request_reason"),
            WizardStep::Diagnosis => Some("diagnosis"),
            WizardStep::HousingType => Some("housing_type"),
            WizardStep::IncomeBracket => Some("income_bracket"),
            WizardStep::Result => None,
        }
    }

    /// Categorical field whose options back this step, if any.
    pub fn categorical_field(&self) -> Option<CategoricalField> {
        match self {
            WizardStep::RequestReason => Some(CategoricalField::RequestReason),
            WizardStep::Diagnosis => Some(CategoricalField::Diagnosis),
            WizardStep::HousingType => Some(CategoricalField::HousingType),
            WizardStep::IncomeBracket => Some(CategoricalField::IncomeBracket),
            _ => None,
        }
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        StepSequence::next(*self) == Some(*target) || StepSequence::is_first(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        let mut targets: Vec<Self> = StepSequence::next(*self).into_iter().collect();
        if !targets.contains(&StepSequence::first()) {
            targets.push(StepSequence::first());
        }
        targets
    }
}

/// Central location for step ordering logic.
pub struct StepSequence;

impl StepSequence {
    /// The canonical order of wizard steps.
    pub const ORDER: [WizardStep; 8] = [
        WizardStep::Name,
        WizardStep::Surname,
        WizardStep::Age,
        WizardStep::RequestReason,
        WizardStep::Diagnosis,
        WizardStep::HousingType,
        WizardStep::IncomeBracket,
        WizardStep::Result,
    ];

    /// Number of question steps before the result.
    pub const QUESTION_COUNT: u8 = 7;

    /// Returns the 0-based index of a step in the sequence.
    #[inline]
    pub fn order_index(step: WizardStep) -> usize {
        match step {
            WizardStep::Name => 0,
            WizardStep::Surname => 1,
            WizardStep::Age => 2,
            WizardStep::RequestReason => 3,
            WizardStep::Diagnosis => 4,
            WizardStep::HousingType => 5,
            WizardStep::IncomeBracket => 6,
            WizardStep::Result => 7,
        }
    }

    /// Returns the next step, or None at the result step.
    pub fn next(step: WizardStep) -> Option<WizardStep> {
        Self::ORDER.get(Self::order_index(step) + 1).copied()
    }

    pub fn first() -> WizardStep {
        Self::ORDER[0]
    }

    pub fn last() -> WizardStep {
        Self::ORDER[Self::ORDER.len() - 1]
    }

    pub fn is_first(step: WizardStep) -> bool {
        step == Self::first()
    }

    pub fn is_last(step: WizardStep) -> bool {
        step == Self::last()
    }

    /// Fraction of the questionnaire completed when standing on `step`.
    pub fn progress(step: WizardStep) -> f32 {
        f32::from(step.index()) / f32::from(Self::QUESTION_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_index_matches_position_in_order() {
        for (idx, step) in StepSequence::ORDER.iter().enumerate() {
            assert_eq!(StepSequence::order_index(*step), idx);
            assert_eq!(step.index() as usize, idx);
        }
    }

    #[test]
    fn next_walks_forward_and_stops_at_result() {
        assert_eq!(StepSequence::next(WizardStep::Name), Some(WizardStep::Surname));
        assert_eq!(
            StepSequence::next(WizardStep::IncomeBracket),
            Some(WizardStep::Result)
        );
        assert_eq!(StepSequence::next(WizardStep::Result), None);
    }

    #[test]
    fn only_forward_by_one_or_restart_is_allowed() {
        assert!(WizardStep::Age.can_transition_to(&WizardStep::RequestReason));
        assert!(WizardStep::Age.can_transition_to(&WizardStep::Name));
        assert!(!WizardStep::Age.can_transition_to(&WizardStep::Surname));
        assert!(!WizardStep::Age.can_transition_to(&WizardStep::Diagnosis));
    }

    #[test]
    fn result_step_can_only_restart() {
        assert_eq!(WizardStep::Result.valid_transitions(), vec![WizardStep::Name]);
        assert!(!WizardStep::Result.is_terminal());
    }

    #[test]
    fn progress_runs_from_zero_to_one() {
        assert_eq!(StepSequence::progress(WizardStep::Name), 0.0);
        assert_eq!(StepSequence::progress(WizardStep::Result), 1.0);
    }

    #[test]
    fn categorical_steps_map_to_fields() {
        assert_eq!(
            WizardStep::Diagnosis.categorical_field(),
            Some(CategoricalField::Diagnosis)
        );
        assert_eq!(WizardStep::Age.categorical_field(), None);
        assert_eq!(WizardStep::Result.key(), None);
    }
}
