//! How a multi-valued diagnosis answer is reduced to the model's single slot.

use serde::{Deserialize, Serialize};

/// Reduction applied to the diagnosis answer before prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisStrategy {
    /// Only the first selected diagnosis reaches the model.
    #[default]
    FirstOnly,
    /// Predict once per diagnosis and keep the most frequent prediction;
    /// ties go to the prediction of the earliest diagnosis.
    MajorityVote,
}

/// Most frequent value, ties broken by first appearance.
pub(crate) fn first_mode<T: PartialEq + Copy>(values: &[T]) -> Option<T> {
    let mut best: Option<(T, usize)> = None;
    for (idx, value) in values.iter().enumerate() {
        if values[..idx].contains(value) {
            continue;
        }
        let count = values[idx..].iter().filter(|v| *v == value).count();
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((*value, count));
        }
    }
    best.map(|(value, _)| value)
}
