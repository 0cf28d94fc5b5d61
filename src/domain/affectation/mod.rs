//! Affectation domain - answers, records and pipeline failures.
//!
//! - `AnswerSet` / `Age` - validated questionnaire answers
//! - `AffectationRecord` - answers plus the assigned service, as persisted
//! - `DiagnosisStrategy` - reduction of the multi-valued diagnosis answer
//! - `AffectationError` - typed pipeline failures

pub(crate) mod answers;
mod errors;
mod record;
mod strategy;

pub use answers::{Age, AnswerSet};
pub use errors::AffectationError;
pub use record::AffectationRecord;
pub use strategy::DiagnosisStrategy;
pub(crate) use strategy::first_mode;
