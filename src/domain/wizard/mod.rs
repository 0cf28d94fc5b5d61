//! Wizard domain - the step-by-step questionnaire state machine.
//!
//! - `WizardStep` / `StepSequence` - the fixed step order (0..=7)
//! - `RawAnswer` - unvalidated input from the presentation layer
//! - `StepPrompt` - what to render for a step
//! - `WizardSession` - the aggregate holding step and answers

mod answer;
mod prompt;
pub(crate) mod session;
mod step;

pub use answer::RawAnswer;
pub use prompt::{InputKind, StepPrompt};
pub use session::{PartialAnswers, RejectionReason, StepRejected, WizardSession};
pub use step::{StepSequence, WizardStep};
