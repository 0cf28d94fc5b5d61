//! Wizard HTTP adapter module.
//!
//! REST endpoints driving one wizard session per client.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{OutcomeView, SubmitAnswerRequest, WizardView};
pub use routes::wizard_routes;
