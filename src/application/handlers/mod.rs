//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod affectation;
pub mod history;
pub mod wizard;

pub use affectation::{RunAffectationCommand, RunAffectationHandler};
pub use history::{GetHistoryHandler, GetHistoryOverviewHandler, GetHistoryOverviewQuery};
pub use wizard::{
    EvictIdleSessionsHandler, FinalizeWizardCommand, FinalizeWizardHandler, GetWizardHandler,
    GetWizardQuery, RestartWizardCommand, RestartWizardHandler, StartWizardHandler,
    SubmitAnswerCommand, SubmitAnswerHandler, WizardError,
};
