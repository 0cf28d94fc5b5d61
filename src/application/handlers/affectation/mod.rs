//! Affectation pipeline handler.

mod run_affectation;

pub use run_affectation::{RunAffectationCommand, RunAffectationHandler};
