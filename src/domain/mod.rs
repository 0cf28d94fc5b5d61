//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `model` - Categorical encoding registry and feature vectors
//! - `wizard` - Questionnaire steps and the session state machine
//! - `affectation` - Answer sets, records and pipeline errors
//! - `dashboard` - Read models over the stored history

pub mod affectation;
pub mod dashboard;
pub mod foundation;
pub mod model;
pub mod wizard;
