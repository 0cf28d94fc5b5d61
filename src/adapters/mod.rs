//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `model` - JSON model artifact and tree-ensemble classifier
//! - `storage` - affectation history (YAML file, in-memory)
//! - `session` - in-progress wizard sessions
//! - `http` - axum REST API for the wizard and the dashboard

pub mod http;
pub mod model;
pub mod session;
pub mod storage;

pub use model::{ModelBundle, TreeEnsemble};
pub use session::InMemoryWizardSessionStore;
pub use storage::{FileHistoryStore, InMemoryHistoryStore};
