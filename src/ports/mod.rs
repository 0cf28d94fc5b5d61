//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Classifier` - the opaque pre-trained model
//! - `HistoryStore` - append-only affectation history
//! - `WizardSessionStore` - per-user in-progress wizard sessions

mod classifier;
mod history_store;
mod wizard_session_store;

pub use classifier::{Classifier, ModelInferenceError};
pub use history_store::{HistoryStore, HistoryStoreError};
pub use wizard_session_store::WizardSessionStore;
