//! Storage Adapters
//!
//! Implementations of the HistoryStore port for the affectation history.
//!
//! ## Available Adapters
//!
//! - **FileHistoryStore** - Stores the history as a single YAML file on disk
//! - **InMemoryHistoryStore** - Stores records in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileHistoryStore, InMemoryHistoryStore};
//!
//! // Production: file-based history
//! let store = FileHistoryStore::new("./historique_affectations.yaml");
//!
//! // Testing: in-memory history
//! let store = InMemoryHistoryStore::new();
//! ```

mod file_history_store;
mod in_memory_history_store;

pub use file_history_store::FileHistoryStore;
pub use in_memory_history_store::InMemoryHistoryStore;
