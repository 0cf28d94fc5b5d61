//! Session Adapters
//!
//! - **InMemoryWizardSessionStore** - per-process map of wizard sessions

mod in_memory;

pub use in_memory::InMemoryWizardSessionStore;
