//! History Store port - append-only persistence of affectation records.
//!
//! # Contract
//!
//! - `append` adds exactly one record after all existing ones. Concurrent
//!   appends must be serialized so no read-modify-write can drop a record.
//! - `read_all` returns records in append order, or an empty list when no
//!   store exists yet. Readers never observe a partially written store.
//! - There is no update or delete; duplicate rows are allowed.

use async_trait::async_trait;

use crate::domain::affectation::AffectationRecord;

/// Errors that can occur during history store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryStoreError {
    #[error("History store unavailable: {0}")]
    Unavailable(String),

    #[error("History store is malformed: {0}")]
    Malformed(String),
}

/// Port for the append-only affectation history.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Appends one record, creating the store if it does not exist.
    ///
    /// # Errors
    /// Returns `HistoryStoreError::Unavailable` on I/O failure
    async fn append(&self, record: &AffectationRecord) -> Result<(), HistoryStoreError>;

    /// Reads every record in append order.
    ///
    /// # Errors
    /// Returns `HistoryStoreError::Unavailable` on I/O failure
    async fn read_all(&self) -> Result<Vec<AffectationRecord>, HistoryStoreError>;
}
