//! In-Memory History Store Adapter
//!
//! Keeps affectation records in a vector. Useful for testing and development,
//! and able to simulate an unavailable store.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::affectation::AffectationRecord;
use crate::ports::{HistoryStore, HistoryStoreError};

/// In-memory affectation history
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    records: Arc<RwLock<Vec<AffectationRecord>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryHistoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with records
    pub fn with_records(records: Vec<AffectationRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            unavailable: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make every subsequent operation fail with `Unavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True when no record has been stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn check_available(&self) -> Result<(), HistoryStoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(HistoryStoreError::Unavailable(
                "in-memory store switched off".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn append(&self, record: &AffectationRecord) -> Result<(), HistoryStoreError> {
        self.check_available()?;
        self.records.write().await.push(record.clone());
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<AffectationRecord>, HistoryStoreError> {
        self.check_available()?;
        Ok(self.records.read().await.clone())
    }
}
