//! GetHistoryHandler - the full affectation history in append order.

use std::sync::Arc;

use crate::domain::affectation::AffectationRecord;
use crate::ports::{HistoryStore, HistoryStoreError};

/// Handler returning every recorded affectation.
pub struct GetHistoryHandler {
    history: Arc<dyn HistoryStore>,
}

impl GetHistoryHandler {
    pub fn new(history: Arc<dyn HistoryStore>) -> Self {
        Self { history }
    }

    pub async fn handle(&self) -> Result<Vec<AffectationRecord>, HistoryStoreError> {
        self.history.read_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryHistoryStore;
    use crate::domain::affectation::answers::tests::dupont_answers;

    #[tokio::test]
    async fn returns_records_in_append_order() {
        let store = InMemoryHistoryStore::with_records(vec![
            AffectationRecord::new(dupont_answers(), "A"),
            AffectationRecord::new(dupont_answers(), "B"),
        ]);
        let handler = GetHistoryHandler::new(Arc::new(store));

        let services: Vec<_> = handler
            .handle()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.assigned_service().to_string())
            .collect();
        assert_eq!(services, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn empty_history_is_not_an_error() {
        let handler = GetHistoryHandler::new(Arc::new(InMemoryHistoryStore::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }
}
