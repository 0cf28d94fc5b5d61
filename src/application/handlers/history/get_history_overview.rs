//! GetHistoryOverviewHandler - dashboard data over the affectation history.
//!
//! Statistics and filter options always describe the whole history; the
//! filter only narrows the `filtered` table.

use std::sync::Arc;

use crate::domain::dashboard::{HistoryFilter, HistoryOverview};
use crate::ports::{HistoryStore, HistoryStoreError};

/// Query for the dashboard overview.
#[derive(Debug, Clone, Default)]
pub struct GetHistoryOverviewQuery {
    pub filter: HistoryFilter,
}

/// Handler for the dashboard overview.
pub struct GetHistoryOverviewHandler {
    history: Arc<dyn HistoryStore>,
}

impl GetHistoryOverviewHandler {
    pub fn new(history: Arc<dyn HistoryStore>) -> Self {
        Self { history }
    }

    pub async fn handle(
        &self,
        query: GetHistoryOverviewQuery,
    ) -> Result<HistoryOverview, HistoryStoreError> {
        let records = self.history.read_all().await?;
        Ok(HistoryOverview::build(records, query.filter))
    }
}
