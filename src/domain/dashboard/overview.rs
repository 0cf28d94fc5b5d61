//! Dashboard overview - the read model served to the presentation layer.

use serde::Serialize;

use crate::domain::affectation::AffectationRecord;

use super::{FilterOptions, HistoryFilter, HistoryStatistics};

/// Full history, its filtered view and the aggregate figures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryOverview {
    pub records: Vec<AffectationRecord>,
    pub filter: HistoryFilter,
    pub filtered: Vec<AffectationRecord>,
    /// Computed over the whole history, not the filtered view
    pub statistics: HistoryStatistics,
    pub options: FilterOptions,
}

impl HistoryOverview {
    pub fn build(records: Vec<AffectationRecord>, filter: HistoryFilter) -> Self {
        let filtered = filter.apply(&records);
        let statistics = HistoryStatistics::compute(&records);
        let options = FilterOptions::collect(&records);
        Self {
            records,
            filter,
            filtered,
            statistics,
            options,
        }
    }
}
