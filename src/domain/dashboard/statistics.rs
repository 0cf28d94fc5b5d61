//! Aggregate figures over the stored history.

use serde::Serialize;

use crate::domain::affectation::AffectationRecord;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStatistics {
    /// Number of stored records
    pub total_records: usize,
    /// Number of distinct assigned services
    pub distinct_services: usize,
    /// Statistical mode of the assigned service; ties go to the value
    /// encountered first in stored order
    pub most_frequent_service: Option<String>,
}

impl HistoryStatistics {
    pub fn compute(records: &[AffectationRecord]) -> Self {
        // (service, count) in first-encountered order
        let mut tally: Vec<(&str, usize)> = Vec::new();
        for record in records {
            let service = record.assigned_service();
            match tally.iter_mut().find(|(s, _)| *s == service) {
                Some((_, count)) => *count += 1,
                None => tally.push((service, 1)),
            }
        }

        let mut most_frequent: Option<(&str, usize)> = None;
        for (service, count) in &tally {
            if most_frequent.map_or(true, |(_, best)| *count > best) {
                most_frequent = Some((*service, *count));
            }
        }

        Self {
            total_records: records.len(),
            distinct_services: tally.len(),
            most_frequent_service: most_frequent.map(|(s, _)| s.to_string()),
        }
    }
}
