//! Dashboard filters over the stored history.

use serde::{Deserialize, Serialize};

use crate::domain::affectation::AffectationRecord;

/// Optional equality filters; `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housing_type: Option<String>,
}

impl HistoryFilter {
    pub fn is_empty(&self) -> bool {
        self.service.is_none() && self.request_reason.is_none() && self.housing_type.is_none()
    }

    pub fn matches(&self, record: &AffectationRecord) -> bool {
        let answers = record.answers();
        matches_opt(&self.service, record.assigned_service())
            && matches_opt(&self.request_reason, answers.request_reason())
            && matches_opt(&self.housing_type, answers.housing_type())
    }

    /// Records passing every filter, in stored order.
    pub fn apply(&self, records: &[AffectationRecord]) -> Vec<AffectationRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

fn matches_opt(expected: &Option<String>, actual: &str) -> bool {
    expected.as_deref().map_or(true, |e| e == actual)
}

/// Sorted distinct values offered by each filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub services: Vec<String>,
    pub request_reasons: Vec<String>,
    pub housing_types: Vec<String>,
}

impl FilterOptions {
    pub fn collect(records: &[AffectationRecord]) -> Self {
        Self {
            services: distinct(records, |r| r.assigned_service()),
            request_reasons: distinct(records, |r| r.answers().request_reason()),
            housing_types: distinct(records, |r| r.answers().housing_type()),
        }
    }
}

fn distinct<F>(records: &[AffectationRecord], column: F) -> Vec<String>
where
    F: Fn(&AffectationRecord) -> &str,
{
    let mut values: Vec<String> = records.iter().map(|r| column(r).to_string()).collect();
    values.sort();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::affectation::{Age, AnswerSet};

    fn record(reason: &str, housing: &str, service: &str) -> AffectationRecord {
        let answers = AnswerSet::new(
            "Dupont",
            "Marie",
            Age::new(34).unwrap(),
            reason,
            vec!["Dépression".to_string()],
            housing,
            "20k-40k",
        )
        .unwrap();
        AffectationRecord::new(answers, service)
    }

    fn history() -> Vec<AffectationRecord> {
        vec![
            record("Logement", "Locataire", "Hébergement"),
            record("Emploi", "Locataire", "Insertion professionnelle"),
            record("Logement", "Sans domicile", "Hébergement"),
        ]
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = HistoryFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&history()).len(), 3);
    }

    #[test]
    fn filters_combine_with_and() {
        let filter = HistoryFilter {
            service: Some("Hébergement".to_string()),
            housing_type: Some("Locataire".to_string()),
            ..Default::default()
        };
        let filtered = filter.apply(&history());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].answers().request_reason(), "Logement");
    }

    #[test]
    fn options_are_sorted_and_distinct() {
        let options = FilterOptions::collect(&history());
        assert_eq!(options.services, vec!["Hébergement", "Insertion professionnelle"]);
        assert_eq!(options.request_reasons, vec!["Emploi", "Logement"]);
        assert_eq!(options.housing_types, vec!["Locataire", "Sans domicile"]);
    }
}
