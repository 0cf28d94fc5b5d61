//! HTTP handlers for history and dashboard endpoints.

use axum::extract::{Json, Query, State};
use serde::Deserialize;

use crate::application::GetHistoryOverviewQuery;
use crate::domain::affectation::AffectationRecord;
use crate::domain::dashboard::{HistoryFilter, HistoryOverview};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// Label meaning "no filter" in dashboard selectors.
const ALL: &str = "Tous";

/// Query parameters for the dashboard endpoint.
///
/// A missing, empty or `Tous` value leaves that column unfiltered.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub service: Option<String>,
    pub request_reason: Option<String>,
    pub housing_type: Option<String>,
}

impl DashboardParams {
    pub fn into_filter(self) -> HistoryFilter {
        fn selected(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty() && v != ALL)
        }

        HistoryFilter {
            service: selected(self.service),
            request_reason: selected(self.request_reason),
            housing_type: selected(self.housing_type),
        }
    }
}

/// GET /api/history
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<AffectationRecord>>, ApiError> {
    let records = state.get_history_handler().handle().await?;
    Ok(Json(records))
}

/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<HistoryOverview>, ApiError> {
    let overview = state
        .get_history_overview_handler()
        .handle(GetHistoryOverviewQuery {
            filter: params.into_filter(),
        })
        .await?;
    Ok(Json(overview))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_all_values_do_not_filter() {
        let filter = DashboardParams {
            service: Some("Tous".to_string()),
            request_reason: Some("  ".to_string()),
            housing_type: Some("Locataire".to_string()),
        }
        .into_filter();

        assert_eq!(filter.service, None);
        assert_eq!(filter.request_reason, None);
        assert_eq!(filter.housing_type.as_deref(), Some("Locataire"));
    }

    #[test]
    fn default_params_are_an_empty_filter() {
        assert!(DashboardParams::default().into_filter().is_empty());
    }
}
