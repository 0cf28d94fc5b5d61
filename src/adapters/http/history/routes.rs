//! HTTP routes for history endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_dashboard, get_history};
use crate::adapters::http::state::AppState;

/// Creates the history router with all routes.
pub fn history_routes(state: AppState) -> Router {
    Router::new()
        // GET /api/history
        .route("/api/history", get(get_history))
        // GET /api/dashboard?service=&request_reason=&housing_type=
        .route("/api/dashboard", get(get_dashboard))
        .with_state(state)
}
