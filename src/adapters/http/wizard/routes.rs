//! HTTP routes for wizard endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    finalize_session, get_session, restart_session, start_session, submit_answer,
};
use crate::adapters::http::state::AppState;

/// Creates the wizard router, nested under `/api/wizard`.
pub fn wizard_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/wizard/sessions", post(start_session))
        .route("/api/wizard/sessions/:id", get(get_session))
        .route("/api/wizard/sessions/:id/answers", post(submit_answer))
        .route("/api/wizard/sessions/:id/restart", post(restart_session))
        .route("/api/wizard/sessions/:id/finalize", post(finalize_session))
        .with_state(state)
}
