//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter for endpoint exposure; `build_router`
//! merges them behind a trace layer.

pub mod error;
pub mod health;
pub mod history;
pub mod state;
pub mod wizard;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// Re-export key types for convenience
pub use error::{ApiError, ErrorResponse};
pub use history::history_routes;
pub use state::AppState;
pub use wizard::wizard_routes;

/// Full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::health_routes())
        .merge(wizard_routes(state.clone()))
        .merge(history_routes(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
