//! History HTTP adapter module.
//!
//! Read-only endpoints over the affectation history and its dashboard.

pub mod handlers;
pub mod routes;

pub use handlers::DashboardParams;
pub use routes::history_routes;
