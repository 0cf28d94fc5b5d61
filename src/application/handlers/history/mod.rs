//! History query handlers.

mod get_history;
mod get_history_overview;

pub use get_history::GetHistoryHandler;
pub use get_history_overview::{GetHistoryOverviewHandler, GetHistoryOverviewQuery};
