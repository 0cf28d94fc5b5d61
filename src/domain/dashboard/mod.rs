//! Dashboard read models over the affectation history.

mod filter;
mod overview;
mod statistics;

pub use filter::{FilterOptions, HistoryFilter};
pub use overview::HistoryOverview;
pub use statistics::HistoryStatistics;
