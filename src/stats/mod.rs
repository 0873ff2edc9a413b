//! Stats module - grouped descriptive statistics

mod summary;

pub use summary::{summarize, GroupStats, GroupedSummary, StatsError};
