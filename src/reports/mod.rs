//! Reports module for Budget Tracker
//!
//! Provides the trailing-window summaries: a weekly view listing every
//! expense and a monthly view with spending by category.

pub mod monthly;
pub mod spending;
pub mod summary;
pub mod weekly;

pub use monthly::MonthlySummary;
pub use spending::{CategoryBreakdown, SpendingByCategory};
pub use summary::{empty_window_message, PeriodSummary, TrailingWindow};
pub use weekly::WeeklySummary;
