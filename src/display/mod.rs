//! Display formatting for terminal output
//!
//! Provides utilities for banners, rules and number formats used by the
//! console session.

pub mod report;

pub use report::{
    center, double_separator, format_banner, format_decimal, format_percentage, label, percentage_of, separator,
    REPORT_WIDTH,
};
