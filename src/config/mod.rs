//! Configuration module for Budget Tracker
//!
//! This module provides:
//! - Display and report-window defaults
//! - The per-session daily transaction goal

pub mod settings;

pub use settings::{DailyGoal, Settings};
