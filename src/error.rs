//! Custom error types for Budget Tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Budget Tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Console I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The input stream ended before the user chose to exit
    #[error("Input stream closed")]
    InputClosed,

    /// Today's expense count has already reached the configured goal
    #[error("You've already reached your daily transaction goal of {goal} transactions today!")]
    DailyGoalReached { goal: u32 },
}

impl TrackerError {
    /// Check if this is the daily goal guard
    pub fn is_goal_reached(&self) -> bool {
        matches!(self, Self::DailyGoalReached { .. })
    }

    /// Check if the input stream has ended
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Budget Tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
