//! Validation of raw console input
//!
//! Each parser turns one trimmed line into a typed value or an `InputError`
//! whose message is shown to the user before the prompt repeats.

use chrono::NaiveDate;
use std::num::NonZeroU32;
use thiserror::Error;

use crate::config::DailyGoal;
use crate::models::{Category, Money};

/// Entry format for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a line of input was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Goal is not an integer
    #[error("Invalid input. Please enter a number.")]
    GoalNotANumber,

    /// Goal is zero or negative
    #[error("Please enter a positive number.")]
    GoalNotPositive,

    /// Date is not a real YYYY-MM-DD date
    #[error("Invalid date format. Please use YYYY-MM-DD (e.g., 2025-11-06)")]
    DateFormat,

    /// Amount is not a number
    #[error("Invalid amount. Please enter a number (e.g., 25.50)")]
    AmountNotANumber,

    /// Amount is zero or negative
    #[error("Amount must be positive.")]
    AmountNotPositive,
}

/// Parse the daily transaction goal
///
/// Integers too large for the goal are treated as non-numeric.
pub fn parse_goal(input: &str) -> Result<DailyGoal, InputError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| InputError::GoalNotANumber)?;

    if value <= 0 {
        return Err(InputError::GoalNotPositive);
    }

    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .map(DailyGoal::from)
        .ok_or(InputError::GoalNotANumber)
}

/// Parse an expense date
///
/// Blank input means `today`. Anything else must be exactly `YYYY-MM-DD`
/// and name a real calendar day.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, InputError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }

    if !has_date_shape(input) {
        return Err(InputError::DateFormat);
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| InputError::DateFormat)
}

/// Four-digit year, two-digit month, two-digit day, dash separated
fn has_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse an expense amount, which must be strictly positive
///
/// An amount that rounds to zero cents counts as not positive.
pub fn parse_amount(input: &str) -> Result<Money, InputError> {
    let amount = Money::parse(input).map_err(|_| InputError::AmountNotANumber)?;

    if !amount.is_positive() {
        return Err(InputError::AmountNotPositive);
    }

    Ok(amount)
}

/// Parse a category; never fails
pub fn parse_category(input: &str, fallback: &str) -> Category {
    Category::from_input(input, fallback)
}
