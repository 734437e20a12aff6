//! Core data models for Budget Tracker
//!
//! This module contains the data structures of the expense domain: amounts,
//! category labels and the expense record itself.

pub mod category;
pub mod expense;
pub mod money;

pub use category::{Category, FALLBACK_CATEGORY};
pub use expense::Expense;
pub use money::{Money, MoneyParseError};
