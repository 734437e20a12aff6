//! Expense model
//!
//! A single dated spending record. Expenses are immutable once built; the
//! ledger only ever appends them.

use chrono::NaiveDate;
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    date: NaiveDate,
    amount: Money,
    category: Category,
}

impl Expense {
    /// Create a new expense
    ///
    /// Positivity of `amount` is checked by the input layer before this is
    /// called.
    pub fn new(date: NaiveDate, amount: Money, category: Category) -> Self {
        Self {
            date,
            amount,
            category,
        }
    }

    /// Date the expense applies to
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Amount spent
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Category label
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Check if this expense falls on the given day
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Check if this expense is dated on or after the given day
    pub fn is_on_or_after(&self, date: NaiveDate) -> bool {
        self.date >= date
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {} | Amount: {} | Category: {}",
            self.date, self.amount, self.category
        )
    }
}
