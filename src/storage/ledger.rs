//! In-memory expense ledger
//!
//! Holds every expense recorded during the session in insertion order. The
//! ledger is append-only and is never sorted, so a back-dated expense can sit
//! after later ones; queries here make no ordering assumptions.

use chrono::NaiveDate;

use crate::models::Expense;

/// Append-only collection of expenses
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense, returning the new ledger size
    pub fn append(&mut self, expense: Expense) -> usize {
        self.expenses.push(expense);
        self.expenses.len()
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Count expenses dated on the given day
    pub fn count_on(&self, date: NaiveDate) -> usize {
        self.expenses.iter().filter(|e| e.is_on(date)).count()
    }

    /// Expenses dated on or after `start`, in insertion order
    pub fn since(&self, start: NaiveDate) -> impl Iterator<Item = &Expense> + '_ {
        self.expenses.iter().filter(move |e| e.is_on_or_after(start))
    }
}
