//! Trailing-window summaries
//!
//! Filters the ledger to a window of days ending today and computes totals,
//! counts and per-day averages. Everything here is a pure function of the
//! ledger, the current date and the window length.

use chrono::{Duration, NaiveDate};

use crate::config::DailyGoal;
use crate::display::{format_decimal, separator, REPORT_WIDTH};
use crate::models::{Expense, Money};
use crate::storage::Ledger;

/// A range of days ending on the current date
///
/// A window of `n` days starts `n - 1` days before today, so today is always
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingWindow {
    days: u32,
}

impl TrailingWindow {
    /// Seven days ending today
    pub const WEEK: Self = Self { days: 7 };

    /// Thirty days ending today
    pub const MONTH: Self = Self { days: 30 };

    /// Create a window of the given length (at least one day)
    pub fn new(days: u32) -> Self {
        Self { days: days.max(1) }
    }

    /// Number of days in the window
    pub fn days(&self) -> u32 {
        self.days
    }

    /// First day of the window
    pub fn start(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_signed(Duration::days(i64::from(self.days) - 1))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Expenses dated on or after the window start, in ledger order
    ///
    /// There is no upper bound: expenses dated after today are kept.
    pub fn filter<'a>(&self, ledger: &'a Ledger, today: NaiveDate) -> Vec<&'a Expense> {
        ledger.since(self.start(today)).collect()
    }
}

/// Aggregates over the expenses in one trailing window
#[derive(Debug, Clone)]
pub struct PeriodSummary {
    /// First day of the window
    pub start_date: NaiveDate,
    /// Last day of the window (the current date)
    pub end_date: NaiveDate,
    /// Window length used as the averaging divisor
    pub window_days: u32,
    /// Expenses in the window, in ledger insertion order
    pub expenses: Vec<Expense>,
    /// Sum of all amounts in the window
    pub total: Money,
}

impl PeriodSummary {
    /// Summarize the window ending `today`
    ///
    /// Returns `None` when no expense falls in the window.
    pub fn generate(ledger: &Ledger, window: TrailingWindow, today: NaiveDate) -> Option<Self> {
        let expenses: Vec<Expense> = window
            .filter(ledger, today)
            .into_iter()
            .cloned()
            .collect();

        if expenses.is_empty() {
            return None;
        }

        let total: Money = expenses.iter().map(Expense::amount).sum();

        Some(Self {
            start_date: window.start(today),
            end_date: today,
            window_days: window.days(),
            expenses,
            total,
        })
    }

    /// Number of expenses in the window
    pub fn transaction_count(&self) -> usize {
        self.expenses.len()
    }

    /// Total divided by the full window length
    ///
    /// The divisor is always the window length, however many of its days
    /// actually hold expenses.
    pub fn average_daily_spend(&self) -> f64 {
        self.total.as_f64() / f64::from(self.window_days)
    }

    /// Transaction count divided by the full window length
    pub fn average_transactions_per_day(&self) -> f64 {
        self.transaction_count() as f64 / f64::from(self.window_days)
    }

    /// Format the period line and the totals block, framed by rules
    pub fn format_overview(&self, goal: DailyGoal) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Period: {} to {}\n",
            self.start_date, self.end_date
        ));
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!("Total Expenses:        {}\n", self.total));
        output.push_str(&format!(
            "Total Transactions:    {}\n",
            self.transaction_count()
        ));
        output.push_str(&format!(
            "Average Daily Spend:   ${}\n",
            format_decimal(self.average_daily_spend(), 2)
        ));
        output.push_str(&format!(
            "Avg Transactions/Day:  {} / {} (goal)\n",
            format_decimal(self.average_transactions_per_day(), 1),
            goal
        ));
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');

        output
    }
}

/// Message shown instead of a report when the window holds no expenses
pub fn empty_window_message(window: TrailingWindow) -> String {
    format!("No expenses recorded in the past {} days.", window.days())
}
