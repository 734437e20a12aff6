//! Monthly Summary
//!
//! Totals and averages for the trailing month with a per-category spending
//! breakdown. Individual expenses are not listed.

use chrono::NaiveDate;

use super::spending::CategoryBreakdown;
use super::summary::{PeriodSummary, TrailingWindow};
use crate::config::DailyGoal;
use crate::display::{format_percentage, label};
use crate::storage::Ledger;

/// Monthly Summary
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub summary: PeriodSummary,
    pub breakdown: CategoryBreakdown,
}

impl MonthlySummary {
    /// Banner title for a window of this length
    pub fn title(window: TrailingWindow) -> String {
        format!("MONTHLY SUMMARY ({} Days)", window.days())
    }

    /// Summarize the window ending `today`, or `None` if it is empty
    pub fn generate(ledger: &Ledger, window: TrailingWindow, today: NaiveDate) -> Option<Self> {
        let summary = PeriodSummary::generate(ledger, window, today)?;
        let breakdown = CategoryBreakdown::from_expenses(&summary.expenses);
        Some(Self { summary, breakdown })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, goal: DailyGoal, label_width: usize) -> String {
        let mut output = self.summary.format_overview(goal);

        output.push_str("\nSpending by Category:\n");
        for row in &self.breakdown.categories {
            output.push_str(&format!(
                "  {} {} ({})\n",
                label(row.category.name(), label_width),
                row.total_spending,
                format_percentage(row.percentage)
            ));
        }
        output.push('\n');

        output
    }
}
