//! Weekly Summary
//!
//! Totals and averages for the trailing week, followed by every expense in
//! the window.

use chrono::NaiveDate;

use super::summary::{PeriodSummary, TrailingWindow};
use crate::config::DailyGoal;
use crate::storage::Ledger;

/// Weekly Summary
#[derive(Debug, Clone)]
pub struct WeeklySummary {
    pub summary: PeriodSummary,
}

impl WeeklySummary {
    /// Banner title for a window of this length
    pub fn title(window: TrailingWindow) -> String {
        format!("WEEKLY SUMMARY ({} Days)", window.days())
    }

    /// Summarize the window ending `today`, or `None` if it is empty
    pub fn generate(ledger: &Ledger, window: TrailingWindow, today: NaiveDate) -> Option<Self> {
        PeriodSummary::generate(ledger, window, today).map(|summary| Self { summary })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, goal: DailyGoal) -> String {
        let mut output = self.summary.format_overview(goal);

        output.push_str("\nRecent Expenses:\n");
        for expense in &self.summary.expenses {
            output.push_str(&format!("  • {}\n", expense));
        }
        output.push('\n');

        output
    }
}
