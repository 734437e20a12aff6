//! Expense service
//!
//! Business rules for recording expenses: the daily transaction goal guard and
//! appending to the ledger.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::DailyGoal;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;
use crate::storage::Ledger;

/// Service for recording expenses against a daily goal
pub struct ExpenseService<'a> {
    ledger: &'a mut Ledger,
    goal: DailyGoal,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(ledger: &'a mut Ledger, goal: DailyGoal) -> Self {
        Self { ledger, goal }
    }

    /// Number of expenses dated `today`
    pub fn todays_count(&self, today: NaiveDate) -> usize {
        self.ledger.count_on(today)
    }

    /// Check that another expense may be added today
    ///
    /// Returns today's current count, or `DailyGoalReached` when the count is
    /// already at the goal.
    pub fn ensure_can_add(&self, today: NaiveDate) -> TrackerResult<usize> {
        let count = self.todays_count(today);
        if self.goal.is_reached_by(count) {
            debug!(%today, count, goal = self.goal.get(), "Daily goal reached");
            return Err(TrackerError::DailyGoalReached {
                goal: self.goal.get(),
            });
        }
        Ok(count)
    }

    /// Append an expense to the ledger
    ///
    /// An expense dated `today` is refused if the goal has been reached in the
    /// meantime.
    pub fn record(&mut self, expense: Expense, today: NaiveDate) -> TrackerResult<()> {
        if expense.is_on(today) {
            self.ensure_can_add(today)?;
        }

        info!(
            date = %expense.date(),
            amount = %expense.amount(),
            category = %expense.category(),
            "Recorded expense"
        );
        self.ledger.append(expense);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 6).unwrap()
    }

    fn expense_on(date: NaiveDate) -> Expense {
        Expense::new(date, Money::from_cents(1000), Category::new("Food"))
    }

    #[test]
    fn test_goal_of_two_allows_two_today() {
        let mut ledger = Ledger::new();
        let goal = DailyGoal::new(2).unwrap();
        let mut service = ExpenseService::new(&mut ledger, goal);

        assert_eq!(service.ensure_can_add(today()).unwrap(), 0);
        service.record(expense_on(today()), today()).unwrap();

        assert_eq!(service.ensure_can_add(today()).unwrap(), 1);
        service.record(expense_on(today()), today()).unwrap();

        let err = service.ensure_can_add(today()).unwrap_err();
        assert!(err.is_goal_reached());
        assert!(service.record(expense_on(today()), today()).is_err());

        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_todays_count_ignores_other_days() {
        let mut ledger = Ledger::new();
        let goal = DailyGoal::new(1).unwrap();
        let mut service = ExpenseService::new(&mut ledger, goal);

        let yesterday = today().pred_opt().unwrap();
        service.record(expense_on(yesterday), today()).unwrap();
        service.record(expense_on(yesterday), today()).unwrap();
        assert_eq!(service.todays_count(today()), 0);
        assert_eq!(service.ensure_can_add(today()).unwrap(), 0);
        assert!(service.ensure_can_add(today()).is_ok());
    }

    #[test]
    fn test_guard_is_evaluated_against_the_given_day() {
        let mut ledger = Ledger::new();
        let goal = DailyGoal::new(1).unwrap();
        let mut service = ExpenseService::new(&mut ledger, goal);

        service.record(expense_on(today()), today()).unwrap();
        assert!(service.ensure_can_add(today()).is_err());

        let tomorrow = today().succ_opt().unwrap();
        assert_eq!(service.ensure_can_add(tomorrow).unwrap(), 0);
    }

    #[test]
    fn test_goal_error_names_goal() {
        let mut ledger = Ledger::new();
        let goal = DailyGoal::new(1).unwrap();
        let mut service = ExpenseService::new(&mut ledger, goal);
        service.record(expense_on(today()), today()).unwrap();

        match service.ensure_can_add(today()) {
            Err(TrackerError::DailyGoalReached { goal }) => assert_eq!(goal, 1),
            other => panic!("expected goal error, got {:?}", other),
        }
    }
}
