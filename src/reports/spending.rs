//! Spending breakdown by category
//!
//! Groups a set of expenses by category label and ranks the categories by
//! how much was spent in each.

use std::collections::HashMap;

use crate::display::percentage_of;
use crate::models::{Category, Expense, Money};

/// Spending for one category
#[derive(Debug, Clone)]
pub struct SpendingByCategory {
    /// Category label
    pub category: Category,
    /// Total spent in this category
    pub total_spending: Money,
    /// Share of the overall total, 0-100
    pub percentage: f64,
}

/// Per-category totals for a set of expenses
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    /// Categories ranked by descending total; order among equal totals is
    /// unspecified
    pub categories: Vec<SpendingByCategory>,
    /// Total across all categories
    pub total_spending: Money,
}

impl CategoryBreakdown {
    /// Group expenses by category
    pub fn from_expenses<'a, I>(expenses: I) -> Self
    where
        I: IntoIterator<Item = &'a Expense>,
    {
        let mut by_category: HashMap<&Category, Money> = HashMap::new();
        let mut total_spending = Money::zero();

        for expense in expenses {
            *by_category
                .entry(expense.category())
                .or_insert_with(Money::zero) += expense.amount();
            total_spending += expense.amount();
        }

        let total = total_spending.cents() as f64;
        let mut categories: Vec<SpendingByCategory> = by_category
            .into_iter()
            .map(|(category, spending)| SpendingByCategory {
                category: category.clone(),
                total_spending: spending,
                percentage: percentage_of(spending.cents() as f64, total),
            })
            .collect();

        // Most spending first
        categories.sort_by(|a, b| b.total_spending.cmp(&a.total_spending));

        Self {
            categories,
            total_spending,
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<&SpendingByCategory> {
        self.categories.iter().find(|c| c.category.name() == name)
    }
}
