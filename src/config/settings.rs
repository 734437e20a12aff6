//! Settings for Budget Tracker
//!
//! Defaults for categories and report windows, plus the daily transaction
//! goal captured at the start of each session.

use std::fmt;
use std::num::NonZeroU32;

use crate::models::FALLBACK_CATEGORY;

/// Application settings
///
/// Nothing is read from disk; every session starts from `Settings::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Category assigned when the user leaves the category blank
    pub fallback_category: String,

    /// Length of the weekly summary window, in days
    pub weekly_window_days: u32,

    /// Length of the monthly summary window, in days
    pub monthly_window_days: u32,

    /// Width of the category label column in the monthly breakdown
    pub category_label_width: usize,
}

fn default_fallback_category() -> String {
    FALLBACK_CATEGORY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fallback_category: default_fallback_category(),
            weekly_window_days: 7,
            monthly_window_days: 30,
            category_label_width: 20,
        }
    }
}

/// Maximum number of expenses that may be dated today
///
/// Always strictly positive. Set once per session and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DailyGoal(NonZeroU32);

impl DailyGoal {
    #[cfg(test)]
    pub(crate) fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Get the goal as a plain integer
    pub const fn get(&self) -> u32 {
        self.0.get()
    }

    /// Check whether `count` expenses already meet or exceed the goal
    pub fn is_reached_by(&self, count: usize) -> bool {
        count >= self.get() as usize
    }
}

impl From<NonZeroU32> for DailyGoal {
    fn from(value: NonZeroU32) -> Self {
        Self(value)
    }
}

impl fmt::Display for DailyGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.fallback_category, "Other");
        assert_eq!(settings.weekly_window_days, 7);
        assert_eq!(settings.monthly_window_days, 30);
    }

    #[test]
    fn test_goal_rejects_zero() {
        assert!(DailyGoal::new(0).is_none());
        assert_eq!(DailyGoal::new(3).unwrap().get(), 3);
    }

    #[test]
    fn test_goal_reached() {
        let goal = DailyGoal::new(2).unwrap();
        assert!(!goal.is_reached_by(0));
        assert!(!goal.is_reached_by(1));
        assert!(goal.is_reached_by(2));
        assert!(goal.is_reached_by(3));
    }

    #[test]
    fn test_goal_display() {
        assert_eq!(DailyGoal::new(5).unwrap().to_string(), "5");
    }
}
