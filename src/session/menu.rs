//! Main menu
//!
//! The menu is the resting state of the session. Each choice leads to one
//! action and back, except `Exit`, which ends the session.

use std::fmt;

use crate::display::{double_separator, REPORT_WIDTH};

/// Prompt shown under the menu
pub const MENU_PROMPT: &str = "Choose an option (1-4): ";

/// Message for anything that is not a menu choice
pub const INVALID_OPTION: &str = "Invalid option. Please choose 1-4.";

/// A main menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    WeeklySummary,
    MonthlySummary,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::AddExpense,
        MenuChoice::WeeklySummary,
        MenuChoice::MonthlySummary,
        MenuChoice::Exit,
    ];

    /// Parse a trimmed menu selection
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddExpense),
            "2" => Some(Self::WeeklySummary),
            "3" => Some(Self::MonthlySummary),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }

    /// The key that selects this choice
    pub fn key(&self) -> char {
        match self {
            Self::AddExpense => '1',
            Self::WeeklySummary => '2',
            Self::MonthlySummary => '3',
            Self::Exit => '4',
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add an Expense",
            Self::WeeklySummary => "Weekly Summary",
            Self::MonthlySummary => "Monthly Summary",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}) {}", self.key(), self.label())
    }
}

/// Format the main menu, without the trailing prompt
pub fn format_menu() -> String {
    let rule = double_separator(REPORT_WIDTH);
    let mut output = String::new();

    output.push_str(&rule);
    output.push('\n');
    output.push_str("           MAIN MENU\n");
    output.push_str(&rule);
    output.push('\n');
    for choice in MenuChoice::ALL {
        output.push_str(&format!("{}\n", choice));
    }
    output.push_str(&rule);
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddExpense));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::WeeklySummary));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::MonthlySummary));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("12"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn test_keys_round_trip() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::parse(&choice.key().to_string()), Some(choice));
        }
    }

    #[test]
    fn test_format_menu() {
        let menu = format_menu();
        let lines: Vec<_> = menu.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1], "           MAIN MENU");
        assert_eq!(lines[3], "1) Add an Expense");
        assert_eq!(lines[6], "4) Exit");
        assert_eq!(lines[7].chars().count(), REPORT_WIDTH);
    }
}
