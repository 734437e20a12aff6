//! Line-based prompting over any reader/writer pair
//!
//! Every prompt writes its text, flushes, and reads one line. Validated
//! prompts repeat until the parser accepts the line, printing the rejection
//! message each time.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::debug;

use super::input::{parse_amount, parse_category, parse_date, parse_goal, InputError};
use crate::config::DailyGoal;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Money};

/// Console prompter
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter reading from `input` and writing to `output`
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output sink
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Borrow the output sink without writing
    pub fn output_ref(&self) -> &W {
        &self.output
    }

    /// Prompt for a string input
    ///
    /// Returns the line with surrounding whitespace removed, or `InputClosed`
    /// once the input is exhausted.
    pub fn prompt_string(&mut self, prompt: &str) -> TrackerResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TrackerError::InputClosed);
        }

        Ok(line.trim().to_string())
    }

    /// Prompt until `parse` accepts the line
    pub fn prompt_until<T, F>(&mut self, prompt: &str, mut parse: F) -> TrackerResult<T>
    where
        F: FnMut(&str) -> Result<T, InputError>,
    {
        loop {
            let line = self.prompt_string(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(reason) => {
                    debug!(input = %line, %reason, "Rejected input");
                    writeln!(self.output, "{}", reason)?;
                }
            }
        }
    }

    /// Ask for the daily transaction goal
    pub fn read_goal(&mut self) -> TrackerResult<DailyGoal> {
        self.prompt_until(
            "How many transactions do you want to make per day (goal)? ",
            parse_goal,
        )
    }

    /// Ask for an expense date; blank means `today`
    pub fn read_date(&mut self, today: NaiveDate) -> TrackerResult<NaiveDate> {
        self.prompt_until("Enter date (YYYY-MM-DD) or press Enter for today: ", |line| {
            parse_date(line, today)
        })
    }

    /// Ask for a positive expense amount
    pub fn read_amount(&mut self) -> TrackerResult<Money> {
        self.prompt_until("Enter amount ($): ", parse_amount)
    }

    /// Ask once for a category; blank means `fallback`
    pub fn read_category(&mut self, fallback: &str) -> TrackerResult<Category> {
        let line = self.prompt_string("Enter category (e.g., Food, Transport, Entertainment): ")?;
        Ok(parse_category(&line, fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.output_ref().clone()).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 6).unwrap()
    }

    #[test]
    fn test_prompt_string_trims() {
        let mut p = prompter("  hello  \n");
        assert_eq!(p.prompt_string("> ").unwrap(), "hello");
        assert_eq!(written(p), "> ");
    }

    #[test]
    fn test_prompt_string_reports_closed_input() {
        let mut p = prompter("");
        assert!(p.prompt_string("> ").unwrap_err().is_input_closed());
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = prompter("4");
        assert_eq!(p.prompt_string("> ").unwrap(), "4");
    }

    #[test]
    fn test_read_goal_retries() {
        let mut p = prompter("abc\n0\n-1\n3\n");
        assert_eq!(p.read_goal().unwrap().get(), 3);

        let out = written(p);
        assert!(out.contains("Invalid input. Please enter a number.\n"));
        assert_eq!(out.matches("Please enter a positive number.\n").count(), 2);
        assert_eq!(
            out.matches("How many transactions do you want to make per day (goal)? ")
                .count(),
            4
        );
    }

    #[test]
    fn test_read_amount_distinguishes_rejections() {
        let mut p = prompter("-5\nabc\n12.5\n");
        assert_eq!(p.read_amount().unwrap().cents(), 1250);

        let out = written(p);
        assert!(out.contains("Amount must be positive.\n"));
        assert!(out.contains("Invalid amount. Please enter a number (e.g., 25.50)\n"));
    }

    #[test]
    fn test_read_date() {
        let mut p = prompter("\n");
        assert_eq!(p.read_date(today()).unwrap(), today());

        let mut p = prompter("2025-13-40\n2025-11-01\n");
        assert_eq!(
            p.read_date(today()).unwrap(),
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap()
        );
        assert!(written(p)
            .contains("Invalid date format. Please use YYYY-MM-DD (e.g., 2025-11-06)\n"));
    }

    #[test]
    fn test_read_category_does_not_retry() {
        let mut p = prompter("\nFood\n");
        assert_eq!(p.read_category("Other").unwrap().name(), "Other");

        let mut p = prompter("  Food  \n");
        assert_eq!(p.read_category("Other").unwrap().name(), "Food");
    }

    #[test]
    fn test_validated_prompt_stops_at_end_of_input() {
        let mut p = prompter("abc\n");
        assert!(p.read_amount().unwrap_err().is_input_closed());
    }
}
