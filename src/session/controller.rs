//! Session controller
//!
//! Owns the ledger and the daily goal for the life of the process and drives
//! the console: welcome banner, goal capture, then the menu loop until the
//! user exits.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::clock::Clock;
use super::menu::{format_menu, MenuChoice, INVALID_OPTION, MENU_PROMPT};
use super::prompt::Prompter;
use crate::config::{DailyGoal, Settings};
use crate::display::{format_banner, REPORT_WIDTH};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;
use crate::reports::{empty_window_message, MonthlySummary, TrailingWindow, WeeklySummary};
use crate::services::ExpenseService;
use crate::storage::Ledger;

const WELCOME_BANNER: &str = "\
╔════════════════════════════════════════╗
║        Welcome to Budget Tracker!      ║
╚════════════════════════════════════════╝";

/// An interactive expense-tracking session
pub struct Session<R, W, C> {
    prompter: Prompter<R, W>,
    clock: C,
    settings: Settings,
    ledger: Ledger,
    goal: Option<DailyGoal>,
}

impl<R: BufRead, W: Write, C: Clock> Session<R, W, C> {
    /// Create a session over the given console streams
    pub fn new(input: R, output: W, clock: C, settings: Settings) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            clock,
            settings,
            ledger: Ledger::new(),
            goal: None,
        }
    }

    /// Expenses recorded so far
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The daily goal, once configured
    pub fn goal(&self) -> Option<DailyGoal> {
        self.goal
    }

    /// Everything written so far
    pub fn output(&self) -> &W {
        self.prompter.output_ref()
    }

    /// Run until the user picks Exit
    ///
    /// Rejected input is handled by re-prompting. Only I/O failures and the
    /// end of input come back as errors.
    pub fn run(&mut self) -> TrackerResult<()> {
        writeln!(self.prompter.output(), "{}\n", WELCOME_BANNER)?;

        let goal = self.configure_goal()?;

        loop {
            write!(self.prompter.output(), "{}", format_menu())?;
            let line = self.prompter.prompt_string(MENU_PROMPT)?;

            match MenuChoice::parse(&line) {
                Some(MenuChoice::AddExpense) => self.add_expense(goal)?,
                Some(MenuChoice::WeeklySummary) => self.weekly_summary(goal)?,
                Some(MenuChoice::MonthlySummary) => self.monthly_summary(goal)?,
                Some(MenuChoice::Exit) => {
                    writeln!(
                        self.prompter.output(),
                        "\nThank you for using Budget Tracker. Goodbye!"
                    )?;
                    self.prompter.output().flush()?;
                    info!(expenses = self.ledger.len(), "Session ended");
                    return Ok(());
                }
                None => {
                    debug!(choice = %line, "Unknown menu option");
                    writeln!(self.prompter.output(), "{}\n", INVALID_OPTION)?;
                }
            }
        }
    }

    /// Ask for the daily goal; only done once per session
    fn configure_goal(&mut self) -> TrackerResult<DailyGoal> {
        let goal = self.prompter.read_goal()?;
        self.goal = Some(goal);

        info!(goal = goal.get(), "Daily transaction goal set");
        writeln!(
            self.prompter.output(),
            "Daily transaction goal set to: {} transactions/day\n",
            goal
        )?;

        Ok(goal)
    }

    /// Guard on today's count, then collect and record one expense
    fn add_expense(&mut self, goal: DailyGoal) -> TrackerResult<()> {
        writeln!(self.prompter.output(), "\n── Add New Expense ──")?;

        let today = self.clock.today();
        let allowed = ExpenseService::new(&mut self.ledger, goal).ensure_can_add(today);
        let todays_count = match allowed {
            Ok(count) => count,
            Err(err) => return self.report_refusal(err),
        };

        let date = self.prompter.read_date(today)?;
        let amount = self.prompter.read_amount()?;
        let category = self
            .prompter
            .read_category(&self.settings.fallback_category)?;

        let expense = Expense::new(date, amount, category);
        let line = expense.to_string();

        let mut service = ExpenseService::new(&mut self.ledger, goal);
        match service.record(expense, today) {
            Ok(()) => {
                // Tally shown is the guard's count plus this expense, whatever its date
                let out = self.prompter.output();
                writeln!(out, "\n✓ Expense added successfully!")?;
                writeln!(out, "{}", line)?;
                writeln!(out, "Today's transactions: {}/{}\n", todays_count + 1, goal)?;
                Ok(())
            }
            Err(err) => self.report_refusal(err),
        }
    }

    /// Tell the user the daily goal blocks this expense
    fn report_refusal(&mut self, err: TrackerError) -> TrackerResult<()> {
        if !err.is_goal_reached() {
            return Err(err);
        }
        let out = self.prompter.output();
        writeln!(out, "✗ Cannot add expense: {}", err)?;
        writeln!(out, "Expense not added.\n")?;
        Ok(())
    }

    fn weekly_summary(&mut self, goal: DailyGoal) -> TrackerResult<()> {
        let window = TrailingWindow::new(self.settings.weekly_window_days);
        let today = self.clock.today();

        writeln!(
            self.prompter.output(),
            "\n{}",
            format_banner(&WeeklySummary::title(window), REPORT_WIDTH)
        )?;

        match WeeklySummary::generate(&self.ledger, window, today) {
            Some(report) => {
                debug!(
                    count = report.summary.transaction_count(),
                    total = %report.summary.total,
                    "Weekly summary"
                );
                write!(self.prompter.output(), "{}", report.format_terminal(goal))?;
            }
            None => writeln!(self.prompter.output(), "{}\n", empty_window_message(window))?,
        }

        Ok(())
    }

    fn monthly_summary(&mut self, goal: DailyGoal) -> TrackerResult<()> {
        let window = TrailingWindow::new(self.settings.monthly_window_days);
        let today = self.clock.today();

        writeln!(
            self.prompter.output(),
            "\n{}",
            format_banner(&MonthlySummary::title(window), REPORT_WIDTH)
        )?;

        match MonthlySummary::generate(&self.ledger, window, today) {
            Some(report) => {
                debug!(
                    count = report.summary.transaction_count(),
                    categories = report.breakdown.categories.len(),
                    total = %report.summary.total,
                    "Monthly summary"
                );
                let text = report.format_terminal(goal, self.settings.category_label_width);
                write!(self.prompter.output(), "{}", text)?;
            }
            None => writeln!(self.prompter.output(), "{}\n", empty_window_message(window))?,
        }

        Ok(())
    }
}
