use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use budget_tracker::config::Settings;
use budget_tracker::session::{Session, SystemClock};

#[derive(Parser)]
#[command(
    name = "budget-tracker",
    version,
    about = "Terminal expense logger with a daily transaction goal",
    long_about = "Budget Tracker records dated expenses with an amount and a category, \
                  caps how many can be logged each day, and summarizes spending over \
                  the last 7 and 30 days. Everything is kept in memory for the \
                  current session only."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Diagnostics go to stderr so they never mix with the console dialogue
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    let mut session = Session::new(
        stdin.lock(),
        std::io::stdout().lock(),
        SystemClock,
        Settings::default(),
    );

    match session.run() {
        Ok(()) => Ok(()),
        Err(err) if err.is_input_closed() => {
            warn!("Input closed before Exit was chosen");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}
