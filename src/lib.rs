//! Budget Tracker - terminal expense logging
//!
//! This library provides the core of a small console application for
//! recording day-to-day expenses against a daily transaction goal and
//! reviewing spending over the last week or month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings and the daily transaction goal
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses)
//! - `storage`: In-memory expense ledger
//! - `services`: Business rules for recording expenses
//! - `reports`: Weekly and monthly summaries
//! - `display`: Terminal formatting helpers
//! - `session`: Prompts, menu and the interactive controller
//!
//! # Example
//!
//! ```rust,no_run
//! use budget_tracker::config::Settings;
//! use budget_tracker::session::{Session, SystemClock};
//!
//! let stdin = std::io::stdin();
//! let mut session = Session::new(stdin.lock(), std::io::stdout(), SystemClock, Settings::default());
//! session.run()?;
//! # Ok::<(), budget_tracker::TrackerError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
