//! Storage layer for Budget Tracker
//!
//! Expenses live in memory for the lifetime of the process; nothing is
//! written to disk.

pub mod ledger;

pub use ledger::Ledger;
