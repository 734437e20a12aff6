//! Business logic layer for Budget Tracker
//!
//! Services sit between the session controller and the ledger and enforce
//! the rules that apply when expenses are recorded.

pub mod expense;

pub use expense::ExpenseService;
