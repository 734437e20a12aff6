//! Interactive console session
//!
//! Input validation, prompting, the main menu and the controller that ties
//! them to the ledger and the reports.

pub mod clock;
pub mod controller;
pub mod input;
pub mod menu;
pub mod prompt;

pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::Session;
pub use input::InputError;
pub use menu::MenuChoice;
pub use prompt::Prompter;
