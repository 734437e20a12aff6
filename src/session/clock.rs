//! Source of the current calendar date
//!
//! "Today" is read every time it is needed rather than fixed at startup, so a
//! session that runs past midnight sees the new day.

use chrono::NaiveDate;

/// Provides the current date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local system date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().naive_local().date()
    }
}

/// A clock pinned to one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
