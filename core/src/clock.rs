//! Source of "today" for due-date defaulting.
//!
//! # Design
//! `TodoService` never reads the system time directly; it asks its `Clock`.
//! `SystemClock` reads the local calendar date on every call. `FixedClock`
//! returns a pinned date, which keeps tests independent of when they run.

use chrono::{Local, NaiveDate};

/// Supplies the date used when a write leaves `due_date` unset.
pub trait Clock {
    /// The current calendar date, with no time component.
    fn today(&self) -> NaiveDate;
}

/// The local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
