//! Sources of the reference date used to fill in omitted segments

use chrono::{Local, NaiveDate};

/// Supplies "today" for month and year fill-in
pub trait ReferenceClock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the running system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ReferenceClock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl ReferenceClock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<F> ReferenceClock for F
where
    F: Fn() -> NaiveDate,
{
    fn today(&self) -> NaiveDate {
        self()
    }
}
