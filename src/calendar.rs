//! Calendar types shared by presets and settings

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Selection mode of a date picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarType {
    Single,
    Multi,
    Range,
}

/// Inclusive span of days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, swapping the endpoints if they are reversed
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Single day range
    pub fn day(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, counting both endpoints
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// First day of the month `date` falls in
pub fn start_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

/// Last day of the month `date` falls in
pub fn end_of_month(date: NaiveDate) -> Option<NaiveDate> {
    start_of_month(date)?
        .checked_add_months(Months::new(1))?
        .checked_sub_days(Days::new(1))
}

/// Ascending list of years from `min` to `max`, both included.
///
/// Empty when `min > max`.
pub fn year_range(min: i32, max: i32) -> Vec<i32> {
    (min..=max).collect()
}
