//! Segmentation of raw input and digit redistribution between segments
//!
//! Input is split on `.` into day, month and year text. Each stage below
//! takes the segments by value and hands them on, so the cascade
//! day → month → year is an explicit pipeline:
//!
//! 1. [`Segments::donate_day_overflow`] - digits past the second day digit
//!    are moved to the front of the month.
//! 2. [`Segments::fill_month`] - an empty month is taken from the reference
//!    date, a single digit month is zero padded.
//! 3. [`Segments::donate_month_overflow`] - digits past the second month
//!    digit are moved to the front of the year.
//! 4. [`Segments::fill_year`] - a short year is left padded with the digits
//!    of the reference year.

use crate::error::{DateParseError, Result};
use crate::MonthFill;
use chrono::{Datelike, NaiveDate};
use smallvec::SmallVec;
use std::fmt;
use tracing::debug;

/// Segment delimiter
pub const DELIMITER: char = '.';

/// Width day and month segments are cut down to
const SHORT_WIDTH: usize = 2;

/// Width the year segment is padded up to
const YEAR_WIDTH: usize = 4;

/// Position of a segment in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Day,
    Month,
    Year,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Component::Day => "day",
            Component::Month => "month",
            Component::Year => "year",
        })
    }
}

/// Day, month and year text of one input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl Segments {
    /// Split already trimmed input into its three positional segments.
    ///
    /// Missing trailing segments are empty. Segments past the third are
    /// dropped, or reported as [`DateParseError::TooManySegments`] when
    /// `reject_extra` is set.
    pub fn split(input: &str, reject_extra: bool) -> Result<Self> {
        let parts: SmallVec<[&str; 3]> = input.split(DELIMITER).collect();
        if reject_extra && parts.len() > 3 {
            return Err(DateParseError::TooManySegments(parts.len()));
        }

        let part = |idx: usize| parts.get(idx).map_or_else(String::new, |s| (*s).to_string());
        Ok(Self {
            day: part(0),
            month: part(1),
            year: part(2),
        })
    }

    /// Move everything past the second day character to the front of the month
    pub fn donate_day_overflow(mut self) -> Self {
        if let Some(at) = overflow_at(&self.day, SHORT_WIDTH) {
            let overflow = self.day.split_off(at);
            debug!(day = %self.day, overflow = %overflow, "day overflow moved to month");
            self.month.insert_str(0, &overflow);
        }
        self
    }

    /// Fill an empty month from the reference date, zero pad a one digit month
    pub fn fill_month(mut self, reference: NaiveDate, fill: MonthFill) -> Self {
        match self.month.chars().count() {
            0 => {
                self.month = fill.month_of(reference).to_string();
                debug!(month = %self.month, ?fill, "month taken from reference date");
            }
            1 => self.month = pad_start(&self.month, SHORT_WIDTH, "0"),
            _ => {}
        }
        self
    }

    /// Move everything past the second month character to the front of the year
    pub fn donate_month_overflow(mut self) -> Self {
        if let Some(at) = overflow_at(&self.month, SHORT_WIDTH) {
            let overflow = self.month.split_off(at);
            debug!(month = %self.month, overflow = %overflow, "month overflow moved to year");
            self.year.insert_str(0, &overflow);
        }
        self
    }

    /// Left pad a short year with the leading digits of the reference year
    pub fn fill_year(mut self, reference: NaiveDate) -> Self {
        if self.year.chars().count() < YEAR_WIDTH {
            let padded = pad_start(&self.year, YEAR_WIDTH, &reference.year().to_string());
            debug!(from = %self.year, to = %padded, "year padded from reference date");
            self.year = padded;
        }
        self
    }
}

/// Byte offset of the first character past `width`, if the text is longer
fn overflow_at(text: &str, width: usize) -> Option<usize> {
    text.char_indices().nth(width).map(|(idx, _)| idx)
}

/// Left pad `text` to `width` characters, cycling through `fill`.
///
/// Fill characters are taken from the start of `fill`, so padding `"23"`
/// with `"2024"` gives `"2023"` and padding `"7"` gives `"2027"`.
pub fn pad_start(text: &str, width: usize, fill: &str) -> String {
    let missing = width.saturating_sub(text.chars().count());
    if missing == 0 || fill.is_empty() {
        return text.to_string();
    }

    let mut padded: String = fill.chars().cycle().take(missing).collect();
    padded.push_str(text);
    padded
}
