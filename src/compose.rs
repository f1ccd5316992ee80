//! Numeric parsing of normalized segments and calendar validation

use crate::error::{DateParseError, Result};
use crate::segments::{Component, Segments};
use chrono::NaiveDate;
use tracing::trace;

/// Largest year a four digit year field can hold
const MAX_YEAR: u32 = 9999;

/// Turn fully normalized segments into a calendar date.
///
/// Every segment must consist of ASCII digits only. Leading zeros are
/// ignored, so `"05"` and `"5"` are the same day.
pub fn compose(segments: &Segments) -> Result<NaiveDate> {
    if segments.day.is_empty() {
        return Err(DateParseError::MissingDay);
    }

    let day = parse_number(Component::Day, &segments.day)?;
    let month = parse_number(Component::Month, &segments.month)?;
    let year = parse_number(Component::Year, &segments.year)?;
    trace!(year, month, day, "composing date");

    let invalid = || DateParseError::NonexistentDate { year, month, day };
    let year = i32::try_from(year).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parse a segment as a base-10 number, rejecting anything but digits
fn parse_number(component: Component, text: &str) -> Result<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateParseError::InvalidSegment {
            component,
            text: text.to_string(),
        });
    }

    let significant = text.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(0);
    }

    match significant.parse::<u32>() {
        Ok(value) if component != Component::Year || value <= MAX_YEAR => Ok(value),
        _ if component == Component::Year => Err(DateParseError::YearOutOfRange(text.to_string())),
        // Only the year can be longer than two digits by the time segments get here
        _ => Err(DateParseError::InvalidSegment {
            component,
            text: text.to_string(),
        }),
    }
}
