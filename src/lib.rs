//! # dotdate
//!
//! Forgiving parser for dates typed as `day.month.year`.
//!
//! Users of a date field rarely type a clean `DD.MM.YYYY`. This library
//! accepts partial and irregularly grouped input and turns it into a real
//! calendar date:
//!
//! - a missing month or year is taken from a reference date ("today"),
//! - a short year is completed with the leading digits of the reference
//!   year (`24` → `2024`),
//! - digits typed past the width of one segment spill into the next one
//!   (`15062024` → `15.06.2024`).
//!
//! The result is always a valid date or an error, never something in between.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use dotdate::parse_date;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//!
//! assert_eq!(parse_date("15.06.2024", today).unwrap(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
//! assert_eq!(parse_date("5.6.24", today).unwrap(), NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
//! assert_eq!(parse_date("15", today).unwrap(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
//! assert!(parse_date("31.02.2024", today).is_err());
//! ```

mod calendar;
mod clock;
mod compose;
mod error;
mod format;
mod presets;
mod segments;
mod settings;

pub use calendar::{end_of_month, start_of_month, year_range, CalendarType, DateRange};
pub use clock::{FixedClock, ReferenceClock, SystemClock};
pub use error::{DateParseError, Result};
pub use format::{format_date, DISPLAY_FORMAT};
pub use presets::{Preset, PresetKind, PresetTable};
pub use segments::{Component, Segments};
pub use settings::{PresetOverrides, Settings, SettingsOverrides};

use chrono::{Datelike, NaiveDate};
use compose::compose;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Month numbering used when the month segment is left out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthFill {
    /// Use the reference month itself (March → 3)
    #[default]
    OneBased,
    /// Use the reference month's zero-based index (March → 2).
    ///
    /// Compatibility mode for older date pickers: input without a month
    /// lands one month early, and fails outright in January.
    ZeroBasedIndex,
}

impl MonthFill {
    /// Month number filled in for `reference`
    pub fn month_of(self, reference: NaiveDate) -> u32 {
        match self {
            MonthFill::OneBased => reference.month(),
            MonthFill::ZeroBasedIndex => reference.month0(),
        }
    }
}

/// Configuration options for parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// How an omitted month is filled in (default: one-based)
    pub month_fill: MonthFill,
    /// Fail on more than three segments instead of ignoring the rest (default: false)
    pub reject_extra_segments: bool,
}

/// Parse `day.month.year` input against a reference date.
///
/// # Arguments
///
/// * `input` - Text as typed; surrounding whitespace is ignored
/// * `reference` - "Today", used to fill an omitted month or short year
///
/// # Returns
///
/// * `Ok(NaiveDate)` - The date the input describes
/// * `Err(DateParseError)` - If the input is not a number sequence or names no real day
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dotdate::parse_date;
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
///
/// // Day "311" spills "1" into the month, month "12023" spills "023" into the year
/// let d = parse_date("311.2023", today).unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
/// ```
pub fn parse_date(input: &str, reference: NaiveDate) -> Result<NaiveDate> {
    parse_date_with_options(input, reference, &ParseOptions::default())
}

/// Parse with custom options.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dotdate::{parse_date_with_options, MonthFill, ParseOptions};
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let options = ParseOptions {
///     month_fill: MonthFill::ZeroBasedIndex,
///     ..Default::default()
/// };
/// let d = parse_date_with_options("15", today, &options).unwrap();
/// assert_eq!(d, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
/// ```
pub fn parse_date_with_options(
    input: &str,
    reference: NaiveDate,
    options: &ParseOptions,
) -> Result<NaiveDate> {
    let segments = Segments::split(input.trim(), options.reject_extra_segments)?
        .donate_day_overflow()
        .fill_month(reference, options.month_fill)
        .donate_month_overflow()
        .fill_year(reference);
    trace!(?segments, "segments normalized");

    compose(&segments)
}

/// Parse using a clock for the reference date
pub fn parse_date_with_clock<C: ReferenceClock + ?Sized>(
    input: &str,
    clock: &C,
    options: &ParseOptions,
) -> Result<NaiveDate> {
    parse_date_with_options(input, clock.today(), options)
}

/// Parse many inputs in parallel, keeping their order
#[cfg(feature = "parallel")]
pub fn parse_many<S: AsRef<str> + Sync>(
    inputs: &[S],
    reference: NaiveDate,
    options: &ParseOptions,
) -> Vec<Result<NaiveDate>> {
    use rayon::prelude::*;

    inputs
        .par_iter()
        .map(|input| parse_date_with_options(input.as_ref(), reference, options))
        .collect()
}

#[cfg(feature = "python")]
mod python;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn legacy() -> ParseOptions {
        ParseOptions {
            month_fill: MonthFill::ZeroBasedIndex,
            ..Default::default()
        }
    }

    #[test]
    fn test_full_date() {
        for reference in [date(2024, 3, 10), date(1999, 1, 1), date(2050, 12, 31)] {
            assert_eq!(parse_date("15.06.2024", reference), Ok(date(2024, 6, 15)));
        }
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(parse_date("05.06.2024", date(2024, 1, 1)), Ok(date(2024, 6, 5)));
    }

    #[test]
    fn test_short_segments() {
        assert_eq!(parse_date("5.6.24", date(2024, 1, 10)), Ok(date(2024, 6, 5)));
    }

    #[test]
    fn test_short_year_takes_reference_prefix() {
        // Prefix comes from the reference year, not zeros
        assert_eq!(parse_date("5.6.24", date(1999, 1, 10)), Ok(date(1924, 6, 5)));
        assert_eq!(parse_date("5.6.7", date(2024, 1, 10)), Ok(date(2027, 6, 5)));
        assert_eq!(parse_date("5.6.123", date(2024, 1, 10)), Ok(date(2123, 6, 5)));
    }

    #[test]
    fn test_day_only_uses_reference_month_and_year() {
        assert_eq!(parse_date("15", date(2024, 3, 10)), Ok(date(2024, 3, 15)));
        assert_eq!(parse_date("1", date(2024, 1, 31)), Ok(date(2024, 1, 1)));
    }

    #[test]
    fn test_day_only_zero_based_month() {
        assert_eq!(
            parse_date_with_options("15", date(2024, 3, 10), &legacy()),
            Ok(date(2024, 2, 15))
        );
        // January has index 0, which is no month at all
        assert_eq!(
            parse_date_with_options("15", date(2024, 1, 10), &legacy()),
            Err(DateParseError::NonexistentDate { year: 2024, month: 0, day: 15 })
        );
    }

    #[test]
    fn test_day_month_without_year() {
        assert_eq!(parse_date("1.1", date(2024, 6, 1)), Ok(date(2024, 1, 1)));
        assert_eq!(parse_date("24.12.", date(2023, 6, 1)), Ok(date(2023, 12, 24)));
    }

    #[test]
    fn test_empty_month_between_segments() {
        assert_eq!(parse_date("5..2024", date(2023, 3, 1)), Ok(date(2024, 3, 5)));
    }

    #[test]
    fn test_day_overflow_cascades_into_year() {
        // "311" -> day "31", month "1"+"2023" = "12023"
        // "12023" -> month "12", year "023"+"" = "023"
        // "023" -> padded with "2" from 2024 -> "2023"
        assert_eq!(parse_date("311.2023", date(2024, 5, 1)), Ok(date(2023, 12, 31)));
        // Same input, different reference century digit
        assert_eq!(parse_date("311.2023", date(1999, 5, 1)), Ok(date(1023, 12, 31)));
    }

    #[test]
    fn test_day_overflow_fills_month_only() {
        // "311" -> day "31", month "1", year from reference
        assert_eq!(parse_date("311", date(2024, 5, 1)), Ok(date(2024, 1, 31)));
    }

    #[test]
    fn test_undotted_input() {
        let reference = date(2024, 5, 1);
        assert_eq!(parse_date("1504", reference), Ok(date(2024, 4, 15)));
        assert_eq!(parse_date("150425", reference), Ok(date(2025, 4, 15)));
        assert_eq!(parse_date("15042025", reference), Ok(date(2025, 4, 15)));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(parse_date("  15.06.2024 \t", date(2024, 1, 1)), Ok(date(2024, 6, 15)));
    }

    #[test]
    fn test_nonexistent_date() {
        assert_eq!(
            parse_date("31.02.2023", date(2024, 1, 1)),
            Err(DateParseError::NonexistentDate { year: 2023, month: 2, day: 31 })
        );
        assert!(parse_date("31.4", date(2024, 1, 1)).is_err());
        assert!(parse_date("5.13.2024", date(2024, 1, 1)).is_err());
        assert!(parse_date("0.6.2024", date(2024, 1, 1)).is_err());
        assert!(parse_date("29.2.23", date(2024, 1, 1)).is_err());
        assert_eq!(parse_date("29.2.24", date(2024, 1, 1)), Ok(date(2024, 2, 29)));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_date("", date(2024, 1, 1)), Err(DateParseError::MissingDay));
        assert_eq!(parse_date("   ", date(2024, 1, 1)), Err(DateParseError::MissingDay));
        assert_eq!(parse_date(".6.2024", date(2024, 1, 1)), Err(DateParseError::MissingDay));
    }

    #[test]
    fn test_not_a_number() {
        let err = parse_date("ab.06.2024", date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, DateParseError::InvalidSegment { component: Component::Day, .. }));

        let err = parse_date("15.Jun.2024", date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, DateParseError::InvalidSegment { component: Component::Month, .. }));

        assert!(parse_date("15/06/2024", date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_long_year() {
        assert_eq!(
            parse_date("5.6.20245", date(2024, 1, 1)),
            Err(DateParseError::YearOutOfRange("20245".to_string()))
        );
        assert_eq!(parse_date("5.6.02024", date(2024, 1, 1)), Ok(date(2024, 6, 5)));
    }

    #[test]
    fn test_extra_segments() {
        let reference = date(2024, 1, 1);
        assert_eq!(parse_date("5.6.2024.99", reference), Ok(date(2024, 6, 5)));

        let options = ParseOptions {
            reject_extra_segments: true,
            ..Default::default()
        };
        assert_eq!(
            parse_date_with_options("5.6.2024.99", reference, &options),
            Err(DateParseError::TooManySegments(4))
        );
        assert_eq!(parse_date_with_options("5.6.2024", reference, &options), Ok(date(2024, 6, 5)));
    }

    #[test]
    fn test_deterministic() {
        let reference = date(2024, 3, 10);
        for input in ["311.2023", "15", "abc", "31.02.2023"] {
            assert_eq!(parse_date(input, reference), parse_date(input, reference));
        }
    }

    #[test]
    fn test_with_clock() {
        let clock = FixedClock(date(2024, 3, 10));
        assert_eq!(
            parse_date_with_clock("15", &clock, &ParseOptions::default()),
            Ok(date(2024, 3, 15))
        );
    }

    #[test]
    fn test_with_system_clock() {
        let today = SystemClock.today();
        let d = parse_date_with_clock("1", &SystemClock, &ParseOptions::default()).unwrap();
        assert_eq!(d, today.with_day(1).unwrap());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(DateParseError::MissingDay.to_string(), "day segment is empty");
        assert_eq!(
            DateParseError::NonexistentDate { year: 2023, month: 2, day: 31 }.to_string(),
            "2023-02-31 is not a calendar date"
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parse_many_keeps_order() {
        let inputs = vec!["1.1.2024", "", "31.12.2024"];
        let results = parse_many(&inputs, date(2024, 6, 1), &ParseOptions::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Ok(date(2024, 1, 1)));
        assert_eq!(results[1], Err(DateParseError::MissingDay));
        assert_eq!(results[2], Ok(date(2024, 12, 31)));
    }
}
