//! Formatting dates back into the dotted input form

use chrono::NaiveDate;

/// chrono format string for `DD.MM.YYYY`
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Format a date the way it is typed, e.g. `05.06.2024`.
///
/// Anything produced here parses back to the same date.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
