//! Python bindings for dotdate via PyO3

use chrono::NaiveDate;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{MonthFill, ParseOptions, ReferenceClock, SystemClock};

fn options(zero_based_month: bool, reject_extra_segments: bool) -> ParseOptions {
    ParseOptions {
        month_fill: if zero_based_month {
            MonthFill::ZeroBasedIndex
        } else {
            MonthFill::OneBased
        },
        reject_extra_segments,
    }
}

/// Parse a date typed as day.month.year.
///
/// Args:
///     text: Input as typed, e.g. "5.6.24" or "15062024"
///     reference: Date used for an omitted month or short year (default: today)
///     zero_based_month: Fill an omitted month with its zero-based index (default: False)
///     reject_extra_segments: Fail on more than three segments (default: False)
///
/// Returns:
///     datetime.date
///
/// Raises:
///     ValueError: If the input does not describe a real date
///
/// Example:
///     >>> import datetime, dotdate
///     >>> dotdate.parse_date("311.2023", datetime.date(2024, 5, 1))
///     datetime.date(2023, 12, 31)
#[pyfunction]
#[pyo3(signature = (text, reference=None, zero_based_month=false, reject_extra_segments=false))]
fn parse_date(
    text: &str,
    reference: Option<NaiveDate>,
    zero_based_month: bool,
    reject_extra_segments: bool,
) -> PyResult<NaiveDate> {
    let reference = reference.unwrap_or_else(|| SystemClock.today());
    crate::parse_date_with_options(text, reference, &options(zero_based_month, reject_extra_segments))
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Parse many inputs in parallel.
///
/// Args:
///     texts: List of inputs
///     reference: Date used for an omitted month or short year (default: today)
///
/// Returns:
///     List of datetime.date, with None where an input did not parse
#[pyfunction]
#[pyo3(signature = (texts, reference=None, zero_based_month=false))]
fn parse_many(
    texts: Vec<String>,
    reference: Option<NaiveDate>,
    zero_based_month: bool,
) -> Vec<Option<NaiveDate>> {
    let reference = reference.unwrap_or_else(|| SystemClock.today());
    crate::parse_many(&texts, reference, &options(zero_based_month, false))
        .into_iter()
        .map(|r| r.ok())
        .collect()
}

/// Format a date as DD.MM.YYYY.
#[pyfunction]
fn format_date(date: NaiveDate) -> String {
    crate::format_date(date)
}

/// Ascending list of years from min to max, both included.
#[pyfunction]
fn year_range(min: i32, max: i32) -> Vec<i32> {
    crate::year_range(min, max)
}

/// Forgiving parser for dates typed as day.month.year.
///
/// Example:
///     >>> import datetime, dotdate
///     >>> dotdate.parse_date("5.6.24", datetime.date(2024, 1, 10))
///     datetime.date(2024, 6, 5)
#[pymodule]
fn dotdate(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse_date, m)?)?;
    m.add_function(wrap_pyfunction!(parse_many, m)?)?;
    m.add_function(wrap_pyfunction!(format_date, m)?)?;
    m.add_function(wrap_pyfunction!(year_range, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
