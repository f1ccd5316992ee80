//! Error types for dotdate

use crate::segments::Component;
use thiserror::Error;

/// Result type alias for date parsing operations
pub type Result<T> = std::result::Result<T, DateParseError>;

/// Reasons a date input could not be turned into a calendar date
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    /// Nothing was typed in the day position
    #[error("day segment is empty")]
    MissingDay,

    /// A segment holds something other than decimal digits
    #[error("{component} segment {text:?} is not a number")]
    InvalidSegment { component: Component, text: String },

    /// Year has more than four significant digits
    #[error("year {0:?} is out of range")]
    YearOutOfRange(String),

    /// Numbers are well formed but name no real day
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    NonexistentDate { year: u32, month: u32, day: u32 },

    /// More than three segments while extra segments are rejected
    #[error("expected at most 3 segments, got {0}")]
    TooManySegments(usize),
}
