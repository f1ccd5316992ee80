//! Named date and range presets ("Today", "Last Month", ...)
//!
//! Presets are data, not callbacks: a [`PresetKind`] describes how to derive
//! a range from a reference date, so preset tables can be deserialized from
//! user configuration.

use crate::calendar::{end_of_month, start_of_month, CalendarType, DateRange};
use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// How a preset derives its value from the reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetKind {
    Today,
    Yesterday,
    CurrentMonth,
    LastMonth,
    /// The last `n` days, ending with the reference date
    LastDays(u32),
}

impl PresetKind {
    /// Range this kind covers relative to `reference`.
    ///
    /// `None` only when the range would leave the representable calendar.
    pub fn range(self, reference: NaiveDate) -> Option<DateRange> {
        match self {
            PresetKind::Today => Some(DateRange::day(reference)),
            PresetKind::Yesterday => reference.checked_sub_days(Days::new(1)).map(DateRange::day),
            PresetKind::CurrentMonth => Some(DateRange::new(
                start_of_month(reference)?,
                end_of_month(reference)?,
            )),
            PresetKind::LastMonth => {
                let previous = start_of_month(reference)?.checked_sub_months(Months::new(1))?;
                Some(DateRange::new(previous, end_of_month(previous)?))
            }
            PresetKind::LastDays(n) => {
                let start = reference.checked_sub_days(Days::new(u64::from(n.saturating_sub(1))))?;
                Some(DateRange::new(start, reference))
            }
        }
    }
}

/// A titled preset shown next to the calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub key: String,
    pub title: String,
    pub kind: PresetKind,
}

impl Preset {
    pub fn new(key: impl Into<String>, title: impl Into<String>, kind: PresetKind) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            kind,
        }
    }

    pub fn range(&self, reference: NaiveDate) -> Option<DateRange> {
        self.kind.range(reference)
    }

    /// Single date for single and multi calendars: the start of the range
    pub fn date(&self, reference: NaiveDate) -> Option<NaiveDate> {
        self.range(reference).map(|r| r.start)
    }
}

/// Presets grouped by calendar type, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetTable {
    #[serde(default)]
    pub single: Vec<Preset>,
    #[serde(default)]
    pub multi: Vec<Preset>,
    #[serde(default)]
    pub range: Vec<Preset>,
}

impl Default for PresetTable {
    fn default() -> Self {
        Self {
            single: Vec::new(),
            multi: Vec::new(),
            range: vec![
                Preset::new("today", "Today", PresetKind::Today),
                Preset::new("yesterday", "Yesterday", PresetKind::Yesterday),
                Preset::new("currentMonth", "Current Month", PresetKind::CurrentMonth),
                Preset::new("lastMonth", "Last Month", PresetKind::LastMonth),
            ],
        }
    }
}

impl PresetTable {
    pub fn for_calendar(&self, calendar: CalendarType) -> &[Preset] {
        match calendar {
            CalendarType::Single => &self.single,
            CalendarType::Multi => &self.multi,
            CalendarType::Range => &self.range,
        }
    }

    pub fn find(&self, calendar: CalendarType, key: &str) -> Option<&Preset> {
        self.for_calendar(calendar).iter().find(|p| p.key == key)
    }
}
