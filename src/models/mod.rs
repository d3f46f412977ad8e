//! Core data model: day field identifiers, structured store keys, waivers.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The six per-day fields. The first four are user-entered timestamps,
/// the two `*Total` fields are derived and never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayField {
    DayBegin,
    LunchBegin,
    LunchEnd,
    DayEnd,
    LunchTotal,
    DayTotal,
}

/// The raw timestamp fields in their canonical in-day order.
pub const RAW_FIELDS: [DayField; 4] = [
    DayField::DayBegin,
    DayField::LunchBegin,
    DayField::LunchEnd,
    DayField::DayEnd,
];

impl DayField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayField::DayBegin => "day-begin",
            DayField::LunchBegin => "lunch-begin",
            DayField::LunchEnd => "lunch-end",
            DayField::DayEnd => "day-end",
            DayField::LunchTotal => "lunch-total",
            DayField::DayTotal => "day-total",
        }
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, DayField::LunchTotal | DayField::DayTotal)
    }
}

impl fmt::Display for DayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day-begin" => Ok(DayField::DayBegin),
            "lunch-begin" => Ok(DayField::LunchBegin),
            "lunch-end" => Ok(DayField::LunchEnd),
            "day-end" => Ok(DayField::DayEnd),
            "lunch-total" => Ok(DayField::LunchTotal),
            "day-total" => Ok(DayField::DayTotal),
            other => Err(AppError::InvalidField(other.to_string())),
        }
    }
}

/// Structured key addressing one stored time value. Compared and hashed
/// structurally; the string form is only used at the persistence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub field: DayField,
}

impl DayKey {
    pub fn new(year: i32, month: u32, day: u32, field: DayField) -> Self {
        Self {
            year,
            month,
            day,
            field,
        }
    }

    /// Serialized form used as the persistent map key.
    pub fn storage_key(&self) -> String {
        format!("{}-{}-{}-{}", self.year, self.month, self.day, self.field)
    }

    /// Parse a persisted key back into its structured form.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.splitn(4, '-');
        let year = parts.next()?.parse().ok()?;
        let month = parts.next()?.parse().ok()?;
        let day = parts.next()?.parse().ok()?;
        let field = parts.next()?.parse().ok()?;
        Some(Self {
            year,
            month,
            day,
            field,
        })
    }
}

/// Manual override for one day: replaces the computed day total with a
/// fixed value and a justification. Persisted as JSON in the waiver map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waiver {
    pub hours: String,
    pub reason: String,
}

/// Persistent key for a waiver ("YYYY-MM-DD").
pub fn waiver_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The four raw timestamps of one date, each possibly absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayEntries {
    pub day_begin: Option<String>,
    pub lunch_begin: Option<String>,
    pub lunch_end: Option<String>,
    pub day_end: Option<String>,
}

impl DayEntries {
    /// True when every raw field holds a value (the day is finished).
    pub fn is_complete(&self) -> bool {
        self.day_begin.is_some()
            && self.lunch_begin.is_some()
            && self.lunch_end.is_some()
            && self.day_end.is_some()
    }

    /// Raw values in canonical order, for ordering checks.
    pub fn in_order(&self) -> [Option<&str>; 4] {
        [
            self.day_begin.as_deref(),
            self.lunch_begin.as_deref(),
            self.lunch_end.as_deref(),
            self.day_end.as_deref(),
        ]
    }
}

/// Output of the per-day derivation: the two derived totals plus the
/// ordering-error flag for the row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayTotals {
    pub lunch_total: Option<String>,
    pub day_total: Option<String>,
    pub has_error: bool,
}
