//! Data model shared by every pipeline stage.

use chrono::{Datelike, NaiveDate};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// Cell texts of one `<tr>` in column order; `None` for a cell without text.
pub type RawRow = Vec<Option<String>>;

/// A data row with header rows removed and footnote markers stripped.
pub type ValidatedRow = Vec<String>;

/// Weekday names indexed by [`weekday_index`].
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Weekday of `date` as 0 (Monday) through 6 (Sunday).
pub fn weekday_index(date: NaiveDate) -> u8 {
    // num_days_from_monday is always < 7
    date.weekday().num_days_from_monday() as u8
}

/// One dashboard row as typed data: the canonical output unit.
///
/// Ordering compares the date first and then the values, so sorting a
/// slice of records yields calendar order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Record {
    /// Calendar date of the row
    pub date: NaiveDate,
    /// Integer columns in dashboard order (staff, students, ...)
    pub values: Vec<i64>,
}

impl Record {
    /// Create a new record.
    pub const fn new(date: NaiveDate, values: Vec<i64>) -> Self {
        Self { date, values }
    }

    /// The date as `YYYY-MM-DD`.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Value at `column`, or 0 when the row is shorter.
    pub fn value(&self, column: usize) -> i64 {
        self.values.get(column).copied().unwrap_or_default()
    }
}

/// Serialized as `["YYYY-MM-DD", v1, v2, ...]`.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len() + 1))?;
        seq.serialize_element(&self.iso_date())?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}", self.iso_date())?;
        for value in &self.values {
            write!(f, ", {value}")?;
        }
        write!(f, "]")
    }
}

/// A record with its weekday prepended, used for the weekday heatmap.
///
/// Ordering compares the weekday first, so a sorted slice is grouped by
/// weekday and is not in calendar order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeatRecord {
    /// 0 (Monday) through 6 (Sunday)
    pub weekday: u8,
    /// Calendar date of the row
    pub date: NaiveDate,
    /// Integer columns in dashboard order (staff, students, ...)
    pub values: Vec<i64>,
}

impl HeatRecord {
    /// Create a heat record, deriving the weekday from `date`.
    pub fn new(date: NaiveDate, values: Vec<i64>) -> Self {
        Self {
            weekday: weekday_index(date),
            date,
            values,
        }
    }

    /// Value at `column`, or 0 when the row is shorter.
    pub fn value(&self, column: usize) -> i64 {
        self.values.get(column).copied().unwrap_or_default()
    }
}

/// Serialized as `[weekday, "YYYY-MM-DD", v1, v2, ...]`.
impl Serialize for HeatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len() + 2))?;
        seq.serialize_element(&self.weekday)?;
        seq.serialize_element(&self.date.format("%Y-%m-%d").to_string())?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// Column holding new staff cases.
pub const STAFF_COLUMN: usize = 0;
/// Column holding new student cases.
pub const STUDENT_COLUMN: usize = 1;
