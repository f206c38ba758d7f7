//! Relative-to-today metadata for a resolved date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::days_between;
use crate::format::{iso_date, long_date};

/// A resolved date plus where it sits relative to "today".
///
/// Exactly one of `is_past`, `is_today`, `is_future` is true.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInfo {
    /// ISO 8601 date (e.g., "2024-12-02").
    pub date: String,
    /// Long English form (e.g., "Monday, December 2, 2024").
    pub formatted: String,
    /// Signed whole days from today (negative in the past).
    pub days_from_today: i64,
    /// `days_from_today / 7`, rounded to two decimal places.
    pub weeks_from_today: f64,
    pub is_past: bool,
    pub is_today: bool,
    pub is_future: bool,
}

impl DateInfo {
    pub fn new(date: NaiveDate, today: NaiveDate) -> Self {
        let days_from_today = days_between(today, date);
        Self {
            date: iso_date(date),
            formatted: long_date(date),
            days_from_today,
            weeks_from_today: round_to_hundredths(days_from_today as f64 / 7.0),
            is_past: days_from_today < 0,
            is_today: days_from_today == 0,
            is_future: days_from_today > 0,
        }
    }
}

/// A [`DateInfo`] with its 1-based position in a scanned month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedDate {
    pub index: usize,
    #[serde(flatten)]
    pub info: DateInfo,
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
