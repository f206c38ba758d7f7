//! Weekday-occurrence scanning and occurrence selection.

use chrono::{Month, NaiveDate, Weekday};

use crate::calendar::{days_in_month, weekday_of};

/// A validated occurrence selector.
///
/// `FromStart(n)` is the nth match counting from the 1st of the month.
/// `FromEnd(n)` counts back from the last day, so `FromEnd(1)` is the last match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    FromStart(u32),
    FromEnd(u32),
}

impl Occurrence {
    /// The signed form a caller sends: positive from the start, negative from the end.
    pub fn value(self) -> i64 {
        match self {
            Self::FromStart(n) => i64::from(n),
            Self::FromEnd(n) => -i64::from(n),
        }
    }

    /// Pick the selected date out of a scanned month.
    ///
    /// Returns the 1-based position counted from the start of the month
    /// (even for `FromEnd`) together with the date, or `None` if the month
    /// has fewer matches than requested.
    pub fn resolve(self, dates: &[NaiveDate]) -> Option<(usize, NaiveDate)> {
        let index = match self {
            Self::FromStart(n) => (n as usize).checked_sub(1)?,
            Self::FromEnd(n) => dates.len().checked_sub(n as usize)?,
        };
        dates.get(index).map(|date| (index + 1, *date))
    }
}

/// Every date in `month` of `year` that falls on `weekday`, in day order.
///
/// An unrepresentable month yields an empty list rather than an error.
pub fn scan_month(year: i32, month: Month, weekday: Weekday) -> Vec<NaiveDate> {
    let month_number = month.number_from_month();
    let days = days_in_month(year, month_number).unwrap_or(0);

    (1..=days)
        .filter(|&day| weekday_of(year, month_number, day) == Some(weekday))
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month_number, day))
        .collect()
}
