//! Input validation for query parameters.
//!
//! Each validator takes the raw integer a caller sent and either returns the
//! typed value or the [`DateQueryError`] whose message names the rule. Inputs
//! are `i64` so that out-of-range values reach these checks instead of
//! failing a narrowing conversion somewhere upstream.

use chrono::{Month, Weekday};

use crate::calendar::weekday_from_index;
use crate::error::{DateQueryError, Result};
use crate::scanner::Occurrence;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;
/// Largest accepted `|occurrence|`; no month has more than five of a weekday.
pub const MAX_OCCURRENCE: u32 = 5;

/// Validate a 1-based month number.
pub fn month(value: i64) -> Result<Month> {
    month_from(value).ok_or(DateQueryError::InvalidMonth)
}

pub fn year(value: i64) -> Result<i32> {
    i32::try_from(value)
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or(DateQueryError::InvalidYear)
}

/// Validate a Sunday-based weekday index (0-6).
pub fn weekday(value: i64) -> Result<Weekday> {
    u32::try_from(value)
        .ok()
        .and_then(weekday_from_index)
        .ok_or(DateQueryError::InvalidWeekday)
}

/// Validate a signed occurrence selector.
///
/// Zero has its own error so callers can tell "no such selector" apart from
/// "selector too large".
pub fn occurrence(value: i64) -> Result<Occurrence> {
    if value == 0 {
        return Err(DateQueryError::ZeroOccurrence);
    }
    let magnitude = u32::try_from(value.unsigned_abs())
        .ok()
        .filter(|n| *n <= MAX_OCCURRENCE)
        .ok_or(DateQueryError::OccurrenceOutOfRange)?;
    Ok(if value > 0 {
        Occurrence::FromStart(magnitude)
    } else {
        Occurrence::FromEnd(magnitude)
    })
}

/// Validate an inclusive month range.
///
/// Each bound is checked on its own before the ordering check.
pub fn month_range(start: i64, end: i64) -> Result<(Month, Month)> {
    let start_month = month_from(start).ok_or(DateQueryError::InvalidStartMonth)?;
    let end_month = month_from(end).ok_or(DateQueryError::InvalidEndMonth)?;
    if start_month.number_from_month() > end_month.number_from_month() {
        return Err(DateQueryError::InvalidMonthRange);
    }
    Ok((start_month, end_month))
}

fn month_from(value: i64) -> Option<Month> {
    u8::try_from(value)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
}
