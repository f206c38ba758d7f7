//! Calendar primitives: month lengths, weekdays, and the "today" anchor.
//!
//! Weekdays are indexed the way callers send them: Sunday = 0 through
//! Saturday = 6. Months are 1-based (January = 1).

use chrono::{Datelike, Local, Month, NaiveDate, NaiveTime, Weekday};

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, indexed Sunday = 0.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Number of days in `month` (1-12) of `year`.
///
/// Computed as the day before the 1st of the following month, so February
/// in a leap year comes out as 29 without a leap-year branch.
///
/// Returns `None` if `month` is outside 1-12 or the date cannot be represented.
///
/// # Examples
///
/// ```
/// use weekday_engine::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), Some(29));
/// assert_eq!(days_in_month(2025, 2), Some(28));
/// assert_eq!(days_in_month(2025, 13), None);
/// ```
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (ny, nm) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(ny, nm, 1)?;
    Some(first_next.pred_opt()?.day())
}

/// Day of the week for a concrete date, or `None` if the date does not exist.
pub fn weekday_of(year: i32, month: u32, day: u32) -> Option<Weekday> {
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.weekday())
}

/// Sunday-based index of `weekday` (Sunday = 0, Saturday = 6).
pub fn weekday_index(weekday: Weekday) -> u32 {
    weekday.num_days_from_sunday()
}

/// Inverse of [`weekday_index`].
pub fn weekday_from_index(index: u32) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[month.number_from_month() as usize - 1]
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday_index(weekday) as usize]
}

/// The current local calendar date. Time of day is discarded.
///
/// This is the only place the engine reads the system clock. Queries take
/// the anchor as a parameter; sample this once per call.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Signed number of whole days from `from` to `to`.
///
/// Both dates are pinned to UTC midnight before differencing, then the
/// millisecond difference is floored to days. Local-time subtraction would
/// drift by an hour across a DST change.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let from_utc = from.and_time(NaiveTime::MIN).and_utc();
    let to_utc = to.and_time(NaiveTime::MIN).and_utc();
    (to_utc - from_utc).num_milliseconds().div_euclid(MS_PER_DAY)
}
