//! Weekday date queries.
//!
//! Four operations built on [`scan_month`]:
//!
//! - [`generate_dates`]: every date in a month falling on a weekday
//! - [`nth_occurrence_finder`]: the Nth (or Nth-from-last) such date
//! - [`nth_occurrence_range`]: the same selection across consecutive months
//! - [`nth_occurrence_year`]: the same selection across a whole year
//!
//! # Two failure channels
//!
//! Malformed input (month 13, occurrence 0, start month after end month)
//! returns `Err(DateQueryError)` before any scanning happens. A well-formed
//! query that has no answer, such as the 5th Sunday of a month with four,
//! returns `Ok(QueryOutcome::Failure(..))` with a message and, when known,
//! the count that was actually found. Range queries collect per-month
//! failures instead of stopping at the first one.
//!
//! Every operation takes `today` explicitly; it anchors the relative fields
//! of [`DateInfo`]. Pass [`crate::calendar::today()`] for the real date.

use chrono::{Month, NaiveDate, Weekday};
use serde::{Serialize, Serializer};

use crate::calendar::{month_name, weekday_name};
use crate::date_info::{DateInfo, IndexedDate};
use crate::error::Result;
use crate::format::occurrence_description;
use crate::scanner::{scan_month, Occurrence};
use crate::validate;

// ── Outcome ─────────────────────────────────────────────────────────────────

/// The result of a query that passed validation.
///
/// Serializes as the payload with `"success": true` added, or as the
/// [`Failure`] with `"success": false`.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<T> {
    Success(T),
    Failure(Failure),
}

impl<T> QueryOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }
}

impl<T: Serialize> Serialize for QueryOutcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Tagged<'a, B: Serialize> {
            success: bool,
            #[serde(flatten)]
            body: &'a B,
        }

        match self {
            Self::Success(body) => Tagged {
                success: true,
                body,
            }
            .serialize(serializer),
            Self::Failure(body) => Tagged {
                success: false,
                body,
            }
            .serialize(serializer),
        }
    }
}

/// A query that ran but found nothing to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    pub message: String,
    /// How many matching weekdays the month actually has, when that is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_occurrences: Option<usize>,
}

impl Failure {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            total_occurrences: None,
        }
    }
}

// ── generate_dates ──────────────────────────────────────────────────────────

/// Echo of a [`generate_dates`] query, with names instead of numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayQuery {
    pub month: &'static str,
    pub year: i32,
    pub day_of_week: &'static str,
}

/// Every date in a month that falls on the requested weekday.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayDates {
    pub query: WeekdayQuery,
    pub total_dates: usize,
    pub dates: Vec<IndexedDate>,
}

/// List every date in `month`/`year` that falls on `day_of_week`.
///
/// # Arguments
///
/// * `today`: Anchor for the relative fields of each [`DateInfo`]
/// * `month`: 1-12
/// * `year`: 1900-2100
/// * `day_of_week`: 0 (Sunday) to 6 (Saturday)
///
/// # Errors
///
/// Returns the matching [`crate::DateQueryError`] variant if any argument is
/// out of range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weekday_engine::query::generate_dates;
///
/// let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
/// let outcome = generate_dates(today, 12, 2024, 1).unwrap();
/// let mondays = outcome.success().unwrap();
/// assert_eq!(mondays.total_dates, 5);
/// assert_eq!(mondays.dates[0].info.date, "2024-12-02");
/// ```
pub fn generate_dates(
    today: NaiveDate,
    month: i64,
    year: i64,
    day_of_week: i64,
) -> Result<QueryOutcome<WeekdayDates>> {
    let month = validate::month(month)?;
    let year = validate::year(year)?;
    let weekday = validate::weekday(day_of_week)?;

    let dates = scan_month(year, month, weekday);
    tracing::debug!(
        month = month_name(month),
        year,
        weekday = weekday_name(weekday),
        found = dates.len(),
        "scanned month"
    );

    if dates.is_empty() {
        return Ok(QueryOutcome::Failure(Failure::new(
            "No dates found for the specified criteria",
        )));
    }

    Ok(QueryOutcome::Success(WeekdayDates {
        query: WeekdayQuery {
            month: month_name(month),
            year,
            day_of_week: weekday_name(weekday),
        },
        total_dates: dates.len(),
        dates: dates
            .iter()
            .enumerate()
            .map(|(i, date)| IndexedDate {
                index: i + 1,
                info: DateInfo::new(*date, today),
            })
            .collect(),
    }))
}

// ── nth_occurrence_finder ───────────────────────────────────────────────────

/// Echo of an occurrence query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NthQuery {
    pub month: &'static str,
    pub year: i32,
    pub day_of_week: &'static str,
    pub requested_occurrence: i64,
    /// e.g. "2nd occurrence", "last occurrence", "3rd to last occurrence".
    pub occurrence_description: String,
}

/// The date selected by an occurrence query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NthOccurrence {
    pub query: NthQuery,
    /// How many times the weekday occurs in the month.
    pub total_occurrences: usize,
    /// 1-based position of the found date counting from the start of the
    /// month, even when the request counted from the end.
    pub found_occurrence: usize,
    pub date: DateInfo,
}

/// Find the Nth occurrence of `day_of_week` in `month`/`year`.
///
/// Positive `occurrence` counts from the start of the month (1 = first).
/// Negative counts from the end (-1 = last, -2 = second to last).
///
/// # Errors
///
/// Returns [`crate::DateQueryError`] if month, year, or weekday is out of
/// range, if `occurrence` is 0, or if `|occurrence| > 5`. Asking for an
/// occurrence the month does not have is not an error; it yields
/// [`QueryOutcome::Failure`] carrying the actual count.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weekday_engine::query::nth_occurrence_finder;
///
/// let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
///
/// // Last Friday of December 2024.
/// let outcome = nth_occurrence_finder(today, 12, 2024, 5, -1).unwrap();
/// let found = outcome.success().unwrap();
/// assert_eq!(found.date.date, "2024-12-27");
/// assert_eq!(found.found_occurrence, 4);
/// ```
pub fn nth_occurrence_finder(
    today: NaiveDate,
    month: i64,
    year: i64,
    day_of_week: i64,
    occurrence: i64,
) -> Result<QueryOutcome<NthOccurrence>> {
    let month = validate::month(month)?;
    let year = validate::year(year)?;
    let weekday = validate::weekday(day_of_week)?;
    let occurrence = validate::occurrence(occurrence)?;

    Ok(find_in_month(today, year, month, weekday, occurrence))
}

/// Resolve an already-validated occurrence query for one month.
fn find_in_month(
    today: NaiveDate,
    year: i32,
    month: Month,
    weekday: Weekday,
    occurrence: Occurrence,
) -> QueryOutcome<NthOccurrence> {
    let dates = scan_month(year, month, weekday);
    let day_name = weekday_name(weekday);

    if dates.is_empty() {
        return QueryOutcome::Failure(Failure::new(
            "No dates found for the specified day of week in this month",
        ));
    }

    let Some((found_occurrence, date)) = occurrence.resolve(&dates) else {
        tracing::debug!(
            month = month_name(month),
            year,
            weekday = day_name,
            requested = occurrence.value(),
            available = dates.len(),
            "occurrence past end of month"
        );
        return QueryOutcome::Failure(Failure {
            message: format!(
                "Only {} {}s exist in {} {}. Cannot find occurrence {}",
                dates.len(),
                day_name,
                month_name(month),
                year,
                occurrence.value()
            ),
            total_occurrences: Some(dates.len()),
        });
    };

    QueryOutcome::Success(NthOccurrence {
        query: NthQuery {
            month: month_name(month),
            year,
            day_of_week: day_name,
            requested_occurrence: occurrence.value(),
            occurrence_description: occurrence_description(occurrence),
        },
        total_occurrences: dates.len(),
        found_occurrence,
        date: DateInfo::new(date, today),
    })
}

// ── nth_occurrence_range / nth_occurrence_year ──────────────────────────────

/// Echo of a range query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    pub start_month: &'static str,
    pub end_month: &'static str,
    pub year: i32,
    pub day_of_week: &'static str,
    pub requested_occurrence: i64,
    pub occurrence_description: String,
}

/// One month's outcome within a range query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthResult {
    pub month: &'static str,
    pub month_number: u32,
    #[serde(flatten)]
    pub outcome: QueryOutcome<NthOccurrence>,
}

/// Per-month results of a range or year query.
///
/// `success` is true when at least one month produced a date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeReport {
    pub success: bool,
    pub query: RangeQuery,
    pub total_months: usize,
    pub successful_months: usize,
    pub results: Vec<MonthResult>,
}

/// Find the Nth occurrence of `day_of_week` in each month from
/// `start_month` through `end_month` (inclusive) of `year`.
///
/// All parameters are validated once up front. Each month is then resolved
/// independently: a month without the requested occurrence shows up as a
/// failed [`MonthResult`] and does not stop the others.
///
/// # Errors
///
/// Returns [`crate::DateQueryError::InvalidStartMonth`] or
/// [`crate::DateQueryError::InvalidEndMonth`] for an out-of-range bound,
/// [`crate::DateQueryError::InvalidMonthRange`] if `start_month > end_month`,
/// and the usual year/weekday/occurrence errors.
pub fn nth_occurrence_range(
    today: NaiveDate,
    start_month: i64,
    end_month: i64,
    year: i64,
    day_of_week: i64,
    occurrence: i64,
) -> Result<RangeReport> {
    let (start, end) = validate::month_range(start_month, end_month)?;
    let year = validate::year(year)?;
    let weekday = validate::weekday(day_of_week)?;
    let occurrence = validate::occurrence(occurrence)?;

    let results: Vec<MonthResult> = (start.number_from_month()..=end.number_from_month())
        .filter_map(|n| u8::try_from(n).ok().and_then(|n| Month::try_from(n).ok()))
        .map(|month| MonthResult {
            month: month_name(month),
            month_number: month.number_from_month(),
            outcome: find_in_month(today, year, month, weekday, occurrence),
        })
        .collect();

    let successful_months = results.iter().filter(|r| r.outcome.is_success()).count();
    tracing::debug!(
        start_month = month_name(start),
        end_month = month_name(end),
        year,
        weekday = weekday_name(weekday),
        requested = occurrence.value(),
        successful_months,
        total_months = results.len(),
        "resolved month range"
    );

    Ok(RangeReport {
        success: successful_months > 0,
        query: RangeQuery {
            start_month: month_name(start),
            end_month: month_name(end),
            year,
            day_of_week: weekday_name(weekday),
            requested_occurrence: occurrence.value(),
            occurrence_description: occurrence_description(occurrence),
        },
        total_months: results.len(),
        successful_months,
        results,
    })
}

/// [`nth_occurrence_range`] over January through December.
pub fn nth_occurrence_year(
    today: NaiveDate,
    year: i64,
    day_of_week: i64,
    occurrence: i64,
) -> Result<RangeReport> {
    nth_occurrence_range(today, 1, 12, year, day_of_week, occurrence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DateQueryError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    // ── generate_dates ──────────────────────────────────────────────────

    #[test]
    fn test_generate_december_2024_mondays() {
        let outcome = generate_dates(today(), 12, 2024, 1).unwrap();
        let result = outcome.success().unwrap();
        assert_eq!(result.total_dates, 5);
        let isos: Vec<&str> = result.dates.iter().map(|d| d.info.date.as_str()).collect();
        assert_eq!(
            isos,
            vec![
                "2024-12-02",
                "2024-12-09",
                "2024-12-16",
                "2024-12-23",
                "2024-12-30"
            ]
        );
        let indexes: Vec<usize> = result.dates.iter().map(|d| d.index).collect();
        assert_eq!(indexes, vec![1, 2, 3, 4, 5]);
        assert_eq!(result.query.month, "December");
        assert_eq!(result.query.day_of_week, "Monday");
    }

    #[test]
    fn test_generate_relative_fields() {
        let outcome = generate_dates(today(), 6, 2024, 6).unwrap();
        let result = outcome.success().unwrap();
        // June 2024 Saturdays: 1, 8, 15, 22, 29.
        let days: Vec<i64> = result.dates.iter().map(|d| d.info.days_from_today).collect();
        assert_eq!(days, vec![-14, -7, 0, 7, 14]);
        assert!(result.dates[2].info.is_today);
    }

    #[test]
    fn test_generate_validation_errors() {
        assert_eq!(
            generate_dates(today(), 13, 2024, 1),
            Err(DateQueryError::InvalidMonth)
        );
        assert_eq!(
            generate_dates(today(), 1, 1899, 1),
            Err(DateQueryError::InvalidYear)
        );
        assert_eq!(
            generate_dates(today(), 1, 2024, 7),
            Err(DateQueryError::InvalidWeekday)
        );
    }

    // ── nth_occurrence_finder ───────────────────────────────────────────

    #[test]
    fn test_second_tuesday_march_2024() {
        let outcome = nth_occurrence_finder(today(), 3, 2024, 2, 2).unwrap();
        let found = outcome.success().unwrap();
        assert_eq!(found.date.date, "2024-03-12");
        assert_eq!(found.found_occurrence, 2);
        assert_eq!(found.total_occurrences, 4);
        assert_eq!(found.query.occurrence_description, "2nd occurrence");
        assert_eq!(found.query.requested_occurrence, 2);
    }

    #[test]
    fn test_last_friday_december_2024() {
        let outcome = nth_occurrence_finder(today(), 12, 2024, 5, -1).unwrap();
        let found = outcome.success().unwrap();
        assert_eq!(found.date.date, "2024-12-27");
        assert_eq!(found.found_occurrence, 4);
        assert_eq!(found.query.occurrence_description, "last occurrence");
        assert_eq!(found.query.requested_occurrence, -1);
    }

    #[test]
    fn test_third_to_last() {
        // December 2024 Mondays: 2, 9, 16, 23, 30.
        let outcome = nth_occurrence_finder(today(), 12, 2024, 1, -3).unwrap();
        let found = outcome.success().unwrap();
        assert_eq!(found.date.date, "2024-12-16");
        assert_eq!(found.found_occurrence, 3);
        assert_eq!(found.query.occurrence_description, "3rd to last occurrence");
    }

    #[test]
    fn test_fifth_sunday_february_2025_is_failure() {
        let outcome = nth_occurrence_finder(today(), 2, 2025, 0, 5).unwrap();
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.total_occurrences, Some(4));
        assert_eq!(
            failure.message,
            "Only 4 Sundays exist in February 2025. Cannot find occurrence 5"
        );
    }

    #[test]
    fn test_minus_five_in_four_occurrence_month_is_failure() {
        let outcome = nth_occurrence_finder(today(), 2, 2025, 0, -5).unwrap();
        let failure = outcome.failure().unwrap();
        assert!(failure.message.starts_with("Only 4 "));
        assert!(failure.message.ends_with("occurrence -5"));
    }

    #[test]
    fn test_zero_occurrence_is_error() {
        let err = nth_occurrence_finder(today(), 3, 2024, 1, 0).unwrap_err();
        assert_eq!(err, DateQueryError::ZeroOccurrence);
        assert!(err.to_string().contains("cannot be 0"));
    }

    #[test]
    fn test_occurrence_out_of_range_is_error() {
        assert_eq!(
            nth_occurrence_finder(today(), 3, 2024, 1, 6),
            Err(DateQueryError::OccurrenceOutOfRange)
        );
    }

    #[test]
    fn test_finder_serializes_with_success_tag() {
        let outcome = nth_occurrence_finder(today(), 3, 2024, 2, 2).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["foundOccurrence"], 2);
        assert_eq!(json["totalOccurrences"], 4);
        assert_eq!(json["query"]["dayOfWeek"], "Tuesday");
        assert_eq!(json["date"]["date"], "2024-03-12");
        assert_eq!(json["date"]["formatted"], "Tuesday, March 12, 2024");
    }

    #[test]
    fn test_failure_serializes_message_and_count() {
        let outcome = nth_occurrence_finder(today(), 2, 2025, 0, 5).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["totalOccurrences"], 4);
        assert!(json["message"].as_str().unwrap().starts_with("Only 4"));
        assert!(json.get("date").is_none());
    }

    // ── nth_occurrence_range / year ─────────────────────────────────────

    #[test]
    fn test_range_start_after_end_is_error() {
        let err = nth_occurrence_range(today(), 6, 3, 2024, 1, 1).unwrap_err();
        assert_eq!(err.to_string(), "Start month cannot be greater than end month");
    }

    #[test]
    fn test_range_validates_before_scanning() {
        assert_eq!(
            nth_occurrence_range(today(), 0, 3, 2024, 1, 1),
            Err(DateQueryError::InvalidStartMonth)
        );
        assert_eq!(
            nth_occurrence_range(today(), 1, 3, 2024, 1, 0),
            Err(DateQueryError::ZeroOccurrence)
        );
        assert_eq!(
            nth_occurrence_range(today(), 1, 3, 3000, 1, 1),
            Err(DateQueryError::InvalidYear)
        );
    }

    #[test]
    fn test_range_second_wednesday_q1_2025() {
        let report = nth_occurrence_range(today(), 1, 3, 2025, 3, 2).unwrap();
        assert!(report.success);
        assert_eq!(report.total_months, 3);
        assert_eq!(report.successful_months, 3);
        assert_eq!(report.query.start_month, "January");
        assert_eq!(report.query.end_month, "March");
        let dates: Vec<&str> = report
            .results
            .iter()
            .map(|r| r.outcome.success().unwrap().date.date.as_str())
            .collect();
        assert_eq!(dates, vec!["2025-01-08", "2025-02-12", "2025-03-12"]);
        let numbers: Vec<u32> = report.results.iter().map(|r| r.month_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_range_mixed_outcomes_do_not_abort() {
        let report = nth_occurrence_range(today(), 1, 4, 2025, 0, 5).unwrap();
        assert_eq!(report.total_months, 4);
        assert_eq!(report.results.len(), 4);
        let flags: Vec<bool> = report.results.iter().map(|r| r.outcome.is_success()).collect();
        // Sundays 2025: Mar 30 is the only 5th Sunday in Jan-Apr.
        assert_eq!(flags, vec![false, false, true, false]);
        assert_eq!(report.successful_months, 1);
        assert!(report.success);
        assert_eq!(
            report.results[2].outcome.success().unwrap().date.date,
            "2025-03-30"
        );
    }

    #[test]
    fn test_range_all_months_fail() {
        // February 2025 alone has no 5th Sunday.
        let report = nth_occurrence_range(today(), 2, 2, 2025, 0, 5).unwrap();
        assert!(!report.success);
        assert_eq!(report.successful_months, 0);
        assert_eq!(report.total_months, 1);
    }

    #[test]
    fn test_range_serializes_month_entries() {
        let report = nth_occurrence_range(today(), 2, 3, 2025, 0, 5).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["results"][0]["month"], "February");
        assert_eq!(json["results"][0]["monthNumber"], 2);
        assert_eq!(json["results"][0]["success"], false);
        assert_eq!(json["results"][1]["success"], true);
        assert_eq!(json["results"][1]["date"]["date"], "2025-03-30");
    }

    #[test]
    fn test_year_is_full_range() {
        let year = nth_occurrence_year(today(), 2024, 1, 1).unwrap();
        let range = nth_occurrence_range(today(), 1, 12, 2024, 1, 1).unwrap();
        assert_eq!(year, range);
        assert_eq!(year.total_months, 12);
        assert_eq!(year.successful_months, 12);
        assert_eq!(year.query.start_month, "January");
        assert_eq!(year.query.end_month, "December");
    }
}
