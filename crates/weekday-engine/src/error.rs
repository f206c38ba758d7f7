//! Error types for weekday-engine operations.
//!
//! Only malformed input is an error. A query that runs but finds nothing is
//! reported as [`crate::QueryOutcome::Failure`] instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateQueryError {
    #[error("Month must be between 1 and 12")]
    InvalidMonth,

    #[error("Start month must be between 1 and 12")]
    InvalidStartMonth,

    #[error("End month must be between 1 and 12")]
    InvalidEndMonth,

    #[error("Start month cannot be greater than end month")]
    InvalidMonthRange,

    #[error("Year must be between 1900 and 2100")]
    InvalidYear,

    #[error("Day of week must be between 0 (Sunday) and 6 (Saturday)")]
    InvalidWeekday,

    #[error(
        "Occurrence cannot be 0. Use positive numbers for first, second, etc., \
         or negative for last, second-to-last, etc."
    )]
    ZeroOccurrence,

    #[error("Occurrence must be between -5 and 5 (excluding 0)")]
    OccurrenceOutOfRange,
}

pub type Result<T> = std::result::Result<T, DateQueryError>;
