//! # weekday-engine
//!
//! Deterministic weekday-occurrence queries for calendar tools and agents.
//!
//! Answers questions like "which dates in December 2024 are Mondays" or
//! "what is the last Friday of each month in 2025", returning structured
//! results with each date's offset from a caller-supplied "today".
//!
//! ## Modules
//!
//! - [`calendar`]: month lengths, weekday lookup, the current-date anchor
//! - [`validate`]: bounds checks for month, year, weekday, occurrence, and month ranges
//! - [`scanner`]: ordered weekday matches within a month, occurrence selection
//! - [`query`]: the four public queries and their result types
//! - [`date_info`]: relative-to-today metadata for a resolved date
//! - [`format`]: ordinals, occurrence descriptions, date strings
//! - [`options`]: selectable months, years, and weekdays
//! - [`error`]: error types

pub mod calendar;
pub mod date_info;
pub mod error;
pub mod format;
pub mod options;
pub mod query;
pub mod scanner;
pub mod validate;

pub use date_info::{DateInfo, IndexedDate};
pub use error::DateQueryError;
pub use options::{get_options, NamedValue, Options};
pub use query::{
    generate_dates, nth_occurrence_finder, nth_occurrence_range, nth_occurrence_year, Failure,
    MonthResult, NthOccurrence, NthQuery, QueryOutcome, RangeQuery, RangeReport, WeekdayDates,
    WeekdayQuery,
};
pub use scanner::{scan_month, Occurrence};
