//! Selectable values for building a query form.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::{MONTH_NAMES, WEEKDAY_NAMES};
use crate::validate::{MAX_YEAR, MIN_YEAR};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedValue {
    pub value: u32,
    pub name: &'static str,
}

/// Months (1-12), the supported year range, weekdays (0-6), and the current year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub months: Vec<NamedValue>,
    pub years: Vec<i32>,
    pub days_of_week: Vec<NamedValue>,
    pub current_year: i32,
}

pub fn get_options(today: NaiveDate) -> Options {
    Options {
        months: named(&MONTH_NAMES, 1),
        years: (MIN_YEAR..=MAX_YEAR).collect(),
        days_of_week: named(&WEEKDAY_NAMES, 0),
        current_year: today.year(),
    }
}

fn named(names: &[&'static str], first: u32) -> Vec<NamedValue> {
    (first..)
        .zip(names)
        .map(|(value, name)| NamedValue { value, name: *name })
        .collect()
}
