//! Tool-name dispatch: run a named query with JSON arguments.
//!
//! Tool names and argument keys match what agent orchestrators send:
//! `generate_dates`, `nth_occurrence_finder`, `nth_occurrence_range`,
//! `nth_occurrence_year`, `get_options`, with camelCase keys such as
//! `dayOfWeek` and `startMonth`.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde_json::Value;
use weekday_engine::{
    generate_dates, get_options, nth_occurrence_finder, nth_occurrence_range, nth_occurrence_year,
};

pub const TOOL_NAMES: [&str; 5] = [
    "generate_dates",
    "nth_occurrence_finder",
    "nth_occurrence_range",
    "nth_occurrence_year",
    "get_options",
];

/// Run the tool `name` against `args` and return its structured result.
///
/// Domain failures (e.g. no 5th Sunday) come back as `Ok` with
/// `"success": false`. Validation errors, missing arguments, and unknown
/// tool names are `Err`.
pub fn call_tool(name: &str, args: &Value, today: NaiveDate) -> Result<Value> {
    tracing::debug!(tool = name, %args, %today, "dispatching tool call");

    let result = match name {
        "generate_dates" => serde_json::to_value(generate_dates(
            today,
            int_arg(args, "month")?,
            int_arg(args, "year")?,
            int_arg(args, "dayOfWeek")?,
        )?)?,
        "nth_occurrence_finder" => serde_json::to_value(nth_occurrence_finder(
            today,
            int_arg(args, "month")?,
            int_arg(args, "year")?,
            int_arg(args, "dayOfWeek")?,
            int_arg(args, "occurrence")?,
        )?)?,
        "nth_occurrence_range" => serde_json::to_value(nth_occurrence_range(
            today,
            int_arg(args, "startMonth")?,
            int_arg(args, "endMonth")?,
            int_arg(args, "year")?,
            int_arg(args, "dayOfWeek")?,
            int_arg(args, "occurrence")?,
        )?)?,
        "nth_occurrence_year" => serde_json::to_value(nth_occurrence_year(
            today,
            int_arg(args, "year")?,
            int_arg(args, "dayOfWeek")?,
            int_arg(args, "occurrence")?,
        )?)?,
        "get_options" => serde_json::to_value(get_options(today))?,
        other => bail!("Unknown tool: {other}"),
    };

    Ok(result)
}

/// Read an integer argument. Integral floats such as `3.0` are accepted.
fn int_arg(args: &Value, key: &str) -> Result<i64> {
    let value = args
        .get(key)
        .with_context(|| format!("Missing required argument '{key}'"))?;
    value
        .as_i64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        })
        .with_context(|| format!("Argument '{key}' must be an integer, got {value}"))
}
