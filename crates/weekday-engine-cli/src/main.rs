use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use weekday_engine::calendar;

mod dispatch;

#[derive(Parser)]
#[command(
    name = "weekday-engine",
    version,
    about = "Find dates by weekday: every Monday in a month, the 2nd Tuesday, the last Friday of each month"
)]
struct Cli {
    /// Date to treat as today (YYYY-MM-DD). Defaults to the local date.
    #[arg(long, global = true, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    /// Log to stderr (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every date in a month that falls on a weekday
    GenerateDates {
        /// Month (1-12)
        #[arg(long, allow_negative_numbers = true)]
        month: i64,
        /// Year (1900-2100)
        #[arg(long, allow_negative_numbers = true)]
        year: i64,
        /// Day of week (0=Sunday ... 6=Saturday)
        #[arg(long, allow_negative_numbers = true)]
        day_of_week: i64,
    },
    /// Find the Nth (or Nth-from-last) weekday in a month
    NthOccurrenceFinder {
        #[arg(long, allow_negative_numbers = true)]
        month: i64,
        #[arg(long, allow_negative_numbers = true)]
        year: i64,
        #[arg(long, allow_negative_numbers = true)]
        day_of_week: i64,
        /// 1=first ... 5=fifth, -1=last ... -5=fifth to last
        #[arg(long, allow_negative_numbers = true)]
        occurrence: i64,
    },
    /// Find the Nth weekday in each month of a range
    NthOccurrenceRange {
        #[arg(long, allow_negative_numbers = true)]
        start_month: i64,
        #[arg(long, allow_negative_numbers = true)]
        end_month: i64,
        #[arg(long, allow_negative_numbers = true)]
        year: i64,
        #[arg(long, allow_negative_numbers = true)]
        day_of_week: i64,
        #[arg(long, allow_negative_numbers = true)]
        occurrence: i64,
    },
    /// Find the Nth weekday in every month of a year
    NthOccurrenceYear {
        #[arg(long, allow_negative_numbers = true)]
        year: i64,
        #[arg(long, allow_negative_numbers = true)]
        day_of_week: i64,
        #[arg(long, allow_negative_numbers = true)]
        occurrence: i64,
    },
    /// List selectable months, years, and weekdays
    GetOptions,
    /// List the tool names accepted by `call`
    ListTools,
    /// Run a tool by name with JSON arguments
    Call {
        /// Tool name, e.g. nth_occurrence_finder
        tool: String,
        /// Arguments as a JSON object, e.g. '{"month":3,"year":2024,"dayOfWeek":2,"occurrence":2}'
        #[arg(default_value = "{}")]
        args: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Sampled once per invocation, never cached.
    let today = cli.today.unwrap_or_else(calendar::today);

    let (output, code) = match run(cli.command, today) {
        Ok(value) => (value, ExitCode::SUCCESS),
        Err(err) => {
            tracing::debug!(error = %err, "call failed");
            (
                json!({ "success": false, "error": format!("{err:#}") }),
                ExitCode::FAILURE,
            )
        }
    };

    match render(&output, cli.compact) {
        Ok(text) => {
            println!("{text}");
            code
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, today: NaiveDate) -> Result<Value> {
    let (tool, args) = match command {
        Command::GenerateDates {
            month,
            year,
            day_of_week,
        } => (
            "generate_dates".to_string(),
            json!({ "month": month, "year": year, "dayOfWeek": day_of_week }),
        ),
        Command::NthOccurrenceFinder {
            month,
            year,
            day_of_week,
            occurrence,
        } => (
            "nth_occurrence_finder".to_string(),
            json!({
                "month": month,
                "year": year,
                "dayOfWeek": day_of_week,
                "occurrence": occurrence,
            }),
        ),
        Command::NthOccurrenceRange {
            start_month,
            end_month,
            year,
            day_of_week,
            occurrence,
        } => (
            "nth_occurrence_range".to_string(),
            json!({
                "startMonth": start_month,
                "endMonth": end_month,
                "year": year,
                "dayOfWeek": day_of_week,
                "occurrence": occurrence,
            }),
        ),
        Command::NthOccurrenceYear {
            year,
            day_of_week,
            occurrence,
        } => (
            "nth_occurrence_year".to_string(),
            json!({ "year": year, "dayOfWeek": day_of_week, "occurrence": occurrence }),
        ),
        Command::GetOptions => ("get_options".to_string(), json!({})),
        Command::ListTools => return Ok(json!(dispatch::TOOL_NAMES)),
        Command::Call { tool, args } => {
            let args: Value = serde_json::from_str(&args)
                .with_context(|| format!("Arguments are not valid JSON: {args}"))?;
            (tool, args)
        }
    };
    dispatch::call_tool(&tool, &args, today)
}

fn render(value: &Value, compact: bool) -> Result<String> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(text)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
