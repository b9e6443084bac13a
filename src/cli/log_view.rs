use std::fmt::Display;

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate};
use chrono_english::parse_date_string;
use clap::{CommandFactory, Parser, ValueEnum};

use crate::{
    storage::log_storage::LogStorage,
    utils::{clock::Clock, time::date_to_string},
};

use super::Args;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

#[derive(Debug, Parser)]
pub struct LogCommand {
    #[arg(
        long,
        short,
        help = "Day to show, today by default. Examples are \"2025-03-15\", \"yesterday\", \"15/03/2025\""
    )]
    date: Option<String>,
    #[arg(long, short, conflicts_with = "date", help = "List the days that have a log")]
    list: bool,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
}

/// Command to process `log` command. Prints the log of one day or the list of logged days.
pub async fn process_log_command(
    command: LogCommand,
    storage: &impl LogStorage,
    clock: &impl Clock,
) -> Result<()> {
    println!("{}", render_log_view(command, storage, clock).await?);
    Ok(())
}

/// Everything `log` prints. A missing log is a message, not an error.
async fn render_log_view(
    LogCommand {
        date,
        list,
        date_style,
    }: LogCommand,
    storage: &impl LogStorage,
    clock: &impl Clock,
) -> Result<String> {
    if list {
        let dates = storage.list_logs().await?;
        if dates.is_empty() {
            return Ok("No logs yet".to_string());
        }
        let mut lines = vec!["Available logs:".to_string(), "-".repeat(60)];
        lines.extend(dates.into_iter().map(|d| format!("  {}", date_to_string(d))));
        return Ok(lines.join("\n"));
    }

    let now = clock.time();
    let date = match date {
        Some(date) => parse_date(&date, now, date_style)?,
        None => now.date_naive(),
    };

    match storage.read_log(date).await? {
        Some(content) => Ok(content),
        None => Ok(format!("No log found for {}", date_to_string(date))),
    }
}

/// Accepts `YYYY-MM-DD` as well as anything [chrono_english] understands.
fn parse_date(value: &str, now: DateTime<Local>, date_style: DateStyle) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    match parse_date_string(value, now, date_style.into()) {
        Ok(v) => Ok(v.date_naive()),
        Err(e) => Err(Args::command()
            .error(
                clap::error::ErrorKind::ValueValidation,
                format!("Failed to validate date {value}: {e}"),
            )
            .into()),
    }
}
