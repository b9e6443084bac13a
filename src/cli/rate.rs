use std::path::PathBuf;

use ansi_term::Colour;
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Parser;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{error, info};

use crate::{
    rating::{generate_report, report::Report},
    storage::log_storage::LogStorage,
    utils::clock::Clock,
};

use super::output::{log_entry::format_log_entry, markdown::format_report};

#[derive(Debug, Parser)]
pub struct RateCommand {
    #[arg(
        help = "Description of the day, e.g. \"7点起床，跑了5公里；8点吃早餐\". Read from stdin when omitted"
    )]
    text: Option<String>,
    #[arg(long = "no-save", help = "Don't append the result to the daily log")]
    no_save: bool,
    #[arg(long, help = "Print the report as JSON instead of markdown")]
    json: bool,
}

/// Result of rating a text. The report is always there, saving it is best effort.
#[derive(Debug)]
pub struct RateOutcome {
    pub report: Report,
    pub saved_to: Option<PathBuf>,
}

/// Command to process `rate` command. Rates the text and appends it to the log of the current
/// day.
pub async fn process_rate_command(
    RateCommand {
        text,
        no_save,
        json,
    }: RateCommand,
    storage: &impl LogStorage,
    clock: &impl Clock,
) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_text(tokio::io::stdin()).await?,
    };

    let RateOutcome { report, saved_to } = rate_text(&text, storage, clock, !no_save).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_report(&report));
    }

    if !no_save {
        let status = match saved_to {
            Some(path) => Colour::Green.paint(format!("Saved to {}", path.display())),
            None => Colour::Red.paint("Failed to save the log, see traces for details".to_string()),
        };
        eprintln!("{status}");
    }
    Ok(())
}

/// Rates `text` as of the current time of `clock` and, when `save` is set, appends the result to
/// `storage`. Storage failures are logged and never discard the report.
pub async fn rate_text(
    text: &str,
    storage: &impl LogStorage,
    clock: &impl Clock,
    save: bool,
) -> RateOutcome {
    let now = clock.time();
    let report = generate_report(text, now.date_naive());

    let saved_to = if save {
        save_report(storage, text, &report, now.naive_local()).await
    } else {
        None
    };

    RateOutcome { report, saved_to }
}

async fn save_report(
    storage: &impl LogStorage,
    text: &str,
    report: &Report,
    recorded_at: NaiveDateTime,
) -> Option<PathBuf> {
    let entry = format_log_entry(text, report, recorded_at);
    match storage.append_entry(report.date, &entry).await {
        Ok(path) => {
            info!("Saved rating to {path:?}");
            Some(path)
        }
        Err(e) => {
            error!("Failed to save rating for {}: {e:?}", report.date);
            None
        }
    }
}

/// Reads the whole description. Blank input is still rated, it just scores nothing.
async fn read_text(mut input: impl AsyncRead + Unpin) -> Result<String> {
    let mut text = String::new();
    input.read_to_string(&mut text).await?;
    Ok(text)
}
