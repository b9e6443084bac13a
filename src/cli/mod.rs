pub mod log_view;
pub mod output;
pub mod rate;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log_view::{process_log_command, LogCommand};
use rate::{process_rate_command, RateCommand};

use crate::{
    storage::{log_storage::LogStorageImpl, LOGS_DIR},
    utils::{
        clock::DefaultClock,
        dir::resolve_application_path,
        logging::enable_logging,
    },
};

#[derive(Parser, Debug)]
#[command(name = "Dayrate", version, long_about = None)]
#[command(about = "Rates a free-text description of your day", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Print trace-level logs to stdout")]
    log: bool,
    #[arg(
        long,
        global = true,
        env = "DAYRATE_DIR",
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Rate a description of the day and append the result to the daily log")]
    Rate {
        #[command(flatten)]
        command: RateCommand,
    },
    #[command(about = "Show the rating log of a day or list the days that have one")]
    Log {
        #[command(flatten)]
        command: LogCommand,
    },
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let application_path = resolve_application_path(args.dir)?;

    enable_logging(&application_path, args.log)?;

    let storage = LogStorageImpl::new(application_path.join(LOGS_DIR));

    match args.commands {
        Commands::Rate { command } => process_rate_command(command, &storage, &DefaultClock).await,
        Commands::Log { command } => process_log_command(command, &storage, &DefaultClock).await,
    }
}
