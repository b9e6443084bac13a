use std::{path::Path, sync::LazyLock};

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::fmt::{format::FmtSpan, writer::MakeWriterExt};

/// File name prefix of the daily trace files.
const TRACE_PREFIX: &str = "dayrate";

/// Directory under the application directory that holds diagnostic traces. Kept apart from the
/// rating logs so `log --list` never sees them.
pub const TRACES_DIR: &str = "traces";

/// Traces always go to the daily file. `verbose` lowers the level to trace and mirrors the
/// output to stdout.
pub fn enable_logging(application_data_path: &Path, verbose: bool) -> Result<()> {
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(TRACE_PREFIX)
        .build(application_data_path.join(TRACES_DIR))?;

    let stdout = std::io::stdout.with_filter(move |_| verbose);

    let level = level_filter(verbose);

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace("-", "_"),
        )))
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(stdout.and(appender))
        .pretty()
        .init();
    Ok(())
}

fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    }
}

pub static TEST_LOGGING: LazyLock<()> = LazyLock::new(|| {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .pretty()
        .init()
});
