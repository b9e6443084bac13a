use std::{
    future::{self, Future},
    io::ErrorKind,
    path::PathBuf,
};

use anyhow::Result;
use chrono::NaiveDate;
use fs4::tokio::AsyncFileExt;
use futures::TryStreamExt;
use tokio::{
    fs::{self, File},
    io::{AsyncReadExt, AsyncWriteExt},
};
use tokio_stream::wrappers::ReadDirStream;
use tracing::{debug, warn};

use crate::utils::time::{date_to_log_name, log_name_to_date};

/// Interface for abstracting storage of rating logs.
pub trait LogStorage {
    /// Appends `entry` to the log of `date`, creating it if needed. Returns the path written to.
    fn append_entry(&self, date: NaiveDate, entry: &str) -> impl Future<Output = Result<PathBuf>>;

    /// Retrieves the whole log of `date`. [None] means nothing was logged that day.
    fn read_log(&self, date: NaiveDate) -> impl Future<Output = Result<Option<String>>>;

    /// Dates that have a log, newest first.
    fn list_logs(&self) -> impl Future<Output = Result<Vec<NaiveDate>>>;
}

/// The main realization of [LogStorage].
pub struct LogStorageImpl {
    log_dir: PathBuf,
}

impl LogStorageImpl {
    /// The directory is created on the first append, so reading never leaves an empty directory
    /// behind.
    pub fn new(log_dir: PathBuf) -> Self {
        Self { log_dir }
    }

    pub fn log_path(&self, date: NaiveDate) -> PathBuf {
        self.log_dir.join(date_to_log_name(date))
    }
}

impl LogStorage for LogStorageImpl {
    async fn append_entry(&self, date: NaiveDate, entry: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.log_dir).await?;
        let path = self.log_path(date);

        let mut file = File::options()
            .append(true)
            .create(true)
            .open(&path)
            .await?;

        // Another rating of the same day may be writing right now.
        file.lock_exclusive()?;
        let result = write_entry(&mut file, entry).await;
        file.unlock_async().await?;
        result?;

        debug!("Appended {} bytes to {path:?}", entry.len());
        Ok(path)
    }

    async fn read_log(&self, date: NaiveDate) -> Result<Option<String>> {
        let path = self.log_path(date);
        let mut file = match File::open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No log at {path:?}");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        file.lock_shared()?;
        let mut content = String::new();
        let result = file.read_to_string(&mut content).await;
        file.unlock_async().await?;
        result?;

        Ok(Some(content))
    }

    async fn list_logs(&self) -> Result<Vec<NaiveDate>> {
        let entries = match fs::read_dir(&self.log_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Log directory {:?} doesn't exist", self.log_dir);
                return Ok(vec![]);
            }
            Err(e) => return Err(e.into()),
        };

        let mut dates = ReadDirStream::new(entries)
            .try_filter_map(|entry| {
                future::ready(Ok(log_name_to_date(&entry.file_name().to_string_lossy())))
            })
            .try_collect::<Vec<_>>()
            .await?;

        dates.sort_unstable_by(|a, b| b.cmp(a));
        Ok(dates)
    }
}

async fn write_entry(file: &mut File, entry: &str) -> std::io::Result<()> {
    file.write_all(entry.as_bytes()).await?;
    file.flush().await
}
