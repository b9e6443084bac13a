//! Rating logs are organized through [log_storage::LogStorageImpl].
//! The basic idea is:
//!  - There is a directory with all the logs.
//!  - Every local day gets its own `output_YYYY-MM-DD.txt` file.
//!  - Each rating appends one plain-text entry to the file of the day it was made on.

pub mod log_storage;

/// Directory under the application directory that holds the daily rating logs.
pub const LOGS_DIR: &str = "logs";
