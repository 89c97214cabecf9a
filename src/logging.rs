//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so events go to
//! `<log dir>/productdesk.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Name of the log file inside the log directory.
pub const LOG_FILE_NAME: &str = "productdesk.log";

/// Errors while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The log directory or file could not be created.
    #[error("could not open log file: {0}")]
    Io(#[from] std::io::Error),

    /// The filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("log subscriber already installed: {0}")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// Creates `log_dir` if needed and opens the log file for appending.
pub fn open_log_file(log_dir: &Path) -> Result<(PathBuf, fs::File), LogError> {
    fs::create_dir_all(log_dir)?;
    let path = log_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Installs the global subscriber. Returns the path being written to.
#[mutants::skip]
pub fn init(log_dir: &Path, filter: &str) -> Result<PathBuf, LogError> {
    let filter = EnvFilter::try_new(filter)?;
    let (path, file) = open_log_file(log_dir)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    Ok(path)
}
