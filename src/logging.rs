//! File-backed tracing setup. The terminal belongs to the UI, so log output
//! goes to `<data dir>/eventwiz/eventwiz.log`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

const LOG_FILE_NAME: &str = "eventwiz.log";

/// Errors that can occur while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log directory or file could not be created.
    #[error("cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configured filter directive is invalid.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
}

/// Resolves the log directory: the configured override, else the platform
/// data directory. `None` when neither is available.
pub fn log_dir(config: &Config) -> Option<PathBuf> {
    config
        .log_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|dir| dir.join("eventwiz")))
}

/// Creates `dir` if needed and opens the log file in append mode.
pub fn open_log_file(dir: &Path) -> Result<File, LoggingError> {
    let path = dir.join(LOG_FILE_NAME);
    fs::create_dir_all(dir)
        .and_then(|()| OpenOptions::new().create(true).append(true).open(&path))
        .map_err(|source| LoggingError::Open { path, source })
}

/// Installs the global subscriber. Returns the log file path, or `None` if no
/// log directory could be determined, in which case logging stays disabled.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(config: &Config) -> Result<Option<PathBuf>, LoggingError> {
    let Some(dir) = log_dir(config) else {
        return Ok(None);
    };
    let file = open_log_file(&dir)?;
    let filter = EnvFilter::try_new(&config.log_filter)?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();
    // A subscriber may already be installed (e.g. by an embedding test harness).
    let _ = tracing::subscriber::set_global_default(subscriber);

    Ok(Some(dir.join(LOG_FILE_NAME)))
}
