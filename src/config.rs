//! Runtime configuration read from the environment.

use std::path::PathBuf;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::model::{Currency, CurrencyError};

/// Default currency for new drafts, as an ISO code.
pub const CURRENCY_ENV: &str = "EVENTWIZ_CURRENCY";
/// Tracing filter directive, e.g. `debug` or `eventwiz=trace`.
pub const LOG_FILTER_ENV: &str = "EVENTWIZ_LOG";
/// Directory for the log file, overriding the platform data directory.
pub const LOG_DIR_ENV: &str = "EVENTWIZ_LOG_DIR";

const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("EVENTWIZ_CURRENCY: {0}")]
    Currency(#[from] CurrencyError),

    #[error("EVENTWIZ_LOG: invalid filter {filter:?}: {message}")]
    LogFilter { filter: String, message: String },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub default_currency: Currency,
    pub log_filter: String,
    /// `None` means the platform data directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_currency: Currency::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`. Unset or blank values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(code) = get(CURRENCY_ENV) {
            config.default_currency = code.parse()?;
        }
        if let Some(filter) = get(LOG_FILTER_ENV) {
            EnvFilter::try_new(&filter).map_err(|e| ConfigError::LogFilter {
                filter: filter.clone(),
                message: e.to_string(),
            })?;
            config.log_filter = filter;
        }
        if let Some(dir) = get(LOG_DIR_ENV) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        Ok(config)
    }
}
