//! logging setup. the CRC result goes to stdout, logs always go to stderr.

use clap::ValueEnum;
use thiserror::Error;
use tracing_subscriber::filter::{EnvFilter, ParseError};

/// env var consulted when no `--log-level` is given
pub const LOG_ENV: &str = "BLOCK_CRC_LOG";

pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    #[error("logging already initialised: {0}")]
    AlreadyInitialized(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// `filter` is the `--log-level` value, which clap already fills from
    /// [`LOG_ENV`]. blank or missing falls back to [`DEFAULT_FILTER`].
    pub fn resolve(filter: Option<String>, format: LogFormat) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        Self { filter, format }
    }

    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        Ok(EnvFilter::try_new(&self.filter)?)
    }

    /// install the global subscriber. a second call reports an error
    /// instead of panicking.
    pub fn init(&self) -> Result<(), ConfigError> {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter()?)
            .with_writer(std::io::stderr);
        let installed = match self.format {
            LogFormat::Text => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
        installed.map_err(|e| ConfigError::AlreadyInitialized(e.to_string()))
    }
}
