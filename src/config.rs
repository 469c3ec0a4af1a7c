//! Logging configuration.

use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

use crate::error::{EkhoError, Result};

/// Environment variable naming the log file.
pub const LOG_FILE_VAR: &str = "EKHO_LOG_FILE";
/// Environment variable holding the maximum log level.
pub const LOG_LEVEL_VAR: &str = "EKHO_LOG_LEVEL";

/// Where diagnostics go and how verbose they are.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub path: PathBuf,
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("ekho.log"),
            level: LevelFilter::Debug,
        }
    }
}

impl LogConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Read `EKHO_LOG_FILE` and `EKHO_LOG_LEVEL`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(LOG_FILE_VAR).filter(|p| !p.trim().is_empty()) {
            config.path = PathBuf::from(path);
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.level = LevelFilter::from_str(level.trim())
                .map_err(|_| EkhoError::InvalidLevel(level.clone()))?;
        }

        Ok(config)
    }
}
