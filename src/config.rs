//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_session::DisplayOrder;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_replay.toml";

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set (e.g. `info`, `tictactoe_session=debug`).
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Initial move list order.
    #[serde(default)]
    display_order: DisplayOrder,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_replay.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            display_order: DisplayOrder::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(order = %config.display_order, "Config loaded");
        Ok(config)
    }

    /// Resolves the configuration to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// `dir` is used when present and the defaults otherwise.
    #[instrument(skip(explicit, dir))]
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::from_file(fallback)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with a different initial display order.
    #[must_use]
    pub fn with_display_order(mut self, display_order: DisplayOrder) -> Self {
        self.display_order = display_order;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = AppConfig::from_toml("display_order = \"descending\"").expect("valid toml");
        assert_eq!(config.display_order(), &DisplayOrder::Descending);
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.log_file(), Path::new("tictactoe_replay.log"));
    }

    #[test]
    fn test_bad_order_is_an_error() {
        let err = AppConfig::from_toml("display_order = \"sideways\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
