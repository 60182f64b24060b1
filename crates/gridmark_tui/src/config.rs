//! Terminal UI configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "gridmark.toml";

/// Settings for one TUI session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Grid side length.
    #[serde(default = "default_size")]
    size: usize,

    /// Width of one cell in terminal columns.
    #[serde(default = "default_cell_width")]
    cell_width: u16,

    /// Height of one cell in terminal rows.
    #[serde(default = "default_cell_height")]
    cell_height: u16,

    /// Where tracing output goes while the alternate screen is active.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_size() -> usize {
    3
}

fn default_cell_width() -> u16 {
    7
}

fn default_cell_height() -> u16 {
    3
}

fn default_log_file() -> PathBuf {
    PathBuf::from("gridmark_tui.log")
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
            log_file: default_log_file(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the config to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(mut self, size: Option<usize>, log_file: Option<PathBuf>) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }

    /// Checks the cell geometry. Grid size is validated when the grid is built.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_width < 1 || self.cell_height < 1 {
            return Err(ConfigError::new(format!(
                "Cell dimensions must be at least 1x1, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }
        Ok(())
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
