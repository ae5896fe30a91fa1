//! Search configuration.

use crate::search::MoveOrdering;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::Display as FmtDisplay;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a search.
///
/// Every field has a default, so an empty TOML document is valid.
///
/// ```toml
/// [ordering]
/// kind = "shuffled"
/// seed = 42
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Order in which each node visits its legal actions.
    ordering: MoveOrdering,
}

impl SearchConfig {
    /// Creates a configuration with the given move ordering.
    #[instrument]
    pub fn new(ordering: MoveOrdering) -> Self {
        Self { ordering }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::read)?;

        let config = Self::from_toml_str(&content)?;
        info!(ordering = ?config.ordering, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::parse)
    }
}

/// Stage at which loading a search configuration failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// The config file could not be read.
    #[display("Failed to read config file")]
    Read,
    /// The TOML did not describe a valid search configuration.
    #[display("Failed to parse config")]
    Parse,
}

/// Search configuration error with location tracking.
#[derive(Debug, Clone, Display, Error, Getters)]
#[display("Search config error: {}: {} at {}:{}", kind, message, file, line)]
pub struct ConfigError {
    /// Which stage failed.
    kind: ConfigErrorKind,
    /// Underlying cause as text.
    message: String,
    /// Line number where error occurred.
    line: u32,
    /// Source file where error occurred.
    #[getter(skip)]
    file: &'static str,
}

impl ConfigError {
    /// Source file where error occurred.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// The config file could not be read.
    #[track_caller]
    pub fn read(err: impl FmtDisplay) -> Self {
        Self::new(ConfigErrorKind::Read, err.to_string())
    }

    /// The config text is not a valid search configuration.
    #[track_caller]
    pub fn parse(err: impl FmtDisplay) -> Self {
        Self::new(ConfigErrorKind::Parse, err.to_string())
    }
}
