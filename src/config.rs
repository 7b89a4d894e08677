//! Widget configuration supplied by the host.
//!
//! The widget takes its configuration explicitly at construction; there
//! is no ambient property bag. The only host-supplied property is a
//! description string rendered as static text above the board.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::instrument;

/// Configuration passed to the widget when it is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(default)]
pub struct WidgetConfig {
    /// Static text rendered above the board.
    description: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            description: "Two players, one board. X goes first.".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Creates a configuration with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Replaces the description, consuming and returning the config.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Errors reading or parsing a configuration file.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum ConfigError {
    /// The file could not be read.
    #[display("failed to read config file: {}", _0)]
    Io(std::io::Error),

    /// The file is not valid TOML for [`WidgetConfig`].
    #[display("failed to parse config file: {}", _0)]
    Parse(toml::de::Error),
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}
