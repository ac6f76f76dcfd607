//! Application settings configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{config_path, ConfigError, Result};
use crate::commands::{DEFAULT_COMMAND, FLAG_PREFIX};

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Command run when no command is named on the command line.
    pub default_command: String,
    /// Tracing filter directive used when `RUST_LOG` is not set.
    pub log_filter: Option<String>,
    /// Directory for log files, overriding the platform data directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_command: DEFAULT_COMMAND.to_string(),
            log_filter: None,
            log_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from `explicit`, or from the default location.
    ///
    /// A missing file at the default location yields default settings. A
    /// missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let path = config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load and validate settings from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&contents)?;
        settings.validate()?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(settings)
    }

    /// Validate these settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` if the default command is
    /// blank or looks like a flag.
    pub fn validate(&self) -> Result<()> {
        if self.default_command.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "default_command cannot be empty".to_string(),
            ));
        }

        if self.default_command.trim().starts_with(FLAG_PREFIX) {
            return Err(ConfigError::ValidationError(format!(
                "default_command '{}' cannot start with '{}'",
                self.default_command, FLAG_PREFIX
            )));
        }

        Ok(())
    }

    /// Override the log filter, if one is given.
    pub fn with_log_filter(mut self, filter: Option<String>) -> Self {
        if filter.is_some() {
            self.log_filter = filter;
        }
        self
    }
}
