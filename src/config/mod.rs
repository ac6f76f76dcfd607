//! Configuration management for senex.
//!
//! Settings are read from a TOML file. The file is located, in order, by the
//! `--config` flag, the `SENEX_CONFIG` environment variable, or the platform
//! config directory (`<config_dir>/senex/config.toml`).

mod settings;

use std::path::PathBuf;

use thiserror::Error;

pub use settings::Settings;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "SENEX_CONFIG";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`Settings`].
    #[error("failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A setting has an invalid value.
    #[error("invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Get the default configuration file path.
///
/// Honors `SENEX_CONFIG` before falling back to the platform config directory.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let base_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base_dir.join("senex").join("config.toml"))
}
