//! Centralized error types for senex.
//!
//! This module aggregates the errors that can reach the top of the process
//! and maps them to user-facing messages. All error types use `thiserror`.

use thiserror::Error;

use crate::commands::{CommandError, DispatchError};
use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A command failed while being dispatched.
    #[error("{0}")]
    Dispatch(#[from] DispatchError),
}

impl AppError {
    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file exists and is readable.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Dispatch(DispatchError::Lifecycle {
                command,
                phase,
                source,
            }) => match source {
                CommandError::Io(_) => {
                    format!("Command '{}' could not write its output ({}).", command, phase)
                }
                CommandError::Failed(msg) => format!("Command '{}' failed: {}", command, msg),
            },
        }
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_))
            | AppError::Config(ConfigError::ValidationError(_)) => {
                Some("Fix the configuration file or point --config at another one.")
            }
            AppError::Dispatch(_) => Some("Run 'senex commands' to list available commands."),
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
