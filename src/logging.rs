//! Logging configuration using the tracing ecosystem.
//!
//! This module configures structured logging with:
//! - File-based output, so stdout stays reserved for command output
//! - Daily log rotation
//! - Environment-based log level configuration

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::config::Settings;

/// Default log level if neither RUST_LOG nor the settings specify one.
const DEFAULT_LOG_FILTER: &str = "senex=info,warn";

/// Initialize the logging system.
///
/// Sets up tracing with:
/// - A daily rotating, non-blocking file appender
/// - Log level from `RUST_LOG`, else `settings.log_filter`, else the default
///
/// The returned guard flushes buffered events when dropped; hold it until the
/// process exits.
///
/// # Log Directory
///
/// `settings.log_dir` if set, otherwise the platform-specific local data
/// directory with `senex/logs` appended (e.g. `~/.local/share/senex/logs/`).
///
/// # Errors
///
/// Returns an error if:
/// - The log directory cannot be determined or created
/// - The tracing subscriber cannot be set
pub fn init(settings: &Settings) -> anyhow::Result<WorkerGuard> {
    let log_dir = match &settings.log_dir {
        Some(dir) => dir.clone(),
        None => get_log_directory()?,
    };
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "senex.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(build_filter(settings.log_filter.as_deref()));

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "senex starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(guard)
}

/// Build the level filter, preferring `RUST_LOG` over `configured`.
///
/// An unparsable directive falls back to the default filter.
fn build_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Get the log directory path.
fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("senex").join("logs"))
}

/// Log application shutdown.
pub fn shutdown() {
    tracing::info!("senex shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_directory_has_expected_structure() {
        let dir = get_log_directory().unwrap();
        assert!(dir.ends_with("senex/logs"));
    }

    #[test]
    #[serial]
    fn test_filter_uses_configured_directive() {
        std::env::remove_var("RUST_LOG");
        let filter = build_filter(Some("senex=debug"));
        assert!(filter.to_string().contains("senex=debug"));
    }

    #[test]
    #[serial]
    fn test_filter_default() {
        std::env::remove_var("RUST_LOG");
        let filter = build_filter(None);
        assert!(filter.to_string().contains("senex=info"));
    }
}
