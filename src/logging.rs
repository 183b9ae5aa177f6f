//! Logging initialization.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `WDASH_LOG` environment variable, falling back to `[logging] level` from
//! the config file.
//!
//! # Usage
//!
//! ```bash
//! # Debug level for one run
//! WDASH_LOG=debug wdash dump
//!
//! # Module-specific filtering
//! WDASH_LOG=widget_dashboard::store=trace,warn wdash dump
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogLevel, LoggingConfig};

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "WDASH_LOG";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// Append to a file.
    File(PathBuf),
    /// No subscriber is installed.
    Silent,
}

impl LogTarget {
    /// Picks the target for a command.
    ///
    /// A configured file always wins. Otherwise interactive commands stay
    /// silent, since stderr output would draw over the terminal UI.
    pub fn for_command(config: &LoggingConfig, interactive: bool) -> Self {
        match config.file_path() {
            Some(path) => LogTarget::File(path),
            None if interactive => LogTarget::Silent,
            None => LogTarget::Stderr,
        }
    }
}

/// Builds the level filter from `WDASH_LOG`, or `level` when the variable is
/// unset or invalid.
pub fn build_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}

/// Initialize the tracing subscriber.
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (should only be
/// called once, at startup).
pub fn init(level: LogLevel, target: LogTarget) -> std::io::Result<()> {
    let filter = build_filter(level);
    match target {
        LogTarget::Silent => {}
        LogTarget::Stderr => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
    }
    Ok(())
}
