//! TOML configuration schema types for the widget dashboard.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so any subset of keys (including an empty file)
//! is a valid configuration.
//!
//! Duration fields use human-readable strings (e.g. `"250ms"`, `"3s"`)
//! parsed by the `humantime` crate through the typed accessors below.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [tui]
/// [dashboard]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terminal UI behavior.
    pub tui: TuiConfig,
    /// Dashboard data source.
    pub dashboard: DashboardConfig,
    /// Log filtering and destination.
    pub logging: LoggingConfig,
}

impl Config {
    /// Checks every field that `serde` cannot validate on its own.
    ///
    /// # Errors
    ///
    /// Returns the first invalid duration or out-of-range value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tui.tick_rate()?;
        self.tui.status_timeout()?;
        if self.tui.columns == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tui.columns",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TUI
// ---------------------------------------------------------------------------

/// TUI configuration from the `[tui]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Redraw tick rate (e.g. `"250ms"`).
    pub tick_rate: String,
    /// Number of widget cards per row.
    pub columns: u16,
    /// How long a footer status message stays visible (e.g. `"3s"`).
    pub status_timeout: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
            columns: 3,
            status_timeout: "3s".to_string(),
        }
    }
}

impl TuiConfig {
    /// Parsed `tick_rate`.
    pub fn tick_rate(&self) -> Result<Duration, ConfigError> {
        parse_duration("tui.tick_rate", &self.tick_rate)
    }

    /// Parsed `status_timeout`.
    pub fn status_timeout(&self) -> Result<Duration, ConfigError> {
        parse_duration("tui.status_timeout", &self.status_timeout)
    }
}

fn parse_duration(field: &'static str, value: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(value).map_err(|e| ConfigError::InvalidDuration {
        field,
        value: value.to_string(),
        message: e.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Dashboard data configuration from the `[dashboard]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// JSON seed file replacing the built-in dashboard. Empty means built-in.
    pub seed_file: String,
}

impl DashboardConfig {
    /// Seed file path with `~` expanded, or `None` for the built-in seed.
    pub fn seed_path(&self) -> Option<PathBuf> {
        if self.seed_file.trim().is_empty() {
            None
        } else {
            Some(xdg::expand_tilde(&self.seed_file))
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Logging configuration from the `[logging]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Verbosity used when `WDASH_LOG` is unset.
    pub level: LogLevel,
    /// Log file path. Empty means stderr for CLI commands and no logging
    /// for the TUI.
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: String::new(),
        }
    }
}

impl LoggingConfig {
    /// Log file path with `~` expanded, or `None` when unset.
    pub fn file_path(&self) -> Option<PathBuf> {
        if self.file.trim().is_empty() {
            None
        } else {
            Some(xdg::expand_tilde(&self.file))
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_config_all_fields() {
        let toml_str = r#"
[tui]
tick_rate = "100ms"
columns = 2
status_timeout = "5s"

[dashboard]
seed_file = "/srv/dashboard.json"

[logging]
level = "debug"
file = "/var/log/wdash.log"
"#;
        let config: Config = toml::from_str(toml_str).expect("valid TOML should parse");
        assert_eq!(config.tui.tick_rate, "100ms");
        assert_eq!(config.tui.columns, 2);
        assert_eq!(config.tui.status_timeout, "5s");
        assert_eq!(
            config.dashboard.seed_path(),
            Some(PathBuf::from("/srv/dashboard.json"))
        );
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(
            config.logging.file_path(),
            Some(PathBuf::from("/var/log/wdash.log"))
        );
    }

    #[test]
    fn parse_empty_string_uses_all_defaults() {
        let config: Config = toml::from_str("").expect("empty string should parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_unknown_fields_are_ignored() {
        let toml_str = r#"
unknown_key = "hello"

[tui]
future_field = 42
"#;
        let config: Config = toml::from_str(toml_str).expect("unknown fields should be ignored");
        assert_eq!(config.tui.columns, 3);
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.tui.tick_rate().expect("valid"), Duration::from_millis(250));
        assert_eq!(config.tui.status_timeout().expect("valid"), Duration::from_secs(3));
        assert_eq!(config.tui.columns, 3);
        assert_eq!(config.dashboard.seed_path(), None);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.file_path(), None);
    }

    #[test]
    fn log_level_all_variants() {
        for (input, expected) in [
            ("error", LogLevel::Error),
            ("warn", LogLevel::Warn),
            ("info", LogLevel::Info),
            ("debug", LogLevel::Debug),
            ("trace", LogLevel::Trace),
        ] {
            let toml_str = format!("level = \"{}\"", input);
            let logging: LoggingConfig =
                toml::from_str(&toml_str).expect("log level should parse");
            assert_eq!(logging.level, expected);
            assert_eq!(logging.level.as_directive(), input);
        }
    }

    #[test]
    fn invalid_log_level_returns_error() {
        let result: Result<LoggingConfig, _> = toml::from_str(r#"level = "verbose""#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_bad_tick_rate() {
        let mut config = Config::default();
        config.tui.tick_rate = "fast".to_string();
        match config.validate() {
            Err(ConfigError::InvalidDuration { field, value, .. }) => {
                assert_eq!(field, "tui.tick_rate");
                assert_eq!(value, "fast");
            }
            other => panic!("expected InvalidDuration, got: {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_zero_columns() {
        let mut config = Config::default();
        config.tui.columns = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "tui.columns",
                ..
            })
        ));
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn blank_seed_file_means_builtin() {
        let dashboard = DashboardConfig {
            seed_file: "   ".to_string(),
        };
        assert_eq!(dashboard.seed_path(), None);
    }

    #[test]
    fn roundtrip_serialize_deserialize() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("serialization should succeed");
        let parsed: Config = toml::from_str(&toml_str).expect("roundtrip should parse");
        assert_eq!(config, parsed);
    }
}
