//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! writes it to the XDG config path for `wdash config init`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Widget Dashboard Configuration
#
# This file was generated by `wdash config init`.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/widget-dashboard/config.toml

# ==============================================================================
# TUI
# ==============================================================================

[tui]

# Redraw tick rate as a human-readable duration.
# Lower values redraw more often and use more CPU.
# Examples: "100ms", "250ms", "1s"
tick_rate = "250ms"

# Number of widget cards per row in each category section.
# Must be at least 1.
columns = 3

# How long a status message (e.g. "Please fill all fields") stays in the
# footer before the keybinding hints return.
# Examples: "2s", "3s", "5s"
status_timeout = "3s"

# ==============================================================================
# Dashboard data
# ==============================================================================

[dashboard]

# JSON file holding the dashboard categories and widgets.
# Empty uses the built-in CSPM / CWPP / registry scan dashboard.
# Tilde (~) is expanded to the user's home directory.
# Example: "~/.config/widget-dashboard/dashboard.json"
seed_file = ""

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Logging verbosity level. The WDASH_LOG environment variable overrides it.
# Options: "error", "warn", "info", "debug", "trace"
level = "info"

# Path to log file.
# Empty means stderr for `dump` and `config`, and no logging for `tui`
# (stderr would draw over the dashboard).
file = ""
"#;

// ---------------------------------------------------------------------------
// File creation
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(path)
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    xdg::ensure_config_dir().map_err(write_err)?;
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_err)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
