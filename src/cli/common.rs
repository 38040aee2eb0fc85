#![forbid(unsafe_code)]

//! Shared helpers for CLI commands

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::ConfigError;
use std::path::Path;

/// No findings
pub const EXIT_CLEAN: i32 = 0;
/// One or more findings reported
pub const EXIT_FINDINGS: i32 = 1;
/// Configuration, I/O, or parse failure
pub const EXIT_ERROR: i32 = 2;

/// Resolves the active configuration
///
/// An explicit --config path must exist; otherwise ./patcheck.toml is loaded
/// when present, and the built-in defaults apply when it is not.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => Config::load(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                Config::load(default)
            } else {
                Ok(Config::default())
            }
        }
    }
}
