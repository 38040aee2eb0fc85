#![forbid(unsafe_code)]

//! Init command implementation

use crate::cli::common::{EXIT_CLEAN, EXIT_ERROR};
use crate::config::DEFAULT_CONFIG_FILE;
use crate::config::patcheck_toml::STARTER_TOML;
use std::path::Path;

/// Run the init command, writing a starter patcheck.toml
pub fn run_init(force: bool) -> i32 {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() && !force {
        eprintln!(
            "Error: {} already exists (use --force to overwrite)",
            DEFAULT_CONFIG_FILE
        );
        return EXIT_ERROR;
    }

    match std::fs::write(path, STARTER_TOML) {
        Ok(()) => {
            println!("Created {}.", DEFAULT_CONFIG_FILE);
            EXIT_CLEAN
        }
        Err(e) => {
            eprintln!("Error: failed to write {}: {}", DEFAULT_CONFIG_FILE, e);
            EXIT_ERROR
        }
    }
}
