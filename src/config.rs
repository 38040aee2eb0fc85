#![forbid(unsafe_code)]

//! Configuration loading (patcheck.toml)

pub mod patcheck_toml;

pub use patcheck_toml::{Config, DEFAULT_CONFIG_FILE};
