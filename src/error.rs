//! Error types for patcheck
//!
//! Only structural problems cross the check boundary as failures: a pattern
//! that fails to compile becomes a `Finding`, never an error. This module
//! defines the error hierarchy for everything that is allowed to fail.

use std::path::PathBuf;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid configuration syntax
    #[error("Invalid configuration syntax: {0}")]
    Parse(String),

    /// Invalid configuration value
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors raised while checking a single file
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The source could not be parsed into a well-formed tree
    #[error("Parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// The Go grammar failed to load
    #[error("Failed to load Go grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
}

/// Top-level error type for patcheck
#[derive(Debug, thiserror::Error)]
pub enum PatcheckError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Check error in a source file
    #[error(transparent)]
    Check(#[from] CheckError),

    /// File discovery error
    #[error("File walker error: {0}")]
    Walk(#[from] crate::engine::FileWalkerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
