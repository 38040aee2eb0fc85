#![forbid(unsafe_code)]

//! Patcheck: static detection of invalid constant patterns in Go source
//!
//! Patcheck inspects call expressions in Go files, filters them against a
//! table of pattern-consuming standard library functions (`regexp.Compile`
//! and friends), resolves compile-time-constant string arguments, and reports
//! a finding when the resolved pattern fails to compile.

pub mod checker;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod types;
pub mod validate;

// Re-export error types for convenient access
pub use error::{CheckError, ConfigError, PatcheckError};

// Re-export core domain types for convenient access
pub use checker::ConstantPatternChecker;
pub use config::Config;
pub use types::{Finding, FunctionSignature, SignatureTable, ValidatorKind};
