#![forbid(unsafe_code)]

//! File discovery and parallel check execution

pub mod executor;
pub mod file_walker;

pub use executor::{ExecutionResult, Executor};
pub use file_walker::{FileWalkerError, discover};
