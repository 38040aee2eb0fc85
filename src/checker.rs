#![forbid(unsafe_code)]

//! The constant-pattern checker

mod bindings;
mod constant_pattern;

pub use constant_pattern::ConstantPatternChecker;
