#![forbid(unsafe_code)]

//! Parallel execution of the checker across discovered files
//!
//! Each file is an independent check invocation: the checker is stateless,
//! so files run in parallel under rayon and the merged finding list is
//! sorted by (file, line, column) afterwards for a deterministic report.
//! A structural error in any file fails the whole run.

use crate::checker::ConstantPatternChecker;
use crate::config::Config;
use crate::error::PatcheckError;
use crate::types::Finding;
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Result of checking all discovered files
#[derive(Debug)]
pub struct ExecutionResult {
    /// All findings, sorted by file, line, column
    pub findings: Vec<Finding>,
    /// Number of files checked
    pub files_checked: usize,
}

/// Runs the checker over a set of files under one configuration
pub struct Executor {
    config: Config,
    checker: ConstantPatternChecker,
}

impl Executor {
    /// Creates an executor for the given configuration
    pub fn new(config: Config) -> Self {
        Executor {
            config,
            checker: ConstantPatternChecker::new(),
        }
    }

    /// Checks every file, in parallel, and merges the findings
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable or unparseable file; pattern compile
    /// failures are findings, never errors.
    pub fn execute(&self, files: Vec<PathBuf>) -> Result<ExecutionResult, PatcheckError> {
        let files_checked = files.len();

        let per_file: Vec<Vec<Finding>> = files
            .par_iter()
            .map(|path| -> Result<Vec<Finding>, PatcheckError> {
                let source = fs::read_to_string(path)?;
                Ok(self.checker.check(path, &source, &self.config.table)?)
            })
            .collect::<Result<_, _>>()?;

        let mut findings: Vec<Finding> = per_file.into_iter().flatten().collect();
        findings.sort();

        Ok(ExecutionResult {
            findings,
            files_checked,
        })
    }
}
