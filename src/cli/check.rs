#![forbid(unsafe_code)]

//! Check command implementation
//!
//! Loads configuration, discovers Go files under the given paths, runs the
//! checker over them in parallel, and prints findings in the requested
//! format. Exit code 0 means no findings, 1 means findings were reported,
//! 2 means the run itself failed.

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_CLEAN, EXIT_ERROR, EXIT_FINDINGS};
use crate::engine::{self, ExecutionResult, Executor};
use crate::error::PatcheckError;
use crate::output::{HumanFormatter, JsonlFormatter};
use std::path::{Path, PathBuf};

/// Run the check command
pub fn run_check(
    paths: &[String],
    format: OutputFormat,
    config: Option<&Path>,
    color: ColorChoice,
) -> i32 {
    match run_check_inner(paths, config) {
        Ok(result) => {
            let clean = result.findings.is_empty();
            if let Err(e) = print_result(&result, format, color) {
                eprintln!("Error: {}", e);
                return EXIT_ERROR;
            }
            if clean { EXIT_CLEAN } else { EXIT_FINDINGS }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_check_inner(
    paths: &[String],
    config: Option<&Path>,
) -> Result<ExecutionResult, PatcheckError> {
    let config = super::common::load_config(config)?;

    let roots: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
    let files = engine::discover(&roots, &config.exclude)?;

    if files.is_empty() {
        eprintln!("Warning: No Go files found to check.");
    }

    Executor::new(config).execute(files)
}

fn print_result(
    result: &ExecutionResult,
    format: OutputFormat,
    color: ColorChoice,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => HumanFormatter::new(color.to_termcolor()).print(result),
        OutputFormat::Jsonl => {
            print!("{}", JsonlFormatter::new().format(result));
            Ok(())
        }
    }
}
