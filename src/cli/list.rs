#![forbid(unsafe_code)]

//! List command implementation
//!
//! Prints the active signature table so a run's scope is inspectable.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_CLEAN, EXIT_ERROR};
use crate::types::FunctionSignature;
use serde::Serialize;
use std::path::Path;

/// Run the list command
pub fn run_list(format: OutputFormat, config: Option<&Path>) -> i32 {
    let config = match super::common::load_config(config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_ERROR;
        }
    };

    match format {
        OutputFormat::Human => {
            for sig in config.table.iter() {
                println!(
                    "{}  arg {}  {}{}",
                    sig.qualified_name(),
                    sig.arg,
                    sig.validator,
                    if sig.deny_empty { "  deny-empty" } else { "" }
                );
            }
        }
        OutputFormat::Jsonl => {
            for sig in config.table.iter() {
                if let Ok(json) = serde_json::to_string(&SignatureRecord::from(sig)) {
                    println!("{}", json);
                }
            }
        }
    }

    EXIT_CLEAN
}

/// Signature record for JSONL output
#[derive(Debug, Serialize)]
struct SignatureRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    package: &'a str,
    function: &'a str,
    arg: usize,
    validator: String,
    deny_empty: bool,
}

impl<'a> From<&'a FunctionSignature> for SignatureRecord<'a> {
    fn from(sig: &'a FunctionSignature) -> Self {
        SignatureRecord {
            record_type: "signature",
            package: &sig.package,
            function: &sig.function,
            arg: sig.arg,
            validator: sig.validator.to_string(),
            deny_empty: sig.deny_empty,
        }
    }
}
