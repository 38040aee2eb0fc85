#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! Outputs one JSON object per line in a deterministic order: every finding
//! record (already sorted by file, line, column) followed by one status
//! record.

use crate::engine::ExecutionResult;
use serde::Serialize;
use std::path::PathBuf;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Formats the execution result as JSON Lines
    pub fn format(&self, result: &ExecutionResult) -> String {
        let mut output = String::new();

        for finding in &result.findings {
            let record = FindingRecord {
                record_type: "finding",
                file: finding.file.clone(),
                line: finding.line,
                column: finding.column,
                function: &finding.function,
                pattern: &finding.pattern,
                message: &finding.message,
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        let status = StatusRecord {
            record_type: "status",
            clean: result.findings.is_empty(),
            files_checked: result.files_checked as u64,
            total_findings: result.findings.len() as u64,
        };
        if let Ok(json) = serde_json::to_string(&status) {
            output.push_str(&json);
            output.push('\n');
        }

        output
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Finding record for JSONL output
#[derive(Debug, Serialize)]
struct FindingRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: PathBuf,
    line: u32,
    column: u32,
    function: &'a str,
    pattern: &'a str,
    message: &'a str,
}

/// Status record emitted once at the end of the stream
#[derive(Debug, Serialize)]
struct StatusRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    clean: bool,
    files_checked: u64,
    total_findings: u64,
}
