#![forbid(unsafe_code)]

//! Human-readable output
//!
//! One line per finding in the conventional lint shape
//! `file:line:col: message (function)`, followed by a one-line summary.

use crate::engine::ExecutionResult;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable output formatter
pub struct HumanFormatter {
    color: ColorChoice,
}

impl HumanFormatter {
    /// Creates a formatter with the given color choice
    pub fn new(color: ColorChoice) -> Self {
        HumanFormatter { color }
    }

    /// Prints the result to stdout
    pub fn print(&self, result: &ExecutionResult) -> std::io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color);
        self.write(&mut stdout, result)
    }

    /// Writes the result to any color-capable writer
    pub fn write(
        &self,
        out: &mut dyn WriteColor,
        result: &ExecutionResult,
    ) -> std::io::Result<()> {
        let mut bold = ColorSpec::new();
        bold.set_bold(true);
        let mut red = ColorSpec::new();
        red.set_fg(Some(Color::Red));

        for finding in &result.findings {
            out.set_color(&bold)?;
            write!(
                out,
                "{}:{}:{}:",
                finding.file.display(),
                finding.line,
                finding.column
            )?;
            out.reset()?;
            write!(out, " {} ", finding.message)?;
            out.set_color(&red)?;
            write!(out, "`{}`", finding.pattern)?;
            out.reset()?;
            writeln!(out, " ({})", finding.function)?;
        }

        if result.findings.is_empty() {
            writeln!(out, "No invalid patterns in {} files", result.files_checked)?;
        } else {
            writeln!(
                out,
                "{} invalid patterns in {} files",
                result.findings.len(),
                result.files_checked
            )?;
        }
        Ok(())
    }
}
