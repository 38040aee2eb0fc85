#![forbid(unsafe_code)]

//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for patcheck commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl ColorChoice {
    /// Maps to the termcolor choice, honoring non-tty stdout in auto mode
    pub fn to_termcolor(self) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Auto => {
                if std::io::IsTerminal::is_terminal(&std::io::stdout()) {
                    termcolor::ColorChoice::Auto
                } else {
                    termcolor::ColorChoice::Never
                }
            }
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// Patcheck CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "patcheck")]
#[command(about = "Flag invalid constant patterns passed to Go's pattern-compiling functions")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Available patcheck subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check Go files for invalid constant patterns
    Check {
        /// Paths to check (defaults to current directory)
        #[arg(default_value = ".")]
        paths: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,

        /// Configuration file (defaults to ./patcheck.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the tracked function signatures
    List {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,

        /// Configuration file (defaults to ./patcheck.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a starter patcheck.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        // Verify that the CLI struct is properly configured
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_defaults() {
        let cli = Cli::parse_from(["patcheck", "check"]);
        match cli.command {
            Command::Check {
                paths,
                format,
                config,
            } => {
                assert_eq!(paths, vec![".".to_string()]);
                assert_eq!(format, OutputFormat::Human);
                assert!(config.is_none());
            }
            _ => panic!("expected check command"),
        }
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_check_with_args() {
        let cli = Cli::parse_from([
            "patcheck", "check", "src", "pkg", "--format", "jsonl", "--config", "p.toml",
        ]);
        match cli.command {
            Command::Check {
                paths,
                format,
                config,
            } => {
                assert_eq!(paths, vec!["src".to_string(), "pkg".to_string()]);
                assert_eq!(format, OutputFormat::Jsonl);
                assert_eq!(config, Some(PathBuf::from("p.toml")));
            }
            _ => panic!("expected check command"),
        }
    }
}
