//! Patcheck CLI entry point

use clap::Parser;
use patcheck::cli::{Cli, Command};
use std::process;

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::Check {
            paths,
            format,
            config,
        } => patcheck::cli::check::run_check(&paths, format, config.as_deref(), cli.color),
        Command::List { format, config } => {
            patcheck::cli::list::run_list(format, config.as_deref())
        }
        Command::Init { force } => patcheck::cli::init::run_init(force),
    };

    process::exit(exit_code);
}
