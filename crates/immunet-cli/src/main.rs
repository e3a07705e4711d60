//! `immunet` binary.

mod cli;
mod commands;
mod handler;

use std::process::ExitCode;

use clap::Parser;
use immunet_core::errors::ImmunetErrorCode;
use immunet_core::tracing::init_tracing;

use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version print to stdout and are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing();

    let result = match cli.command {
        Commands::Run(args) => commands::run(args),
        Commands::Generate(command) => commands::generate(command),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}
