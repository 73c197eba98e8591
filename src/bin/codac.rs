//! codac CLI Binary
//!
//! Command-line interface for the codac document tree and attendance rules.

use clap::Parser;
use codac_core::logging::init_logging;
use codac_core::tooling::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let context = match CliContext::new(cli.workspace.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let logging = cli.logging_overrides(&context.config().logging);
    if !logging.color {
        owo_colors::set_override(false);
    }
    if let Err(e) = init_logging(Some(&logging), cli.log_file.clone(), Some(&cli.workspace)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
