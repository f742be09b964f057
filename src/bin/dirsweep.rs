//! Dirsweep CLI Binary
//!
//! Prints the size of the smallest directory whose deletion frees enough space.

use anyhow::Context;
use clap::Parser;
use dirsweep::logging::init_logging;
use dirsweep::tooling::cli::{Cli, CliContext};
use std::path::PathBuf;
use std::process;
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let context = CliContext::new(cli.config.clone(), PathBuf::from("."))
        .context("failed to load configuration")?;

    let mut logging = context.config().logging.clone();
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    init_logging(Some(&logging)).context("failed to initialize logging")?;
    debug!(
        source = ?context.config_source(),
        config = ?context.config(),
        "configuration loaded"
    );

    context
        .execute(cli)
        .with_context(|| format!("failed to analyze {}", cli.input.display()))
}
