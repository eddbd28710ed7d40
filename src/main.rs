//! Repairability - structural repairability scoring for Python codebases
//!
//! Binary entry point: initializes logging, parses arguments, and hands
//! off to the CLI runner.

use anyhow::Result;
use clap::Parser;
use repairability::cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
