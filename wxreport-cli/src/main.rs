//! Binary crate for the `wxreport` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Printing reports to stdout
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` to see them.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run()
}
