//! Exposure CLI - counterparty exposure reporting.
//!
//! # Usage
//!
//! ```bash
//! # In-memory pipeline with the default dataset paths
//! exposure run
//!
//! # Dataframe pipeline with explicit paths, truncating the old report
//! exposure frame --dataset1 invoices.csv --dataset2 tiers.csv \
//!     --output report.csv --truncate
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => commands::run::execute(args)?,
        Commands::Frame(args) => commands::frame::execute(args)?,
    }

    Ok(())
}
