//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Counterparty exposure reporting.
#[derive(Parser)]
#[command(name = "exposure", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the in-memory pipeline (typed records, explicit fan-out).
    Run(RunArgs),

    /// Run the polars dataframe pipeline.
    Frame(RunArgs),
}

/// Arguments shared by both report engines.
///
/// Defaults read `dataset1.csv` and `dataset2.csv` from the working
/// directory and append to `output.csv`.
#[derive(Args)]
pub struct RunArgs {
    /// Invoice dataset (counter_party, legal_entity, rating, value, status).
    #[arg(long, default_value = "dataset1.csv")]
    pub dataset1: PathBuf,

    /// Counterparty tier dataset (counter_party, tier).
    #[arg(long, default_value = "dataset2.csv")]
    pub dataset2: PathBuf,

    /// Report output file.
    #[arg(long, default_value = "output.csv")]
    pub output: PathBuf,

    /// Truncate the output file before writing instead of appending.
    #[arg(long)]
    pub truncate: bool,

    /// Fan the group-key aggregations out across threads (in-memory engine
    /// only; requires a build with the `parallel` feature, otherwise a
    /// no-op).
    #[arg(long)]
    pub parallel: bool,
}
