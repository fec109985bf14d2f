//! The dataframe report engine.

use anyhow::Result;

use exposure_frame::run_frame_report;

use crate::cli::RunArgs;
use crate::commands::make_writer;

/// Executes the polars dataframe pipeline.
pub fn execute(args: RunArgs) -> Result<()> {
    let rows = run_frame_report(&args.dataset1, &args.dataset2)?;

    make_writer(&args)?.append(&rows)?;
    tracing::info!(
        rows = rows.len(),
        output = %args.output.display(),
        "report written"
    );
    Ok(())
}
