//! The in-memory report engine.

use anyhow::Result;

use exposure_core::{inner_join, run_report, GroupKey, ReportConfig};
use exposure_ext_file::{load_invoices, load_tiers};

use crate::cli::RunArgs;
use crate::commands::make_writer;

/// Executes the typed in-memory pipeline.
pub fn execute(args: RunArgs) -> Result<()> {
    let invoices = load_invoices(&args.dataset1)?;
    let tiers = load_tiers(&args.dataset2)?;
    let joined = inner_join(&invoices, &tiers);

    let config = if args.parallel {
        ReportConfig::default()
    } else {
        ReportConfig::sequential()
    };
    let rows = run_report(&joined, &GroupKey::report_set(), &config);

    make_writer(&args)?.append(&rows)?;
    tracing::info!(
        rows = rows.len(),
        output = %args.output.display(),
        "report written"
    );
    Ok(())
}
