//! Command implementations.

pub mod frame;
pub mod run;

use anyhow::Result;

use exposure_ext_file::ReportWriter;

use crate::cli::RunArgs;

/// Builds the report writer for a run, honoring `--truncate`.
pub fn make_writer(args: &RunArgs) -> Result<ReportWriter> {
    if args.truncate {
        Ok(ReportWriter::truncate(&args.output)?)
    } else {
        Ok(ReportWriter::append_to(&args.output))
    }
}
