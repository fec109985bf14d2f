//! # Exposure Frame
//!
//! Dataframe implementation of the counterparty exposure report.
//!
//! This crate computes the same report as the in-memory pipeline in
//! `exposure-core`, but expressed against the polars lazy API: CSV scan,
//! inner join on counter_party, then a stable group-by per report key.
//! The collected aggregates flow through the shared formatter from
//! `exposure-core` and the writer from `exposure-ext-file`, so both
//! implementations produce identical CSV reports.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod pipeline;

pub use error::{FrameError, FrameResult};
pub use pipeline::run_frame_report;
