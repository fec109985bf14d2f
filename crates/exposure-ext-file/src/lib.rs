//! # Exposure Ext File
//!
//! File-based edges of the exposure reporting pipeline.
//!
//! This crate provides the CSV adapters around `exposure-core`:
//! - Strict, typed CSV loaders for the invoice and tier datasets
//! - The appending CSV report writer (header written only once)
//!
//! The core crate stays pure; everything that touches the filesystem
//! lives here.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod loader;
mod writer;

pub use error::{FileError, FileResult};
pub use loader::{load_invoices, load_tiers};
pub use writer::ReportWriter;
