//! # Exposure Core
//!
//! Core types and aggregation logic for counterparty exposure reporting.
//!
//! This crate implements the in-memory pipeline: join invoice records
//! against counterparty tier reference data, then compute grouped
//! aggregates (count, max rating, status-conditional value sums) for each
//! of the 7 standard group keys over {legal_entity, counter_party, tier},
//! formatted as rows of a fixed 6-column report.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: no I/O here; loading and writing live in
//!   `exposure-ext-file`
//! - **Typed records**: malformed data fails at load time, not mid-aggregation
//! - **Deterministic output**: partition order follows first appearance,
//!   report sections follow key enumeration order, parallel or not
//!
//! ## Example
//!
//! ```rust
//! use exposure_core::prelude::*;
//!
//! let invoices = vec![InvoiceRecord {
//!     counter_party: "CP1".to_string(),
//!     legal_entity: "LE1".to_string(),
//!     rating: 5,
//!     value: 100,
//!     status: Status::Arap,
//! }];
//! let tiers = vec![TierRecord {
//!     counter_party: "CP1".to_string(),
//!     tier: "T1".to_string(),
//! }];
//!
//! let joined = inner_join(&invoices, &tiers);
//! let rows = run_report(&joined, &GroupKey::report_set(), &ReportConfig::default());
//! assert_eq!(rows.len(), 7); // one partition per group key
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]

pub mod aggregate;
pub mod error;
pub mod join;
pub mod parallel;
pub mod report;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregate::{aggregate_by, aggregate_partition, AggregateResult};
    pub use crate::error::{ExposureError, ExposureResult};
    pub use crate::join::inner_join;
    pub use crate::report::{run_report, OutputRow, REPORT_COLUMNS};
    pub use crate::types::{
        GroupAttr, GroupKey, InvoiceRecord, JoinedRecord, ReportConfig, Status, TierRecord,
    };
}

// Re-export commonly used items at crate root
pub use aggregate::{aggregate_by, aggregate_partition, AggregateResult};
pub use error::{ExposureError, ExposureResult};
pub use join::inner_join;
pub use report::{run_report, OutputRow, REPORT_COLUMNS};
pub use types::{GroupAttr, GroupKey, InvoiceRecord, JoinedRecord, ReportConfig, Status, TierRecord};
