//! Domain types for exposure reporting.

mod config;
mod group_key;
mod record;

pub use config::ReportConfig;
pub use group_key::{GroupAttr, GroupKey};
pub use record::{InvoiceRecord, JoinedRecord, Status, TierRecord};
