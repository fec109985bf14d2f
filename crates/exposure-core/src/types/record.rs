//! Typed record structs for the two input datasets and their join.
//!
//! The upstream feed is schemaless; these types pin the known fields down
//! at load time so malformed data fails early rather than at an arbitrary
//! aggregation point.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::GroupAttr;

/// Invoice status category.
///
/// Only `ARAP` and `ACCR` participate in the conditional value sums; any
/// other value is preserved verbatim and simply excluded from both sums.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Accounts receivable / accounts payable.
    Arap,
    /// Accrual.
    Accr,
    /// Any other status value, preserved as-is.
    Other(String),
}

impl Status {
    /// Parses a status value. Never fails; unknown values become `Other`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "ARAP" => Self::Arap,
            "ACCR" => Self::Accr,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Arap => "ARAP",
            Self::Accr => "ACCR",
            Self::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of dataset 1: an invoice-level exposure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Counterparty identifier; the join key against the tier dataset.
    pub counter_party: String,
    /// Legal entity that booked the invoice.
    pub legal_entity: String,
    /// Credit rating, an integer.
    pub rating: i64,
    /// Invoice value, an integer.
    pub value: i64,
    /// Status category.
    pub status: Status,
}

/// One row of dataset 2: counterparty reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRecord {
    /// Counterparty identifier.
    pub counter_party: String,
    /// Tier assigned to the counterparty.
    pub tier: String,
}

/// An invoice enriched with the tier of its counterparty.
///
/// Produced by the inner join: the `tier` comes from the *first* tier record
/// sharing the invoice's counter_party. Invoices with no matching tier
/// record do not appear as joined records at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedRecord {
    /// Counterparty identifier.
    pub counter_party: String,
    /// Legal entity that booked the invoice.
    pub legal_entity: String,
    /// Tier copied from the counterparty reference data.
    pub tier: String,
    /// Credit rating.
    pub rating: i64,
    /// Invoice value.
    pub value: i64,
    /// Status category.
    pub status: Status,
}

impl JoinedRecord {
    /// Returns the value of one of the three groupable attributes.
    #[must_use]
    pub fn attr(&self, attr: GroupAttr) -> &str {
        match attr {
            GroupAttr::LegalEntity => &self.legal_entity,
            GroupAttr::CounterParty => &self.counter_party,
            GroupAttr::Tier => &self.tier,
        }
    }
}
