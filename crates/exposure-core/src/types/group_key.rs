//! Group key definitions for the report.
//!
//! A group key is an ordered tuple of 1-3 distinct attributes drawn from
//! {legal_entity, counter_party, tier}. The report runs a fixed set of 7
//! keys; their enumeration order defines the order of the report sections.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ExposureError, ExposureResult};

/// One of the three attributes a report can group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupAttr {
    /// The booking legal entity.
    LegalEntity,
    /// The counterparty identifier.
    CounterParty,
    /// The counterparty tier.
    Tier,
}

impl GroupAttr {
    /// All groupable attributes, in report column order.
    pub const ALL: [GroupAttr; 3] = [Self::LegalEntity, Self::CounterParty, Self::Tier];

    /// Returns the column name used in the input and output files.
    #[must_use]
    pub fn column_name(self) -> &'static str {
        match self {
            Self::LegalEntity => "legal_entity",
            Self::CounterParty => "counter_party",
            Self::Tier => "tier",
        }
    }
}

impl fmt::Display for GroupAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// An ordered, non-empty set of 1-3 distinct grouping attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    attrs: Vec<GroupAttr>,
}

impl GroupKey {
    /// Creates a group key from an ordered list of attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ExposureError::InvalidGroupKey`] if the list is empty or
    /// contains a duplicate attribute.
    pub fn new(attrs: impl Into<Vec<GroupAttr>>) -> ExposureResult<Self> {
        let attrs = attrs.into();
        if attrs.is_empty() {
            return Err(ExposureError::invalid_group_key("no attributes"));
        }
        for (i, attr) in attrs.iter().enumerate() {
            if attrs[..i].contains(attr) {
                return Err(ExposureError::invalid_group_key(format!(
                    "duplicate attribute {attr}"
                )));
            }
        }
        Ok(Self { attrs })
    }

    /// The attributes of this key, in grouping order.
    #[must_use]
    pub fn attrs(&self) -> &[GroupAttr] {
        &self.attrs
    }

    /// Returns true if `attr` is part of this key.
    #[must_use]
    pub fn contains(&self, attr: GroupAttr) -> bool {
        self.attrs.contains(&attr)
    }

    /// The 7 group keys of the standard report, in enumeration order.
    ///
    /// The report appends its sections in exactly this order:
    /// `[tier]`, `[counter_party]`, `[legal_entity]`,
    /// `[legal_entity, counter_party]`, `[counter_party, tier]`,
    /// `[tier, legal_entity]`, `[legal_entity, counter_party, tier]`.
    #[must_use]
    pub fn report_set() -> Vec<GroupKey> {
        use GroupAttr::{CounterParty, LegalEntity, Tier};
        [
            vec![Tier],
            vec![CounterParty],
            vec![LegalEntity],
            vec![LegalEntity, CounterParty],
            vec![CounterParty, Tier],
            vec![Tier, LegalEntity],
            vec![LegalEntity, CounterParty, Tier],
        ]
        .into_iter()
        .map(|attrs| Self { attrs })
        .collect()
    }

    /// A short label for logs and error messages, e.g. `legal_entity,tier`.
    #[must_use]
    pub fn label(&self) -> String {
        let names: Vec<&str> = self.attrs.iter().map(|a| a.column_name()).collect();
        names.join(",")
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
