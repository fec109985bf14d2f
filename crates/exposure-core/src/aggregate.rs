//! Grouped aggregation of joined records.
//!
//! For a given group key, records are partitioned by the tuple of values at
//! the key's attributes, and each partition is reduced to a count, a maximum
//! rating, and two status-conditional value sums.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ExposureError, ExposureResult};
use crate::types::{GroupKey, JoinedRecord, Status};

/// Aggregates for one distinct key-value combination of a group key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// The partition's key values, aligned with the group key's attributes.
    pub key_values: Vec<String>,
    /// Number of records in the partition.
    pub total: usize,
    /// Maximum `rating` across the partition.
    pub max_rating: i64,
    /// Sum of `value` over members with status `ARAP` (0 if none).
    pub sum_arap: i64,
    /// Sum of `value` over members with status `ACCR` (0 if none).
    pub sum_accr: i64,
}

impl AggregateResult {
    fn seed(key_values: Vec<String>, record: &JoinedRecord) -> Self {
        let mut agg = Self {
            key_values,
            total: 0,
            max_rating: i64::MIN,
            sum_arap: 0,
            sum_accr: 0,
        };
        agg.absorb(record);
        agg
    }

    fn absorb(&mut self, record: &JoinedRecord) {
        self.total += 1;
        self.max_rating = self.max_rating.max(record.rating);
        match record.status {
            Status::Arap => self.sum_arap += record.value,
            Status::Accr => self.sum_accr += record.value,
            Status::Other(_) => {}
        }
    }
}

/// Partitions `joined` by `key` and aggregates each partition.
///
/// Partitions appear in order of first appearance of their key values, so
/// the result is deterministic for a given input order. An empty input
/// yields an empty result; it is not an error.
#[must_use]
pub fn aggregate_by(joined: &[JoinedRecord], key: &GroupKey) -> Vec<AggregateResult> {
    let mut index: HashMap<Vec<String>, usize> = HashMap::new();
    let mut results: Vec<AggregateResult> = Vec::new();

    for record in joined {
        let key_values: Vec<String> = key
            .attrs()
            .iter()
            .map(|attr| record.attr(*attr).to_string())
            .collect();

        match index.get(&key_values) {
            Some(&slot) => results[slot].absorb(record),
            None => {
                index.insert(key_values.clone(), results.len());
                results.push(AggregateResult::seed(key_values, record));
            }
        }
    }

    log::debug!(
        "group key [{key}]: {} partition(s) over {} record(s)",
        results.len(),
        joined.len()
    );

    results
}

/// Aggregates a single, already-partitioned group of records.
///
/// All records are assumed to share the same values at the key's attributes;
/// the key values are taken from the first record.
///
/// # Errors
///
/// Returns [`ExposureError::EmptyGroup`] if `records` is empty. This cannot
/// occur for partitions produced by [`aggregate_by`], which only creates a
/// partition when a record lands in it.
pub fn aggregate_partition(
    key: &GroupKey,
    records: &[&JoinedRecord],
) -> ExposureResult<AggregateResult> {
    let first = records
        .first()
        .ok_or_else(|| ExposureError::empty_group(key.label()))?;

    let key_values: Vec<String> = key
        .attrs()
        .iter()
        .map(|attr| first.attr(*attr).to_string())
        .collect();

    let mut agg = AggregateResult::seed(key_values, first);
    for record in &records[1..] {
        agg.absorb(record);
    }
    Ok(agg)
}
