//! Inner join of invoices against counterparty tiers.

use std::collections::HashMap;

use crate::types::{InvoiceRecord, JoinedRecord, TierRecord};

/// Inner-joins invoices against tier reference data on `counter_party`.
///
/// Each invoice is enriched with the tier of the *first* tier record sharing
/// its counter_party; later tier records for the same counterparty are
/// ignored (the feed is many-to-one in practice, and multiple tiers per
/// counterparty are not validated). Invoices with no matching tier record
/// are dropped, preserving inner-join semantics; the number of dropped rows
/// is logged as a warning.
///
/// The output preserves the input order of `invoices`.
#[must_use]
pub fn inner_join(invoices: &[InvoiceRecord], tiers: &[TierRecord]) -> Vec<JoinedRecord> {
    // First tier record per counterparty wins.
    let mut tier_by_cp: HashMap<&str, &str> = HashMap::with_capacity(tiers.len());
    for tier in tiers {
        tier_by_cp
            .entry(tier.counter_party.as_str())
            .or_insert(tier.tier.as_str());
    }

    let mut joined = Vec::with_capacity(invoices.len());
    let mut dropped = 0usize;

    for invoice in invoices {
        match tier_by_cp.get(invoice.counter_party.as_str()) {
            Some(tier) => joined.push(JoinedRecord {
                counter_party: invoice.counter_party.clone(),
                legal_entity: invoice.legal_entity.clone(),
                tier: (*tier).to_string(),
                rating: invoice.rating,
                value: invoice.value,
                status: invoice.status.clone(),
            }),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        log::warn!("dropped {dropped} invoice(s) with no matching counterparty tier");
    }
    log::debug!(
        "joined {} of {} invoices against {} tier records",
        joined.len(),
        invoices.len(),
        tiers.len()
    );

    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    fn invoice(cp: &str, le: &str, rating: i64, value: i64, status: &str) -> InvoiceRecord {
        InvoiceRecord {
            counter_party: cp.to_string(),
            legal_entity: le.to_string(),
            rating,
            value,
            status: Status::parse(status),
        }
    }

    fn tier(cp: &str, t: &str) -> TierRecord {
        TierRecord {
            counter_party: cp.to_string(),
            tier: t.to_string(),
        }
    }

    #[test]
    fn test_join_copies_tier() {
        let invoices = vec![
            invoice("CP1", "LE1", 5, 100, "ARAP"),
            invoice("CP1", "LE1", 3, 50, "ACCR"),
        ];
        let tiers = vec![tier("CP1", "T1")];

        let joined = inner_join(&invoices, &tiers);
        assert_eq!(joined.len(), 2);
        assert!(joined.iter().all(|r| r.tier == "T1"));
        assert_eq!(joined[0].rating, 5);
        assert_eq!(joined[1].rating, 3);
    }

    #[test]
    fn test_join_drops_unmatched() {
        let invoices = vec![
            invoice("CP1", "LE1", 5, 100, "ARAP"),
            invoice("CP2", "LE1", 4, 75, "ARAP"),
        ];
        let tiers = vec![tier("CP1", "T1")];

        let joined = inner_join(&invoices, &tiers);
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].counter_party, "CP1");
    }

    #[test]
    fn test_join_first_tier_wins() {
        let invoices = vec![invoice("CP1", "LE1", 5, 100, "ARAP")];
        let tiers = vec![tier("CP1", "Gold"), tier("CP1", "Silver")];

        let joined = inner_join(&invoices, &tiers);
        assert_eq!(joined[0].tier, "Gold");
    }

    #[test]
    fn test_join_preserves_invoice_order() {
        let invoices = vec![
            invoice("CP2", "LE1", 1, 10, "ARAP"),
            invoice("CP1", "LE2", 2, 20, "ACCR"),
            invoice("CP2", "LE3", 3, 30, "ARAP"),
        ];
        let tiers = vec![tier("CP1", "T1"), tier("CP2", "T2")];

        let joined = inner_join(&invoices, &tiers);
        let entities: Vec<&str> = joined.iter().map(|r| r.legal_entity.as_str()).collect();
        assert_eq!(entities, vec!["LE1", "LE2", "LE3"]);
    }

    #[test]
    fn test_join_empty_inputs() {
        assert!(inner_join(&[], &[tier("CP1", "T1")]).is_empty());
        assert!(inner_join(&[invoice("CP1", "LE1", 1, 1, "ARAP")], &[]).is_empty());
    }
}
