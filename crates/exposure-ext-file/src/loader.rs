//! CSV loaders for the two input datasets.
//!
//! Rows are deserialized into raw string form first, then validated into
//! the typed records of `exposure-core`. Validation is strict: a row with
//! the wrong field count or a non-integer rating/value aborts the load;
//! nothing is silently skipped.

use std::path::Path;

use serde::Deserialize;

use exposure_core::{ExposureError, InvoiceRecord, Status, TierRecord};

use crate::error::{FileError, FileResult};

/// Raw CSV row for dataset 1, before validation.
#[derive(Debug, Deserialize)]
struct RawInvoiceRow {
    counter_party: String,
    legal_entity: String,
    rating: String,
    value: String,
    status: String,
}

/// Raw CSV row for dataset 2, before validation.
#[derive(Debug, Deserialize)]
struct RawTierRow {
    counter_party: String,
    tier: String,
}

/// Loads the invoice dataset from a headered CSV file.
///
/// # Errors
///
/// Returns [`FileError::Io`] if the file is missing or unreadable, and a
/// format error (wrapped [`ExposureError::Format`]) for a row with the
/// wrong field count or a non-integer `rating`/`value`.
pub fn load_invoices(path: impl AsRef<Path>) -> FileResult<Vec<InvoiceRecord>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| open_error(path, e))?;

    let mut records = Vec::new();
    for (i, result) in reader.deserialize().enumerate() {
        let row = i + 2; // 1-based; the header is row 1
        let raw: RawInvoiceRow = result.map_err(|e| row_error(path, row, e))?;
        records.push(InvoiceRecord {
            counter_party: raw.counter_party,
            legal_entity: raw.legal_entity,
            rating: parse_int(&raw.rating, "rating", row)?,
            value: parse_int(&raw.value, "value", row)?,
            status: Status::parse(&raw.status),
        });
    }

    log::info!("loaded {} invoice(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Loads the counterparty tier dataset from a headered CSV file.
///
/// # Errors
///
/// Returns [`FileError::Io`] if the file is missing or unreadable, and a
/// format error for a row with the wrong field count.
pub fn load_tiers(path: impl AsRef<Path>) -> FileResult<Vec<TierRecord>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|e| open_error(path, e))?;

    let mut records = Vec::new();
    for (i, result) in reader.deserialize().enumerate() {
        let row = i + 2;
        let raw: RawTierRow = result.map_err(|e| row_error(path, row, e))?;
        records.push(TierRecord {
            counter_party: raw.counter_party,
            tier: raw.tier,
        });
    }

    log::info!(
        "loaded {} tier record(s) from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

fn parse_int(text: &str, field: &str, row: usize) -> FileResult<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| ExposureError::format(row, format!("non-integer {field}: {text:?}")).into())
}

fn open_error(path: &Path, err: csv::Error) -> FileError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => FileError::io(path, source),
        _ => FileError::csv(path, message),
    }
}

fn row_error(path: &Path, row: usize, err: csv::Error) -> FileError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => FileError::io(path, source),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => ExposureError::format(row, format!("expected {expected_len} fields, found {len}"))
            .into(),
        _ => ExposureError::format(row, message).into(),
    }
}
