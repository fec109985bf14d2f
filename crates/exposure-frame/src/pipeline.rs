//! The polars lazy pipeline.
//!
//! Scan both CSVs, reduce the tier dataset to its first tier per
//! counterparty, inner-join on counter_party, then run one stable group-by
//! per report key. The collected frames are converted back into
//! [`AggregateResult`]s so the shared formatter produces the rows - both
//! pipelines emit byte-identical reports for the same inputs.

use std::path::Path;

use polars::prelude::*;

use exposure_core::{AggregateResult, GroupKey, OutputRow};
use exposure_ext_file::FileError;

use crate::error::{FrameError, FrameResult};

/// Computes the full report from the two CSV datasets with polars.
///
/// Rows come back in key enumeration order with within-key partitions in
/// first-appearance order, matching the in-memory pipeline.
///
/// # Errors
///
/// Returns a file error if an input file is missing, and a polars error if
/// a scan, cast (e.g. non-integer `rating`/`value`), join, or aggregation
/// fails.
pub fn run_frame_report(dataset1: &Path, dataset2: &Path) -> FrameResult<Vec<OutputRow>> {
    let invoices = scan_csv(dataset1)?
        .with_row_index("invoice_seq", None)
        .with_columns([
            col("rating").strict_cast(DataType::Int64),
            col("value").strict_cast(DataType::Int64),
        ]);

    // First tier per counterparty wins, as in the in-memory join.
    let tiers = scan_csv(dataset2)?
        .group_by_stable([col("counter_party")])
        .agg([col("tier").first()]);

    // The join does not guarantee output row order, so restore invoice
    // order explicitly; the stable group-bys below depend on it for
    // first-appearance partition order.
    let joined = invoices
        .join(
            tiers,
            [col("counter_party")],
            [col("counter_party")],
            JoinArgs::new(JoinType::Inner),
        )
        .sort(["invoice_seq"], SortMultipleOptions::default());

    let mut rows = Vec::new();
    for key in GroupKey::report_set() {
        let group_cols: Vec<Expr> = key
            .attrs()
            .iter()
            .map(|attr| col(attr.column_name()))
            .collect();

        let df = joined
            .clone()
            .group_by_stable(group_cols)
            .agg([
                len().alias("total"),
                col("rating").max().alias("max_rating"),
                col("value")
                    .filter(col("status").eq(lit("ARAP")))
                    .sum()
                    .alias("sum_arap"),
                col("value")
                    .filter(col("status").eq(lit("ACCR")))
                    .sum()
                    .alias("sum_accr"),
            ])
            .collect()?;

        log::debug!("group key [{key}]: {} partition(s)", df.height());

        for agg in frame_to_aggregates(&df, &key)? {
            rows.push(OutputRow::from_aggregate(&key, &agg));
        }
    }

    Ok(rows)
}

fn scan_csv(path: &Path) -> FrameResult<LazyFrame> {
    if !path.exists() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        return Err(FileError::io(path, source).into());
    }
    Ok(LazyCsvReader::new(path).with_has_header(true).finish()?)
}

/// Converts one collected group-by frame into aggregate results.
///
/// Key columns are cast to strings so numeric-looking values (a tier of
/// `1`, say) render exactly as the typed pipeline renders them. Every
/// partition has at least one member, so a null aggregate means the
/// group-by itself misbehaved; it is an error, not a zero.
fn frame_to_aggregates(df: &DataFrame, key: &GroupKey) -> FrameResult<Vec<AggregateResult>> {
    let total = df.column("total")?.cast(&DataType::Int64)?;
    let total = total.i64()?;
    let max_rating = df.column("max_rating")?.i64()?;
    let sum_arap = df.column("sum_arap")?.i64()?;
    let sum_accr = df.column("sum_accr")?.i64()?;

    let cell = |column: &Int64Chunked, name: &str, i: usize| -> FrameResult<i64> {
        column
            .get(i)
            .ok_or_else(|| FrameError::invalid_aggregate(name, i))
    };

    let key_columns = key
        .attrs()
        .iter()
        .map(|attr| {
            df.column(attr.column_name())?
                .cast(&DataType::String)
                .map_err(Into::into)
        })
        .collect::<FrameResult<Vec<Series>>>()?;

    let mut results = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let key_values = key
            .attrs()
            .iter()
            .zip(&key_columns)
            .map(|(attr, column)| {
                column
                    .str()?
                    .get(i)
                    .map(str::to_string)
                    .ok_or_else(|| FrameError::invalid_aggregate(attr.column_name(), i))
            })
            .collect::<FrameResult<Vec<String>>>()?;

        results.push(AggregateResult {
            key_values,
            total: usize::try_from(cell(total, "total", i)?)
                .map_err(|_| FrameError::invalid_aggregate("total", i))?,
            max_rating: cell(max_rating, "max_rating", i)?,
            sum_arap: cell(sum_arap, "sum_arap", i)?,
            sum_accr: cell(sum_accr, "sum_accr", i)?,
        });
    }

    Ok(results)
}
