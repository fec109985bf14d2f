//! Error types for the dataframe pipeline.

use thiserror::Error;

use exposure_core::ExposureError;
use exposure_ext_file::FileError;

/// A specialized Result type for dataframe pipeline operations.
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors raised by the polars-based pipeline.
#[derive(Error, Debug)]
pub enum FrameError {
    /// A polars operation failed (scan, cast, join, aggregation).
    #[error("Dataframe error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// A file-level error from the shared loader/writer layer.
    #[error(transparent)]
    File(#[from] FileError),

    /// A core domain error.
    #[error(transparent)]
    Core(#[from] ExposureError),

    /// A collected group-by frame held a null or out-of-range aggregate.
    /// Every partition has at least one member, so this indicates a broken
    /// aggregation rather than empty data.
    #[error("Invalid {column} aggregate at partition {index}")]
    InvalidAggregate {
        /// Name of the offending aggregate column.
        column: String,
        /// 0-based partition row within the collected frame.
        index: usize,
    },
}

impl FrameError {
    /// Creates an invalid aggregate error.
    #[must_use]
    pub fn invalid_aggregate(column: impl Into<String>, index: usize) -> Self {
        Self::InvalidAggregate {
            column: column.into(),
            index,
        }
    }
}
