//! Error types for the Exposure library.
//!
//! This module defines the error types used throughout Exposure,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Exposure operations.
pub type ExposureResult<T> = Result<T, ExposureError>;

/// The main error type for Exposure operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExposureError {
    /// A record could not be parsed into its typed form.
    #[error("Malformed record at row {row}: {reason}")]
    Format {
        /// 1-based row number in the source file (the header is row 1).
        row: usize,
        /// Description of what was malformed.
        reason: String,
    },

    /// An aggregation was requested over an empty group.
    #[error("Cannot aggregate an empty group for key [{key}]")]
    EmptyGroup {
        /// Label of the group key being aggregated.
        key: String,
    },

    /// A group key definition was invalid.
    #[error("Invalid group key: {reason}")]
    InvalidGroupKey {
        /// Description of what's invalid.
        reason: String,
    },
}

impl ExposureError {
    /// Creates a format error for a malformed record.
    #[must_use]
    pub fn format(row: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            row,
            reason: reason.into(),
        }
    }

    /// Creates an empty group error.
    #[must_use]
    pub fn empty_group(key: impl Into<String>) -> Self {
        Self::EmptyGroup { key: key.into() }
    }

    /// Creates an invalid group key error.
    #[must_use]
    pub fn invalid_group_key(reason: impl Into<String>) -> Self {
        Self::InvalidGroupKey {
            reason: reason.into(),
        }
    }
}
