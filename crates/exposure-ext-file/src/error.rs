//! Error types for file-based loading and writing.

use std::path::PathBuf;

use thiserror::Error;

use exposure_core::ExposureError;

/// A specialized Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised by the CSV adapters.
#[derive(Error, Debug)]
pub enum FileError {
    /// The file could not be opened, read, or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The CSV structure itself was broken (e.g. unreadable header).
    #[error("Malformed CSV in {path}: {message}")]
    Csv {
        /// Path of the offending file.
        path: PathBuf,
        /// Description of the problem.
        message: String,
    },

    /// A row failed typed validation (wrong field count, non-integer
    /// rating/value). Wraps the core format error.
    #[error(transparent)]
    Record(#[from] ExposureError),
}

impl FileError {
    /// Creates an I/O error for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a CSV structure error for `path`.
    #[must_use]
    pub fn csv(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Csv {
            path: path.into(),
            message: message.into(),
        }
    }
}
