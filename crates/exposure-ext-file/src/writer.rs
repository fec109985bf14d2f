//! Appending CSV report writer.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use exposure_core::{OutputRow, REPORT_COLUMNS};

use crate::error::{FileError, FileResult};

/// Writes report rows to a CSV file, appending across invocations.
///
/// The 6-column header is written only when the file is empty, so repeated
/// appends accumulate rows under a single header. All rows of a run go
/// through one writer, which serializes access to the shared output file.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    /// Creates a writer that appends to `path`, creating it if absent.
    #[must_use]
    pub fn append_to(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a writer over a freshly truncated `path`.
    ///
    /// Use this for truncate-then-run semantics: two identical runs against
    /// a truncated file produce identical output.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::Io`] if the file cannot be created.
    pub fn truncate(path: impl Into<PathBuf>) -> FileResult<Self> {
        let path = path.into();
        File::create(&path).map_err(|e| FileError::io(&path, e))?;
        Ok(Self { path })
    }

    /// The output path this writer appends to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `rows` to the report, writing the header first if the file
    /// is currently empty.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::Io`] if the file cannot be opened or written,
    /// [`FileError::Csv`] if a row fails to serialize.
    pub fn append(&self, rows: &[OutputRow]) -> FileResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| FileError::io(&self.path, e))?;
        let needs_header = file
            .metadata()
            .map_err(|e| FileError::io(&self.path, e))?
            .len()
            == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer
                .write_record(REPORT_COLUMNS)
                .map_err(|e| FileError::csv(&self.path, e.to_string()))?;
        }
        for row in rows {
            writer
                .write_record(row.cells())
                .map_err(|e| FileError::csv(&self.path, e.to_string()))?;
        }
        writer
            .flush()
            .map_err(|e| FileError::io(&self.path, e))?;

        log::info!("appended {} row(s) to {}", rows.len(), self.path.display());
        Ok(())
    }
}
