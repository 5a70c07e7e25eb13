//! Export of heat integration results.
//!
//! An [`Exporter`] writes the two result tables of an [`Analysis`]:
//!
//! - the classified records (one row per block, with its stream type),
//! - the pairs (one row per matched heater and cooler).
//!
//! [`CsvExporter`] writes them as CSV files, using the column headings of the
//! heat integration workbook (`Extracted_Data` and `HX_Pairs`).

mod csv;

pub use self::csv::{CsvConfig, CsvExporter, ExportError};

use std::path::{Path, PathBuf};

use crate::models::thermal::hx::Analysis;

/// Files written by an [`Exporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub records: PathBuf,
    pub pairs: PathBuf,
}

/// Writes an [`Analysis`] to some external format.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Writes the record and pair tables into `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is not writable or a table cannot be written.
    fn export(&self, analysis: &Analysis, dir: &Path) -> Result<ExportedFiles, Self::Error>;
}
