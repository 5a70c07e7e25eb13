use std::{collections::HashSet, fs::File, io::Read, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::support::hx::{BlockReading, Reading};

use super::BlockSource;

/// Errors that can occur while reading a block table.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The table could not be opened, read, or deserialized.
    #[error("failed to read block table")]
    Csv(#[from] ::csv::Error),

    /// Two rows share the same block identifier.
    #[error("duplicate block identifier {0:?}")]
    DuplicateBlock(String),
}

/// One row of a block results table.
///
/// Accepts both plain column names and the headings written by
/// [`CsvExporter`](crate::export::CsvExporter), so an exported record table
/// can be read back in. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct Row {
    #[serde(alias = "HX", alias = "name")]
    block: String,

    #[serde(alias = "T_in (°C)", alias = "T_in (K)", alias = "T_in (°F)")]
    inlet_temperature: String,

    #[serde(alias = "T_out (°C)", alias = "T_out (K)", alias = "T_out (°F)")]
    outlet_temperature: String,

    #[serde(alias = "Duty (kW)", alias = "Duty (W)", alias = "Duty (MW)")]
    duty: Option<String>,
}

impl From<Row> for BlockReading {
    fn from(row: Row) -> Self {
        BlockReading {
            identifier: row.block,
            inlet_temperature: Reading::Text(row.inlet_temperature),
            outlet_temperature: Reading::Text(row.outlet_temperature),
            duty: row.duty.map(Reading::Text),
        }
    }
}

/// Reads block readings from a CSV table with a header row.
///
/// Expected columns are `block`, `inlet_temperature`, `outlet_temperature`
/// and an optional `duty`. Values are kept as text so that non-numeric
/// entries surface later as [`DataFormatError`](crate::support::hx::DataFormatError)s
/// naming the block, rather than as a table-level parse failure.
///
/// ```
/// use twine_heat_integration::source::{BlockSource, CsvSource};
///
/// let table = "block,inlet_temperature,outlet_temperature,duty\n\
///              E1,150,50,-200\n\
///              E2,30,120,\n";
///
/// let readings = CsvSource::from_reader(table.as_bytes()).fetch().unwrap();
/// assert_eq!(readings.len(), 2);
/// assert_eq!(readings[1].duty, None);
/// ```
#[derive(Debug)]
pub struct CsvSource<R> {
    reader: ::csv::Reader<R>,
}

impl CsvSource<File> {
    /// Opens a CSV table on disk.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Csv`] if the file cannot be opened.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let reader = Self::builder().from_path(path)?;
        Ok(Self { reader })
    }
}

impl<R: Read> CsvSource<R> {
    /// Reads a CSV table from any reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Self::builder().from_reader(reader),
        }
    }

    fn builder() -> ::csv::ReaderBuilder {
        let mut builder = ::csv::ReaderBuilder::new();
        builder.trim(::csv::Trim::All).has_headers(true);
        builder
    }
}

impl<R: Read> BlockSource for CsvSource<R> {
    type Error = SourceError;

    fn fetch(&mut self) -> Result<Vec<BlockReading>, Self::Error> {
        let mut seen = HashSet::new();
        let mut readings = Vec::new();

        for row in self.reader.deserialize::<Row>() {
            let reading = BlockReading::from(row?);
            if !seen.insert(reading.identifier.clone()) {
                return Err(SourceError::DuplicateBlock(reading.identifier));
            }
            readings.push(reading);
        }

        debug!(blocks = readings.len(), "read block table");
        Ok(readings)
    }
}
