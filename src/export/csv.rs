use std::{fs, io::Write, path::Path};

use thiserror::Error;
use tracing::info;

use crate::{
    models::thermal::hx::Analysis,
    support::{
        hx::{Pair, Record},
        units::ReadingUnits,
    },
};

use super::{ExportedFiles, Exporter};

/// Errors that can occur while writing CSV tables.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV table")]
    Csv(#[from] ::csv::Error),

    #[error("failed to prepare output directory {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Options for [`CsvExporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvConfig {
    /// Column delimiter (default: `,`).
    pub delimiter: u8,

    /// Decimal places for numeric columns (default: 6).
    pub precision: usize,

    /// Units for temperatures and duties in the output (default: °C and kW).
    pub units: ReadingUnits,

    /// File name for the record table.
    pub records_file: String,

    /// File name for the pair table.
    pub pairs_file: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            precision: 6,
            units: ReadingUnits::default(),
            records_file: "Extracted_Data.csv".to_owned(),
            pairs_file: "HX_Pairs.csv".to_owned(),
        }
    }
}

/// Writes heat integration results as CSV.
///
/// ```
/// use twine_heat_integration::{export::CsvExporter, support::hx::Record};
/// use uom::si::{f64::{Power, ThermodynamicTemperature}, power::kilowatt, thermodynamic_temperature::degree_celsius};
///
/// let t = |c| ThermodynamicTemperature::new::<degree_celsius>(c);
/// let record = Record::new("E1", t(150.0), t(50.0), Some(Power::new::<kilowatt>(-200.0))).unwrap();
///
/// let mut out = Vec::new();
/// CsvExporter::default().write_records(&[record], &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(
///     text,
///     "HX,T_in (°C),T_out (°C),Type,Duty (kW)\nE1,150.000000,50.000000,Hot,-200.000000\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvExporter {
    config: CsvConfig,
}

impl CsvExporter {
    #[must_use]
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// Writes the record table: `HX, T_in, T_out, Type, Duty`.
    ///
    /// Duties keep their reported sign.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Csv`] if writing fails.
    pub fn write_records<W: Write>(&self, records: &[Record], writer: W) -> Result<(), ExportError> {
        let ReadingUnits { temperature, duty } = self.config.units;
        let mut csv = self.writer(writer);

        csv.write_record([
            "HX".to_owned(),
            format!("T_in ({temperature})"),
            format!("T_out ({temperature})"),
            "Type".to_owned(),
            format!("Duty ({duty})"),
        ])?;

        for record in records {
            csv.write_record([
                record.identifier().to_owned(),
                self.number(temperature.value_of(record.inlet_temperature())),
                self.number(temperature.value_of(record.outlet_temperature())),
                record.kind().to_string(),
                self.number(duty.value_of(record.duty().signed())),
            ])?;
        }

        csv.flush().map_err(::csv::Error::from)?;
        Ok(())
    }

    /// Writes the pair table:
    /// `Heater, Cooler, TH_in, TH_out, TC_in, TC_out, Hot End ΔT, Cold End ΔT, Duty`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Csv`] if writing fails.
    pub fn write_pairs<W: Write>(&self, pairs: &[Pair], writer: W) -> Result<(), ExportError> {
        let ReadingUnits { temperature, duty } = self.config.units;
        let mut csv = self.writer(writer);

        csv.write_record([
            "Heater".to_owned(),
            "Cooler".to_owned(),
            format!("TH_in ({temperature})"),
            format!("TH_out ({temperature})"),
            format!("TC_in ({temperature})"),
            format!("TC_out ({temperature})"),
            format!("Hot End ΔT ({temperature})"),
            format!("Cold End ΔT ({temperature})"),
            format!("Duty ({duty})"),
        ])?;

        for pair in pairs {
            csv.write_record([
                pair.hot.clone(),
                pair.cold.clone(),
                self.number(temperature.value_of(pair.hot_inlet_temperature)),
                self.number(temperature.value_of(pair.hot_outlet_temperature)),
                self.number(temperature.value_of(pair.cold_inlet_temperature)),
                self.number(temperature.value_of(pair.cold_outlet_temperature)),
                self.number(temperature.interval_value_of(pair.hot_end_delta_t)),
                self.number(temperature.interval_value_of(pair.cold_end_delta_t)),
                self.number(duty.value_of(pair.average_duty)),
            ])?;
        }

        csv.flush().map_err(::csv::Error::from)?;
        Ok(())
    }

    fn writer<W: Write>(&self, writer: W) -> ::csv::Writer<W> {
        ::csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .from_writer(writer)
    }

    fn number(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.config.precision)
    }
}

impl Exporter for CsvExporter {
    type Error = ExportError;

    fn export(&self, analysis: &Analysis, dir: &Path) -> Result<ExportedFiles, Self::Error> {
        fs::create_dir_all(dir).map_err(|source| ExportError::Io {
            path: dir.display().to_string(),
            source,
        })?;

        let files = ExportedFiles {
            records: dir.join(&self.config.records_file),
            pairs: dir.join(&self.config.pairs_file),
        };

        let open = |path: &Path| {
            fs::File::create(path).map_err(|source| ExportError::Io {
                path: path.display().to_string(),
                source,
            })
        };

        self.write_records(&analysis.records, open(&files.records)?)?;
        self.write_pairs(&analysis.pairs, open(&files.pairs)?)?;

        info!(
            records = %files.records.display(),
            pairs = %files.pairs.display(),
            "exported heat integration tables"
        );
        Ok(files)
    }
}
