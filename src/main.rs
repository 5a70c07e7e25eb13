//! `hx-pair`: pairs heaters with coolers from a block results table.
//!
//! Reads a CSV table of heat exchanger blocks, keeps the blocks selected by
//! name prefix, classifies them as hot or cold, pairs them by duty and
//! writes the record and pair tables as CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use twine_core::Model;
use uom::si::{power::kilowatt, ratio::percent};

use twine_heat_integration::{
    export::{CsvConfig, CsvExporter, Exporter},
    models::thermal::hx::{HeatIntegration, HeatIntegrationConfig, InvalidReadingPolicy},
    source::{BlockFilter, BlockSource, CsvSource},
    support::{
        hx::{Record, Tolerance},
        units::{DutyUnit, ReadingUnits, TemperatureUnit},
    },
};

#[derive(Parser)]
#[command(name = "hx-pair")]
#[command(about = "Pair heat exchangers with matching duties from simulator block results")]
struct Args {
    /// CSV table with columns block, inlet_temperature, outlet_temperature, duty
    input: PathBuf,

    /// Duty tolerance for matching, in percent (0 to 100)
    #[arg(long, default_value_t = 1.0)]
    tolerance_percent: f64,

    /// Additional tolerances, in percent (0 to 100), to report pair counts for
    #[arg(long, value_delimiter = ',')]
    sweep_percent: Vec<f64>,

    /// What to do with a block whose readings are not numeric (abort or skip)
    #[arg(long, default_value = "abort")]
    on_invalid: InvalidReadingPolicy,

    /// Temperature unit of the input and output tables (C, K or F)
    #[arg(long, default_value = "C")]
    temperature_unit: TemperatureUnit,

    /// Duty unit of the input and output tables (W, kW or MW)
    #[arg(long, default_value = "kW")]
    duty_unit: DutyUnit,

    /// Block name prefix to keep (repeatable; default E, K and F)
    #[arg(long = "prefix", conflicts_with = "all_blocks")]
    prefixes: Vec<String>,

    /// Keep every block regardless of its name
    #[arg(long)]
    all_blocks: bool,

    /// Directory for the output tables
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn filter(&self) -> BlockFilter {
        if self.all_blocks {
            BlockFilter::all()
        } else if self.prefixes.is_empty() {
            BlockFilter::default()
        } else {
            BlockFilter::with_prefixes(&self.prefixes)
        }
    }

    fn units(&self) -> ReadingUnits {
        ReadingUnits {
            temperature: self.temperature_unit,
            duty: self.duty_unit,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let tolerance = Tolerance::from_percent(args.tolerance_percent)
        .with_context(|| format!("invalid tolerance {}%", args.tolerance_percent))?;
    let sweep = args
        .sweep_percent
        .iter()
        .map(|&p| Tolerance::from_percent(p).with_context(|| format!("invalid sweep tolerance {p}%")))
        .collect::<Result<Vec<_>>>()?;

    let readings = CsvSource::from_path(&args.input)
        .and_then(|mut source| source.fetch_filtered(&args.filter()))
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let model = HeatIntegration::new(HeatIntegrationConfig {
        tolerance,
        on_invalid: args.on_invalid,
        units: args.units(),
    });
    let analysis = model
        .call(&readings)
        .context("block table cannot be analyzed")?;

    let unpaired: Vec<&str> = analysis.unpaired_hot().map(Record::identifier).collect();
    if !unpaired.is_empty() {
        warn!(blocks = ?unpaired, "hot blocks without a matching cooler");
    }
    info!(
        pairs = analysis.pairs.len(),
        total_duty_kw = analysis.total_paired_duty().into_inner().get::<kilowatt>(),
        "paired duty"
    );

    for point in model.sweep(&analysis.records, sweep) {
        info!(
            tolerance_percent = point.tolerance.fraction().get::<percent>(),
            pairs = point.pairs.len(),
            "sweep"
        );
    }

    let exporter = CsvExporter::new(CsvConfig {
        units: args.units(),
        ..CsvConfig::default()
    });
    let files = exporter
        .export(&analysis, &args.out_dir)
        .with_context(|| format!("failed to write tables to {}", args.out_dir.display()))?;

    println!("{}", files.records.display());
    println!("{}", files.pairs.display());
    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
