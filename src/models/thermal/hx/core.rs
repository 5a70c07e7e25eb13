//! Heat integration pipeline.
//!
//! Parse and classify every reading, split hot from cold, then match.

mod analysis;
mod config;
mod error;
mod sweep;

pub use analysis::Analysis;
pub use config::{HeatIntegrationConfig, InvalidReadingPolicy, ParsePolicyError};
pub use error::HeatIntegrationError;
pub use sweep::SweepPoint;

pub(super) use sweep::sweep;

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::support::hx::{BlockReading, Record, match_duties, partition};

/// Runs the pipeline on raw readings.
///
/// # Errors
///
/// Returns [`HeatIntegrationError::DuplicateBlock`] if two readings share an
/// identifier, whatever the policy. Under [`InvalidReadingPolicy::Abort`],
/// also returns the first reading that cannot be parsed.
pub(super) fn run(
    readings: &[BlockReading],
    config: &HeatIntegrationConfig,
) -> Result<Analysis, HeatIntegrationError> {
    let mut seen = HashSet::with_capacity(readings.len());
    if let Some(duplicate) = readings
        .iter()
        .find(|reading| !seen.insert(reading.identifier.as_str()))
    {
        return Err(HeatIntegrationError::DuplicateBlock(
            duplicate.identifier.clone(),
        ));
    }

    let mut records = Vec::with_capacity(readings.len());
    let mut skipped = Vec::new();

    for reading in readings {
        match Record::from_reading(reading, config.units) {
            Ok(record) => records.push(record),
            Err(err) => match config.on_invalid {
                InvalidReadingPolicy::Abort => return Err(err.into()),
                InvalidReadingPolicy::Skip => {
                    warn!(block = err.identifier(), field = %err.field(), "skipping block: {err}");
                    skipped.push(err);
                }
            },
        }
    }

    let split = partition(&records);
    debug!(
        hot = split.hot.len(),
        cold = split.cold.len(),
        "classified blocks"
    );

    let pairs = match_duties(&split.hot, &split.cold, config.tolerance);

    Ok(Analysis {
        records,
        pairs,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{power::kilowatt, temperature_interval::degree_celsius as delta_celsius};

    use crate::support::{
        hx::{Field, Reading, StreamKind, Tolerance},
        units::{DutyUnit, ReadingUnits, TemperatureUnit},
    };

    fn reading(id: &str, t_in: &str, t_out: &str, duty: Option<&str>) -> BlockReading {
        BlockReading::new(id, t_in, t_out, duty.map(Reading::from))
    }

    #[test]
    fn end_to_end_pairs_e1_with_e2() {
        let readings = [
            reading("E1", "150", "50", Some("-200")),
            reading("E2", "30", "120", Some("199")),
        ];

        let analysis = run(&readings, &HeatIntegrationConfig::default()).unwrap();

        let kinds: Vec<_> = analysis.records.iter().map(Record::kind).collect();
        assert_eq!(kinds, [StreamKind::Hot, StreamKind::Cold]);

        let [pair] = analysis.pairs.as_slice() else {
            panic!("expected exactly one pair, got {:?}", analysis.pairs);
        };
        assert_eq!(pair.hot, "E1");
        assert_eq!(pair.cold, "E2");
        assert_relative_eq!(pair.hot_end_delta_t.get::<delta_celsius>(), 30.0, epsilon = 1e-9);
        assert_relative_eq!(pair.cold_end_delta_t.get::<delta_celsius>(), 20.0, epsilon = 1e-9);
        assert_relative_eq!(pair.average_duty.get::<kilowatt>(), 199.5, epsilon = 1e-9);
    }

    #[test]
    fn duty_on_the_boundary_does_not_pair() {
        let readings = [
            reading("E1", "150", "50", Some("-200")),
            reading("E2", "30", "120", Some("198")),
        ];

        let analysis = run(&readings, &HeatIntegrationConfig::default()).unwrap();

        assert!(analysis.pairs.is_empty());
        assert_eq!(analysis.records.len(), 2);
    }

    #[test]
    fn records_keep_input_order() {
        let readings = [
            reading("K1", "20", "60", Some("10")),
            reading("E1", "90", "40", Some("10")),
            reading("F1", "70", "70", None),
        ];

        let analysis = run(&readings, &HeatIntegrationConfig::default()).unwrap();

        let ids: Vec<_> = analysis.records.iter().map(Record::identifier).collect();
        assert_eq!(ids, ["K1", "E1", "F1"]);
    }

    #[test]
    fn abort_policy_stops_at_first_bad_reading() {
        let readings = [
            reading("E1", "150", "50", Some("-200")),
            reading("E2", "30", "oops", Some("199")),
            reading("E3", "bad", "10", None),
        ];

        let err = run(&readings, &HeatIntegrationConfig::default()).unwrap_err();

        let HeatIntegrationError::InvalidReading(err) = err else {
            panic!("expected an invalid reading, got {err:?}");
        };
        assert_eq!(err.identifier(), "E2");
        assert_eq!(err.field(), Field::OutletTemperature);
    }

    #[test]
    fn duplicate_identifiers_are_rejected_under_any_policy() {
        let readings = [
            reading("E1", "150", "50", Some("-200")),
            reading("E2", "30", "120", Some("199")),
            reading("E1", "140", "60", Some("-199")),
        ];

        for on_invalid in [InvalidReadingPolicy::Abort, InvalidReadingPolicy::Skip] {
            let config = HeatIntegrationConfig {
                on_invalid,
                ..HeatIntegrationConfig::default()
            };
            let err = run(&readings, &config).unwrap_err();
            assert_eq!(err, HeatIntegrationError::DuplicateBlock("E1".to_owned()));
        }
    }

    #[test]
    fn skip_policy_drops_bad_readings_and_reports_them() {
        let readings = [
            reading("E1", "150", "50", Some("-200")),
            reading("E2", "30", "oops", Some("199")),
            reading("E3", "30", "120", Some("199")),
        ];
        let config = HeatIntegrationConfig {
            on_invalid: InvalidReadingPolicy::Skip,
            ..HeatIntegrationConfig::default()
        };

        let analysis = run(&readings, &config).unwrap();

        assert_eq!(analysis.records.len(), 2);
        assert_eq!(analysis.skipped.len(), 1);
        assert_eq!(analysis.skipped[0].identifier(), "E2");
        assert_eq!(analysis.pairs[0].cold, "E3");
    }

    #[test]
    fn honors_tolerance_and_units() {
        let readings = [
            reading("E1", "423.15", "323.15", Some("100000")),
            reading("E2", "303.15", "393.15", Some("100900")),
        ];
        let config = HeatIntegrationConfig {
            tolerance: Tolerance::from_fraction(0.005).unwrap(),
            units: ReadingUnits {
                temperature: TemperatureUnit::Kelvin,
                duty: DutyUnit::Watt,
            },
            ..HeatIntegrationConfig::default()
        };

        assert!(run(&readings, &config).unwrap().pairs.is_empty());

        let config = HeatIntegrationConfig {
            tolerance: Tolerance::default(),
            ..config
        };
        assert_eq!(run(&readings, &config).unwrap().pairs.len(), 1);
    }
}
