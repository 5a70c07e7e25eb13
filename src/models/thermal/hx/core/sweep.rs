//! Tolerance sensitivity sweep.

use crate::support::hx::{Pair, Record, Tolerance, match_duties, partition};

/// Pairs found at one tolerance in a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub tolerance: Tolerance,
    pub pairs: Vec<Pair>,
}

/// Matches the same records once per tolerance, in the order given.
pub(in crate::models::thermal::hx) fn sweep(
    records: &[Record],
    tolerances: impl IntoIterator<Item = Tolerance>,
) -> Vec<SweepPoint> {
    let split = partition(records);

    tolerances
        .into_iter()
        .map(|tolerance| SweepPoint {
            tolerance,
            pairs: match_duties(&split.hot, &split.cold, tolerance),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Power, ThermodynamicTemperature},
        power::kilowatt,
        thermodynamic_temperature::degree_celsius,
    };

    fn record(id: &str, t_in: f64, t_out: f64, duty_kw: f64) -> Record {
        Record::new(
            id,
            ThermodynamicTemperature::new::<degree_celsius>(t_in),
            ThermodynamicTemperature::new::<degree_celsius>(t_out),
            Some(Power::new::<kilowatt>(duty_kw)),
        )
        .unwrap()
    }

    #[test]
    fn looser_tolerances_find_more_pairs() {
        let records = [
            record("E1", 150.0, 50.0, 100.0),
            record("E2", 140.0, 60.0, 300.0),
            record("E3", 30.0, 120.0, 100.4),
            record("E4", 20.0, 110.0, 310.0),
        ];
        let tolerances = [0.001, 0.01, 0.05].map(|f| Tolerance::from_fraction(f).unwrap());

        let points = sweep(&records, tolerances);

        let counts: Vec<_> = points.iter().map(|point| point.pairs.len()).collect();
        assert_eq!(counts, [0, 1, 2]);
        assert_eq!(points[1].tolerance, tolerances[1]);
    }

    #[test]
    fn no_tolerances_no_points() {
        let records = [record("E1", 150.0, 50.0, 100.0)];
        assert!(sweep(&records, Vec::<Tolerance>::new()).is_empty());
    }
}
