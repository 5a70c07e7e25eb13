use tracing::debug;
use uom::si::{power::kilowatt, ratio::ratio};

use super::{Pair, Record, Tolerance, relative_difference};

/// Greedily pairs hot records with cold records of similar duty.
///
/// Hot records are visited in order, and each is paired with the first cold
/// record, in order, whose duty agrees within `tolerance` (first match, not
/// best match). Consequences of this rule:
///
/// - each hot record appears in at most one pair,
/// - a cold record may be paired with several hot records,
/// - records with zero duty on either side never pair,
/// - a hot record with no acceptable partner is simply left out.
///
/// The result is in hot-record order and depends only on the input order
/// and tolerance, so the same inputs always produce the same pairs.
#[must_use]
pub fn match_duties(hot: &[&Record], cold: &[&Record], tolerance: Tolerance) -> Vec<Pair> {
    hot.iter()
        .filter_map(|&heater| {
            let heater_duty = heater.duty().eligible()?;

            cold.iter().find_map(|&cooler| {
                let cooler_duty = cooler.duty().eligible()?;
                if !tolerance.accepts(heater_duty, cooler_duty) {
                    return None;
                }

                debug!(
                    hot = heater.identifier(),
                    cold = cooler.identifier(),
                    hot_duty_kw = heater_duty.into_inner().get::<kilowatt>(),
                    cold_duty_kw = cooler_duty.into_inner().get::<kilowatt>(),
                    relative_difference =
                        relative_difference(heater_duty, cooler_duty).get::<ratio>(),
                    "paired heat exchangers"
                );
                Some(Pair::enrich(heater, cooler))
            })
        })
        .collect()
}
