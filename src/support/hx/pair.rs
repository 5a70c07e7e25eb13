use uom::si::f64::{Power, TemperatureInterval, ThermodynamicTemperature};

use crate::support::units::TemperatureDifference;

use super::Record;

/// A hot block matched with a cold block, with approach temperatures and duty.
///
/// The source records are referenced by identifier only. End temperature
/// differences assume counter-current flow:
///
/// - hot end: `hot inlet - cold outlet`
/// - cold end: `hot outlet - cold inlet`
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    /// Identifier of the hot record (the heater in the exported table).
    pub hot: String,
    /// Identifier of the cold record (the cooler in the exported table).
    pub cold: String,

    pub hot_inlet_temperature: ThermodynamicTemperature,
    pub hot_outlet_temperature: ThermodynamicTemperature,
    pub cold_inlet_temperature: ThermodynamicTemperature,
    pub cold_outlet_temperature: ThermodynamicTemperature,

    pub hot_end_delta_t: TemperatureInterval,
    pub cold_end_delta_t: TemperatureInterval,

    /// Mean of the two duty magnitudes.
    pub average_duty: Power,
}

impl Pair {
    /// Builds a pair and computes its derived fields.
    ///
    /// ```
    /// use twine_heat_integration::support::hx::{Pair, Record};
    /// use uom::si::{
    ///     f64::{Power, ThermodynamicTemperature},
    ///     power::kilowatt,
    ///     temperature_interval::kelvin as delta_kelvin,
    ///     thermodynamic_temperature::degree_celsius,
    /// };
    ///
    /// let t = |c| ThermodynamicTemperature::new::<degree_celsius>(c);
    /// let q = |kw| Some(Power::new::<kilowatt>(kw));
    /// let hot = Record::new("E1", t(150.0), t(50.0), q(-200.0)).unwrap();
    /// let cold = Record::new("E2", t(30.0), t(120.0), q(199.0)).unwrap();
    ///
    /// let pair = Pair::enrich(&hot, &cold);
    /// assert!((pair.hot_end_delta_t.get::<delta_kelvin>() - 30.0).abs() < 1e-9);
    /// assert!((pair.cold_end_delta_t.get::<delta_kelvin>() - 20.0).abs() < 1e-9);
    /// assert!((pair.average_duty.get::<kilowatt>() - 199.5).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn enrich(hot: &Record, cold: &Record) -> Self {
        let average_duty = (hot.duty().magnitude() + cold.duty().magnitude()) / 2.0;

        Self {
            hot: hot.identifier().to_owned(),
            cold: cold.identifier().to_owned(),
            hot_inlet_temperature: hot.inlet_temperature(),
            hot_outlet_temperature: hot.outlet_temperature(),
            cold_inlet_temperature: cold.inlet_temperature(),
            cold_outlet_temperature: cold.outlet_temperature(),
            hot_end_delta_t: hot.inlet_temperature().minus(cold.outlet_temperature()),
            cold_end_delta_t: hot.outlet_temperature().minus(cold.inlet_temperature()),
            average_duty,
        }
    }
}
