//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (temperature, duty, ratios).
//! Raw readings from a simulator arrive as bare numbers in the simulator's
//! display units, so [`ReadingUnits`] records which units those are and
//! converts in both directions.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus)
//! method for subtracting one absolute temperature from another to get a
//! temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval::kelvin as delta_kelvin, thermodynamic_temperature::degree_celsius};
//! use twine_heat_integration::support::units::TemperatureDifference;
//!
//! let hot_in = ThermodynamicTemperature::new::<degree_celsius>(150.0);
//! let cold_out = ThermodynamicTemperature::new::<degree_celsius>(120.0);
//! let hot_end = hot_in.minus(cold_out);
//! assert!((hot_end.get::<delta_kelvin>() - 30.0).abs() < 1e-9);
//! ```

mod reading_units;
mod temperature_difference;

pub use reading_units::{DutyUnit, ParseUnitError, ReadingUnits, TemperatureUnit};
pub use temperature_difference::TemperatureDifference;
