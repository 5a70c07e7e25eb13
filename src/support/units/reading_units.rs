use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{
    f64::{Power, TemperatureInterval, ThermodynamicTemperature},
    power::{kilowatt, megawatt, watt},
    temperature_interval::{
        degree_celsius as delta_celsius, degree_fahrenheit as delta_fahrenheit,
        kelvin as delta_kelvin,
    },
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit, kelvin},
};

/// Units in which a simulator reports block temperatures and duties.
///
/// The default matches a typical flowsheet setup: temperatures in °C and
/// duties in kW.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadingUnits {
    pub temperature: TemperatureUnit,
    pub duty: DutyUnit,
}

/// Temperature scale for raw readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Kelvin,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Interprets a raw number as a temperature on this scale.
    #[must_use]
    pub fn temperature(self, value: f64) -> ThermodynamicTemperature {
        match self {
            Self::Celsius => ThermodynamicTemperature::new::<degree_celsius>(value),
            Self::Kelvin => ThermodynamicTemperature::new::<kelvin>(value),
            Self::Fahrenheit => ThermodynamicTemperature::new::<degree_fahrenheit>(value),
        }
    }

    /// Expresses a temperature as a bare number on this scale.
    #[must_use]
    pub fn value_of(self, temperature: ThermodynamicTemperature) -> f64 {
        match self {
            Self::Celsius => temperature.get::<degree_celsius>(),
            Self::Kelvin => temperature.get::<kelvin>(),
            Self::Fahrenheit => temperature.get::<degree_fahrenheit>(),
        }
    }

    /// Expresses a temperature difference as a bare number on this scale.
    #[must_use]
    pub fn interval_value_of(self, interval: TemperatureInterval) -> f64 {
        match self {
            Self::Celsius => interval.get::<delta_celsius>(),
            Self::Kelvin => interval.get::<delta_kelvin>(),
            Self::Fahrenheit => interval.get::<delta_fahrenheit>(),
        }
    }

    /// Symbol used in table headings.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Kelvin => "K",
            Self::Fahrenheit => "°F",
        }
    }
}

/// Power unit for raw duty readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DutyUnit {
    Watt,
    #[default]
    Kilowatt,
    Megawatt,
}

impl DutyUnit {
    /// Interprets a raw number as a duty in this unit.
    #[must_use]
    pub fn power(self, value: f64) -> Power {
        match self {
            Self::Watt => Power::new::<watt>(value),
            Self::Kilowatt => Power::new::<kilowatt>(value),
            Self::Megawatt => Power::new::<megawatt>(value),
        }
    }

    /// Expresses a duty as a bare number in this unit.
    #[must_use]
    pub fn value_of(self, power: Power) -> f64 {
        match self {
            Self::Watt => power.get::<watt>(),
            Self::Kilowatt => power.get::<kilowatt>(),
            Self::Megawatt => power.get::<megawatt>(),
        }
    }

    /// Symbol used in table headings.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Watt => "W",
            Self::Kilowatt => "kW",
            Self::Megawatt => "MW",
        }
    }
}

/// Error returned when a unit name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} unit: {name:?}")]
pub struct ParseUnitError {
    kind: &'static str,
    name: String,
}

impl FromStr for TemperatureUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "degc" | "celsius" => Ok(Self::Celsius),
            "k" | "kelvin" => Ok(Self::Kelvin),
            "f" | "degf" | "fahrenheit" => Ok(Self::Fahrenheit),
            _ => Err(ParseUnitError {
                kind: "temperature",
                name: s.to_owned(),
            }),
        }
    }
}

impl FromStr for DutyUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "watt" => Ok(Self::Watt),
            "kw" | "kilowatt" => Ok(Self::Kilowatt),
            "mw" | "megawatt" => Ok(Self::Megawatt),
            _ => Err(ParseUnitError {
                kind: "duty",
                name: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for DutyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn temperature_round_trip_on_each_scale() {
        for unit in [
            TemperatureUnit::Celsius,
            TemperatureUnit::Kelvin,
            TemperatureUnit::Fahrenheit,
        ] {
            let t = unit.temperature(120.0);
            assert_relative_eq!(unit.value_of(t), 120.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn celsius_reading_is_offset_from_kelvin() {
        let t = TemperatureUnit::Celsius.temperature(0.0);
        assert_relative_eq!(TemperatureUnit::Kelvin.value_of(t), 273.15, epsilon = 1e-9);
    }

    #[test]
    fn fahrenheit_intervals_are_scaled() {
        let interval = TemperatureInterval::new::<delta_kelvin>(10.0);
        assert_relative_eq!(
            TemperatureUnit::Fahrenheit.interval_value_of(interval),
            18.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            TemperatureUnit::Celsius.interval_value_of(interval),
            10.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn duty_units() {
        let duty = DutyUnit::Megawatt.power(1.5);
        assert_relative_eq!(DutyUnit::Kilowatt.value_of(duty), 1500.0);
        assert_relative_eq!(DutyUnit::Watt.value_of(duty), 1.5e6);
    }

    #[test]
    fn parses_unit_names() {
        assert_eq!("C".parse(), Ok(TemperatureUnit::Celsius));
        assert_eq!(" kelvin ".parse(), Ok(TemperatureUnit::Kelvin));
        assert_eq!("degF".parse(), Ok(TemperatureUnit::Fahrenheit));
        assert_eq!("kW".parse(), Ok(DutyUnit::Kilowatt));
        assert_eq!("MW".parse(), Ok(DutyUnit::Megawatt));
        assert!("rankine".parse::<TemperatureUnit>().is_err());
        assert!("hp".parse::<DutyUnit>().is_err());
    }

    #[test]
    fn default_units() {
        let units = ReadingUnits::default();
        assert_eq!(units.temperature, TemperatureUnit::Celsius);
        assert_eq!(units.duty, DutyUnit::Kilowatt);
    }
}
