use std::fmt;

use thiserror::Error;

/// A raw scalar value as delivered by the external simulator.
///
/// Automation interfaces hand back values either as numbers or as text that
/// still needs to be parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Number(f64),
    Text(String),
}

impl Reading {
    /// Returns the finite numeric value of this reading, if it has one.
    ///
    /// Text is trimmed before parsing.
    /// Non-finite numbers (`NaN`, `±inf`) are rejected.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Returns `true` for text that is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    fn describe(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Reading {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Reading {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// The values read for one block, in the form the simulator returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockReading {
    /// Block name, unique within the simulation.
    pub identifier: String,
    pub inlet_temperature: Reading,
    pub outlet_temperature: Reading,
    /// Calculated duty, or `None` when the simulator reported nothing.
    pub duty: Option<Reading>,
}

impl BlockReading {
    /// Groups the readings for one block.
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        inlet_temperature: impl Into<Reading>,
        outlet_temperature: impl Into<Reading>,
        duty: Option<Reading>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            inlet_temperature: inlet_temperature.into(),
            outlet_temperature: outlet_temperature.into(),
            duty,
        }
    }
}

/// Which reading of a block was at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    InletTemperature,
    OutletTemperature,
    Duty,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InletTemperature => "inlet temperature",
            Self::OutletTemperature => "outlet temperature",
            Self::Duty => "duty",
        })
    }
}

/// A block reading that cannot be interpreted as a number.
///
/// Every variant names the block and the field so the source data can be
/// corrected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataFormatError {
    /// The reading is present but does not parse as a finite number.
    #[error("block {identifier}: {field} reading {raw:?} is not numeric")]
    NotNumeric {
        identifier: String,
        field: Field,
        raw: String,
    },

    /// A required temperature reading is blank.
    #[error("block {identifier}: {field} reading is missing")]
    Missing { identifier: String, field: Field },
}

impl DataFormatError {
    /// Name of the block whose reading was rejected.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::NotNumeric { identifier, .. } | Self::Missing { identifier, .. } => identifier,
        }
    }

    /// The rejected field.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::NotNumeric { field, .. } | Self::Missing { field, .. } => *field,
        }
    }

    pub(crate) fn not_numeric(identifier: &str, field: Field, reading: &Reading) -> Self {
        Self::NotNumeric {
            identifier: identifier.to_owned(),
            field,
            raw: reading.describe(),
        }
    }
}

/// Parses a required reading.
pub(crate) fn required(identifier: &str, field: Field, reading: &Reading) -> Result<f64, DataFormatError> {
    if reading.is_blank() {
        return Err(DataFormatError::Missing {
            identifier: identifier.to_owned(),
            field,
        });
    }
    reading
        .value()
        .ok_or_else(|| DataFormatError::not_numeric(identifier, field, reading))
}

/// Parses an optional reading; blank text counts as absent.
pub(crate) fn optional(
    identifier: &str,
    field: Field,
    reading: Option<&Reading>,
) -> Result<Option<f64>, DataFormatError> {
    match reading {
        None => Ok(None),
        Some(reading) if reading.is_blank() => Ok(None),
        Some(reading) => reading
            .value()
            .map(Some)
            .ok_or_else(|| DataFormatError::not_numeric(identifier, field, reading)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_parses() {
        assert_eq!(Reading::from(" 120.5 ").value(), Some(120.5));
        assert_eq!(Reading::from("-3e2").value(), Some(-300.0));
        assert_eq!(Reading::Number(42.0).value(), Some(42.0));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(Reading::Number(f64::NAN).value(), None);
        assert_eq!(Reading::Number(f64::INFINITY).value(), None);
        assert_eq!(Reading::from("inf").value(), None);
        assert_eq!(Reading::from("NaN").value(), None);
    }

    #[test]
    fn required_reading_reports_context() {
        let err = required("E7", Field::OutletTemperature, &Reading::from("n/a")).unwrap_err();
        assert_eq!(err.identifier(), "E7");
        assert_eq!(err.field(), Field::OutletTemperature);
        assert_eq!(
            err.to_string(),
            "block E7: outlet temperature reading \"n/a\" is not numeric"
        );

        let err = required("E7", Field::InletTemperature, &Reading::from("  ")).unwrap_err();
        assert!(matches!(err, DataFormatError::Missing { .. }));
    }

    #[test]
    fn optional_reading_distinguishes_absent_from_bad() {
        assert_eq!(optional("K1", Field::Duty, None), Ok(None));
        assert_eq!(optional("K1", Field::Duty, Some(&Reading::from(""))), Ok(None));
        assert_eq!(
            optional("K1", Field::Duty, Some(&Reading::Number(0.0))),
            Ok(Some(0.0))
        );
        assert!(optional("K1", Field::Duty, Some(&Reading::from("ERROR"))).is_err());
    }
}
