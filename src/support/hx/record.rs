use uom::si::f64::{Power, ThermodynamicTemperature};

use crate::support::units::ReadingUnits;

use super::{
    BlockReading, DataFormatError, Duty, Field, Reading, StreamKind,
    reading::{optional, required},
};

/// A heat exchanger block with validated readings and a fixed classification.
///
/// The [`StreamKind`] is computed once at construction and cannot change.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    identifier: String,
    inlet_temperature: ThermodynamicTemperature,
    outlet_temperature: ThermodynamicTemperature,
    duty: Duty,
    kind: StreamKind,
}

impl Record {
    /// Builds a record from typed values.
    ///
    /// # Errors
    ///
    /// Returns a [`DataFormatError`] if any value is not finite.
    pub fn new(
        identifier: impl Into<String>,
        inlet_temperature: ThermodynamicTemperature,
        outlet_temperature: ThermodynamicTemperature,
        duty: Option<Power>,
    ) -> Result<Self, DataFormatError> {
        let identifier = identifier.into();

        let finite = [
            (Field::InletTemperature, inlet_temperature.value),
            (Field::OutletTemperature, outlet_temperature.value),
            (Field::Duty, duty.map_or(0.0, |duty| duty.value)),
        ];
        if let Some((field, value)) = finite.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(DataFormatError::not_numeric(
                &identifier,
                field,
                &Reading::Number(value),
            ));
        }

        Ok(Self::classified(
            identifier,
            inlet_temperature,
            outlet_temperature,
            Duty::normalize(duty),
        ))
    }

    /// Parses and classifies a raw block reading.
    ///
    /// Temperatures are required. A duty that is absent or blank is normalized
    /// to zero; a duty that is present but not numeric is an error.
    ///
    /// # Errors
    ///
    /// Returns a [`DataFormatError`] naming the block and field if a reading
    /// cannot be interpreted as a finite number.
    pub fn from_reading(reading: &BlockReading, units: ReadingUnits) -> Result<Self, DataFormatError> {
        let id = reading.identifier.as_str();

        let inlet = required(id, Field::InletTemperature, &reading.inlet_temperature)?;
        let outlet = required(id, Field::OutletTemperature, &reading.outlet_temperature)?;
        let duty = optional(id, Field::Duty, reading.duty.as_ref())?;

        Ok(Self::classified(
            reading.identifier.clone(),
            units.temperature.temperature(inlet),
            units.temperature.temperature(outlet),
            Duty::normalize(duty.map(|value| units.duty.power(value))),
        ))
    }

    fn classified(
        identifier: String,
        inlet_temperature: ThermodynamicTemperature,
        outlet_temperature: ThermodynamicTemperature,
        duty: Duty,
    ) -> Self {
        Self {
            identifier,
            inlet_temperature,
            outlet_temperature,
            duty,
            kind: StreamKind::classify(inlet_temperature, outlet_temperature),
        }
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn inlet_temperature(&self) -> ThermodynamicTemperature {
        self.inlet_temperature
    }

    #[must_use]
    pub fn outlet_temperature(&self) -> ThermodynamicTemperature {
        self.outlet_temperature
    }

    #[must_use]
    pub fn duty(&self) -> Duty {
        self.duty
    }

    #[must_use]
    pub fn kind(&self) -> StreamKind {
        self.kind
    }
}

/// Records split by [`StreamKind`], each side in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition<'a> {
    pub hot: Vec<&'a Record>,
    pub cold: Vec<&'a Record>,
}

/// Splits records into hot and cold lists without reordering either.
#[must_use]
pub fn partition(records: &[Record]) -> Partition<'_> {
    let (hot, cold): (Vec<_>, Vec<_>) = records
        .iter()
        .partition(|record| record.kind() == StreamKind::Hot);
    Partition { hot, cold }
}
