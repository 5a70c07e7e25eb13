use std::fmt;

use uom::si::f64::ThermodynamicTemperature;

/// Whether a block's stream gives up heat or takes it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// The stream cools down across the block (a cooler on the process side).
    Hot,
    /// The stream heats up, or its temperature does not change.
    Cold,
}

impl StreamKind {
    /// Classifies a stream from its inlet and outlet temperatures.
    ///
    /// A stream is [`Hot`](Self::Hot) only if its inlet is strictly hotter
    /// than its outlet; equal temperatures classify as [`Cold`](Self::Cold).
    ///
    /// ```
    /// use twine_heat_integration::support::hx::StreamKind;
    /// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};
    ///
    /// let t = |c| ThermodynamicTemperature::new::<degree_celsius>(c);
    /// assert_eq!(StreamKind::classify(t(150.0), t(50.0)), StreamKind::Hot);
    /// assert_eq!(StreamKind::classify(t(30.0), t(120.0)), StreamKind::Cold);
    /// assert_eq!(StreamKind::classify(t(100.0), t(100.0)), StreamKind::Cold);
    /// ```
    #[must_use]
    pub fn classify(inlet: ThermodynamicTemperature, outlet: ThermodynamicTemperature) -> Self {
        if inlet > outlet { Self::Hot } else { Self::Cold }
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hot => "Hot",
            Self::Cold => "Cold",
        })
    }
}
