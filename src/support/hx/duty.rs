use uom::{ConstZero, si::f64::Power};

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Heat duty of a block.
///
/// Simulators report duty with a sign convention (negative for cooling), but
/// pairing only looks at the magnitude. A block without a reported duty is
/// normalized to zero, after which it is indistinguishable from a block that
/// genuinely reported zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Duty(Power);

impl Duty {
    /// Normalizes a possibly absent duty, defaulting absence to zero.
    ///
    /// ```
    /// use twine_heat_integration::support::hx::Duty;
    /// use uom::si::{f64::Power, power::kilowatt};
    ///
    /// assert_eq!(Duty::normalize(None), Duty::normalize(Some(Power::new::<kilowatt>(0.0))));
    /// assert_eq!(Duty::normalize(Some(Power::new::<kilowatt>(-5.0))).magnitude().get::<kilowatt>(), 5.0);
    /// ```
    #[must_use]
    pub fn normalize(reported: Option<Power>) -> Self {
        Self(reported.unwrap_or(Power::ZERO))
    }

    /// The duty as reported, sign included.
    #[must_use]
    pub fn signed(&self) -> Power {
        self.0
    }

    /// Absolute value of the duty.
    #[must_use]
    pub fn magnitude(&self) -> Power {
        self.0.abs()
    }

    /// Returns the magnitude if this duty can take part in matching.
    ///
    /// Zero duties carry no thermal signature and are never eligible.
    #[must_use]
    pub fn eligible(&self) -> Option<Constrained<Power, StrictlyPositive>> {
        StrictlyPositive::new(self.magnitude()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::kilowatt;

    #[test]
    fn absent_duty_is_zero() {
        let duty = Duty::normalize(None);
        assert_eq!(duty.signed(), Power::ZERO);
        assert!(duty.eligible().is_none());
    }

    #[test]
    fn cooling_duty_keeps_sign_but_matches_on_magnitude() {
        let duty = Duty::normalize(Some(Power::new::<kilowatt>(-200.0)));
        assert_relative_eq!(duty.signed().get::<kilowatt>(), -200.0);
        assert_relative_eq!(duty.magnitude().get::<kilowatt>(), 200.0);

        let eligible = duty.eligible().expect("nonzero duty is eligible");
        assert_relative_eq!(eligible.into_inner().get::<kilowatt>(), 200.0);
    }

    #[test]
    fn zero_duty_is_not_eligible() {
        assert!(Duty::normalize(Some(Power::ZERO)).eligible().is_none());
        assert!(Duty::normalize(Some(-Power::ZERO)).eligible().is_none());
    }
}
