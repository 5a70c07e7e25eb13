use uom::si::{
    f64::{Power, Ratio},
    power::kilowatt,
    ratio::{percent, ratio},
};

use crate::support::constraint::{
    Constrained, ConstraintResult, StrictlyPositive, UnitInterval,
};

/// Floor on the denominator of [`relative_difference`], in kilowatts.
pub const EPSILON_KW: f64 = 1e-6;

/// Maximum relative difference between two duties for them to match.
///
/// Must lie in `0 ≤ f ≤ 1`. The default is 1%. A zero tolerance is valid
/// but matches nothing, since the comparison is strict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance(Constrained<Ratio, UnitInterval>);

impl Tolerance {
    /// Creates a tolerance from a dimensionless ratio.
    ///
    /// # Errors
    ///
    /// Returns an error if the ratio is not in `0 ≤ f ≤ 1`.
    pub fn new(fraction: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(fraction)?))
    }

    /// Creates a tolerance from a fraction, e.g. `0.01` for 1%.
    ///
    /// # Errors
    ///
    /// Returns an error if the fraction is not in `0 ≤ f ≤ 1`.
    pub fn from_fraction(fraction: f64) -> ConstraintResult<Self> {
        Self::new(Ratio::new::<ratio>(fraction))
    }

    /// Creates a tolerance from a percentage, e.g. `1.0` for 1%.
    ///
    /// # Errors
    ///
    /// Returns an error if the percentage is not in `0 ≤ p ≤ 100`.
    pub fn from_percent(percentage: f64) -> ConstraintResult<Self> {
        Self::new(Ratio::new::<percent>(percentage))
    }

    /// The tolerance as a dimensionless ratio.
    #[must_use]
    pub fn fraction(&self) -> Ratio {
        self.0.into_inner()
    }

    /// Returns `true` if two eligible duties agree within this tolerance.
    ///
    /// The comparison is strict: a relative difference exactly equal to the
    /// tolerance does not match.
    #[must_use]
    pub fn accepts(
        &self,
        a: Constrained<Power, StrictlyPositive>,
        b: Constrained<Power, StrictlyPositive>,
    ) -> bool {
        relative_difference(a, b) < self.fraction()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(Constrained::new_unchecked(Ratio::new::<percent>(1.0)))
    }
}

/// Relative difference between two duty magnitudes.
///
/// Normalized by the larger of the two, floored at [`EPSILON_KW`], so the
/// result is symmetric and independent of scale.
///
/// Duties are compared as SI quantities, after conversion from their reading
/// units. At a relative difference that equals the tolerance to within a
/// few ulps, the match decision can therefore differ from one made on the
/// raw readings.
///
/// ```
/// use twine_heat_integration::support::{constraint::StrictlyPositive, hx::relative_difference};
/// use uom::si::{f64::Power, power::kilowatt, ratio::ratio};
///
/// let kw = |v| StrictlyPositive::new(Power::new::<kilowatt>(v)).unwrap();
/// let diff = relative_difference(kw(100.0), kw(100.9)).get::<ratio>();
/// assert!((diff - 0.9 / 100.9).abs() < 1e-12);
/// ```
#[must_use]
pub fn relative_difference(
    a: Constrained<Power, StrictlyPositive>,
    b: Constrained<Power, StrictlyPositive>,
) -> Ratio {
    let (a, b) = (a.into_inner(), b.into_inner());
    let denominator = larger(larger(a, b), Power::new::<kilowatt>(EPSILON_KW));
    (a - b).abs() / denominator
}

fn larger(a: Power, b: Power) -> Power {
    if a >= b { a } else { b }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::watt;

    use crate::support::constraint::ConstraintError;

    fn kw(value: f64) -> Constrained<Power, StrictlyPositive> {
        StrictlyPositive::new(Power::new::<kilowatt>(value)).unwrap()
    }

    #[test]
    fn default_is_one_percent() {
        assert_relative_eq!(Tolerance::default().fraction().get::<ratio>(), 0.01);
        assert_eq!(Tolerance::default(), Tolerance::from_percent(1.0).unwrap());
        assert_eq!(Tolerance::default(), Tolerance::from_fraction(0.01).unwrap());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Tolerance::from_percent(-1.0),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            Tolerance::from_percent(150.0),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            Tolerance::from_fraction(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn relative_difference_is_symmetric() {
        let forward = relative_difference(kw(100.0), kw(100.9));
        let backward = relative_difference(kw(100.9), kw(100.0));
        assert_eq!(forward, backward);
        assert_relative_eq!(forward.get::<ratio>(), 0.9 / 100.9, epsilon = 1e-12);
    }

    #[test]
    fn tolerance_boundary() {
        let loose = Tolerance::from_fraction(0.01).unwrap();
        let tight = Tolerance::from_fraction(0.005).unwrap();

        assert!(loose.accepts(kw(100.0), kw(100.9)));
        assert!(!tight.accepts(kw(100.0), kw(100.9)));
    }

    #[test]
    fn equal_to_tolerance_does_not_match() {
        let tolerance = Tolerance::from_fraction(0.01).unwrap();
        assert!(!tolerance.accepts(kw(200.0), kw(198.0)));
        assert!(tolerance.accepts(kw(200.0), kw(199.0)));
    }

    #[test]
    fn zero_tolerance_matches_nothing() {
        let zero = Tolerance::from_percent(0.0).unwrap();
        assert!(!zero.accepts(kw(100.0), kw(100.0)));
        assert!(!zero.accepts(kw(100.0), kw(100.1)));
    }

    #[test]
    fn relative_difference_does_not_depend_on_reading_units() {
        let watts = |v| StrictlyPositive::new(Power::new::<watt>(v)).unwrap();

        let in_kw = relative_difference(kw(150.0), kw(148.8));
        let in_w = relative_difference(watts(150_000.0), watts(148_800.0));

        assert_relative_eq!(in_kw.get::<ratio>(), in_w.get::<ratio>(), epsilon = 1e-12);
        assert_relative_eq!(in_kw.get::<ratio>(), 0.008, epsilon = 1e-12);
    }

    #[test]
    fn tiny_duties_use_epsilon_floor() {
        let diff = relative_difference(kw(1e-9), kw(2e-9));
        assert_relative_eq!(diff.get::<ratio>(), 1e-9 / EPSILON_KW, epsilon = 1e-15);
    }
}
