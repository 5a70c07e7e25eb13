use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is greater than zero.
///
/// A duty magnitude must satisfy this constraint before the block can take
/// part in matching.
///
/// ```
/// use twine_heat_integration::support::constraint::StrictlyPositive;
///
/// assert_eq!(StrictlyPositive::new(3.5).unwrap().into_inner(), 3.5);
///
/// assert!(StrictlyPositive::new(0).is_err());
/// assert!(StrictlyPositive::new(-1).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Power, power::kilowatt};

    #[test]
    fn duties() {
        assert!(StrictlyPositive::new(Power::new::<kilowatt>(1e-9)).is_ok());
        assert!(matches!(
            StrictlyPositive::new(Power::new::<kilowatt>(0.0)),
            Err(ConstraintError::Zero)
        ));
        assert!(matches!(
            StrictlyPositive::new(Power::new::<kilowatt>(-200.0)),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            StrictlyPositive::new(Power::new::<kilowatt>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        ));
    }
}
