use std::cmp::Ordering;

use crate::support::constraint::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value lies in `0 ≤ x ≤ 1`.
///
/// Duty tolerances live here. A zero tolerance is allowed and matches
/// nothing under the strict `<` comparison, so a sweep may start at 0%.
///
/// ```
/// use twine_heat_integration::support::constraint::UnitInterval;
/// use uom::si::{f64::Ratio, ratio::{percent, ratio}};
///
/// let tol = UnitInterval::new(Ratio::new::<percent>(1.0)).unwrap();
/// assert_eq!(tol.into_inner().get::<ratio>(), 0.01);
///
/// assert!(UnitInterval::new(Ratio::new::<ratio>(0.0)).is_ok());
/// assert!(UnitInterval::new(Ratio::new::<ratio>(1.5)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if 0 ≤ value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::support::constraint::*;

    use uom::si::{
        f64::Ratio,
        ratio::{percent, ratio},
    };

    #[test]
    fn ratios_in_range() {
        assert!(UnitInterval::new(Ratio::new::<ratio>(0.0)).is_ok());
        assert!(UnitInterval::new(Ratio::new::<percent>(0.5)).is_ok());
        assert!(UnitInterval::new(Ratio::new::<percent>(100.0)).is_ok());
    }

    #[test]
    fn ratios_out_of_range() {
        assert!(matches!(
            UnitInterval::new(Ratio::new::<percent>(-1.0)),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            UnitInterval::new(Ratio::new::<percent>(101.0)),
            Err(ConstraintError::AboveMaximum)
        ));
        assert!(matches!(
            UnitInterval::new(Ratio::new::<ratio>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        ));
    }
}
