use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker for fractions of a cycle: `0 ≤ x < 1`.
///
/// One is excluded because it names the same point in a cycle as zero.
///
/// ```
/// use paddle_core::constraint::{ConstraintError, UnitIntervalRightOpen};
///
/// assert_eq!(UnitIntervalRightOpen::new(0.25).unwrap().into_inner(), 0.25);
/// assert_eq!(UnitIntervalRightOpen::new(1.0), Err(ConstraintError::AboveMaximum));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalRightOpen;

impl UnitIntervalRightOpen {
    /// Wraps `value` if it lies in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// [`ConstraintError::BelowMinimum`] below zero,
    /// [`ConstraintError::AboveMaximum`] at or above one, and
    /// [`ConstraintError::NotANumber`] for NaN.
    pub fn new(value: f64) -> Result<Constrained<f64, Self>, ConstraintError> {
        Constrained::new(value)
    }

    #[must_use]
    pub fn zero() -> Constrained<f64, Self> {
        Constrained::new_unchecked(0.0)
    }
}

impl Constraint<f64> for UnitIntervalRightOpen {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if *value < 0.0 {
            Err(ConstraintError::BelowMinimum)
        } else if *value >= 1.0 {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }
}
