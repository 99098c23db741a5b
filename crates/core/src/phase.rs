use uom::si::{f64::Time, time::second};

use crate::constraint::{
    Constrained, ConstraintError, StrictlyPositive, UnitIntervalRightOpen,
};

/// A normalized position within one stroke cycle, in `[0, 1)`.
///
/// Phase `0` is the start of the cycle and values approach `1` as the cycle
/// completes, after which the phase wraps back to `0`.
///
/// # Example
///
/// ```
/// use paddle_core::{Phase, constraint::StrictlyPositive};
/// use uom::si::{f64::Time, time::second};
///
/// let period = StrictlyPositive::new(Time::new::<second>(2.0)).unwrap();
///
/// let phase = Phase::in_cycle(Time::new::<second>(5.0), period);
/// assert_eq!(phase.value(), 0.5);
///
/// assert!(Phase::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Phase(Constrained<f64, UnitIntervalRightOpen>);

impl Phase {
    /// Constructs a phase if `0 ≤ value < 1`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value is outside `[0, 1)` or NaN.
    pub fn new(value: f64) -> Result<Self, ConstraintError> {
        UnitIntervalRightOpen::new(value).map(Self)
    }

    /// The start of the stroke cycle.
    #[must_use]
    pub fn zero() -> Self {
        Self(UnitIntervalRightOpen::zero())
    }

    /// Returns the phase reached `elapsed` into a repeating cycle of length `period`.
    ///
    /// Computes `(elapsed mod period) / period`.
    /// Negative elapsed times wrap backwards into the previous cycle.
    /// A quotient that rounds up to exactly one, or an undefined one from a
    /// non-finite `elapsed`, maps to the start of the cycle.
    #[must_use]
    pub fn in_cycle(elapsed: Time, period: Constrained<Time, StrictlyPositive>) -> Self {
        let period = period.get().get::<second>();
        let phase = elapsed.get::<second>().rem_euclid(period) / period;
        Self::new(phase).unwrap_or_else(|_| Self::zero())
    }

    /// Returns the phase as a fraction of the cycle.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::zero()
    }
}
