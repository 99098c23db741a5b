//! Validated numeric wrappers.
//!
//! Parameters that must stay in range for a whole run (mass, time step,
//! stroke rate, phase) are stored as [`Constrained<T, C>`], where `C` is a
//! zero-sized marker naming the rule. The rule is checked exactly once, in
//! [`Constrained::new`], and the simulation loop reads the values without
//! re-checking them.
//!
//! Markers:
//!
//! - [`StrictlyPositive`]: `x > 0`
//! - [`NonNegative`]: `x ≥ 0`
//! - [`UnitIntervalRightOpen`]: `0 ≤ x < 1`
//!
//! `NaN` is rejected by every marker.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::UnitIntervalRightOpen;

/// A rule a value of type `T` must satisfy.
pub trait Constraint<T> {
    /// Checks `value` against the rule.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing how `value` breaks the rule.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// How a value broke a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("got a negative value")]
    Negative,
    #[error("got zero")]
    Zero,
    #[error("not a finite number")]
    NotANumber,
    #[error("below the allowed range")]
    BelowMinimum,
    #[error("above the allowed range")]
    AboveMaximum,
}

/// A value of type `T` known to satisfy constraint `C`.
///
/// # Example
///
/// ```
/// use paddle_core::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Time, time::second};
///
/// let dt = Constrained::<Time, StrictlyPositive>::new(Time::new::<second>(0.01)).unwrap();
/// assert_eq!(dt.get().get::<second>(), 0.01);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(-3.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    constraint: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] from `C::check`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value).map(|()| Self::new_unchecked(value))
    }

    /// Wraps a value already known to satisfy `C`.
    pub(crate) fn new_unchecked(value: T) -> Self {
        Self {
            value,
            constraint: PhantomData,
        }
    }

    /// Unwraps the value, dropping the guarantee.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }
}

/// Serializes as the bare inner value.
#[cfg(feature = "serde")]
impl<T, C> serde::Serialize for Constrained<T, C>
where
    T: serde::Serialize,
    C: Constraint<T>,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

/// Deserializes the bare inner value, then checks it.
#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for Constrained<T, C>
where
    T: serde::Deserialize<'de>,
    C: Constraint<T>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
