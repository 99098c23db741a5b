//! The stroke force model seam.
//!
//! The simulator never knows what a stroke looks like.
//! It owns a [`StrokeParameters`] record (a stroke rate plus an opaque,
//! model-specific *shape*) and asks a [`StrokeModel`] for the forward force a
//! single paddler produces at a given [`Phase`] of the stroke cycle.

use uom::si::{
    f64::{Force, Time},
    force::newton,
    time::second,
};

use crate::{
    Overridable, Phase,
    constraint::{Constrained, ConstraintError, StrictlyPositive},
};

/// Stroke rate applied when no override is given, in strokes per minute.
pub const DEFAULT_STROKE_RATE: f64 = 60.0;

/// Computes the forward force a single paddler contributes at a point in their stroke.
///
/// Implementations must be pure functions of their inputs and should be
/// periodic-consistent: phase `0` and a phase approaching `1` are adjacent
/// points of one continuous cycle.
///
/// The returned force is signed.
/// Negative values represent a braking phase of the stroke.
///
/// # Errors
///
/// A model may reject its inputs (for example, an invalid shape).
/// The simulator returns such errors to its caller unchanged.
pub trait StrokeModel {
    /// Model-specific stroke configuration, shared by every paddler in a run.
    type Shape;

    /// The error type returned if the force cannot be computed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the forward force at `phase` for the given stroke configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err(Self::Error)` if the model cannot evaluate the inputs.
    fn force_at_phase(
        &self,
        stroke: &StrokeParameters<Self::Shape>,
        phase: Phase,
    ) -> Result<StrokeOutput, Self::Error>;
}

/// Output of a [`StrokeModel`] evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeOutput {
    /// Signed force along the direction of travel.
    pub forward_force: Force,
}

impl StrokeOutput {
    /// Creates an output from a force in newtons.
    #[must_use]
    pub fn newtons(value: f64) -> Self {
        Self {
            forward_force: Force::new::<newton>(value),
        }
    }
}

/// A validated stroke rate, in strokes per minute.
///
/// Serializes as a bare number and is checked again on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct StrokeRate(Constrained<f64, StrictlyPositive>);

impl StrokeRate {
    /// Constructs a stroke rate from strokes per minute.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the rate is not strictly positive, or
    /// is so large that the stroke period collapses to zero.
    pub fn per_minute(strokes_per_minute: f64) -> Result<Self, ConstraintError> {
        let rate = StrictlyPositive::new(strokes_per_minute)?;
        StrictlyPositive::new(60.0 / strokes_per_minute)?;
        Ok(Self(rate))
    }

    /// Returns the rate in strokes per minute.
    #[must_use]
    pub fn strokes_per_minute(&self) -> f64 {
        self.0.get()
    }

    /// Returns the duration of one full stroke, `60 / strokes_per_minute` seconds.
    #[must_use]
    pub fn period(&self) -> Constrained<Time, StrictlyPositive> {
        Constrained::new_unchecked(Time::new::<second>(60.0 / self.strokes_per_minute()))
    }
}

impl TryFrom<f64> for StrokeRate {
    type Error = ConstraintError;

    fn try_from(strokes_per_minute: f64) -> Result<Self, Self::Error> {
        Self::per_minute(strokes_per_minute)
    }
}

impl From<StrokeRate> for f64 {
    fn from(rate: StrokeRate) -> Self {
        rate.strokes_per_minute()
    }
}

/// Unvalidated stroke configuration with defaults.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokeConfig<S> {
    /// Strokes per minute.
    pub stroke_rate: f64,
    pub shape: S,
}

impl<S: Default> Default for StrokeConfig<S> {
    fn default() -> Self {
        Self {
            stroke_rate: DEFAULT_STROKE_RATE,
            shape: S::default(),
        }
    }
}

/// Partial stroke configuration.
///
/// The shape carries its own overrides type, defined alongside the model.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct StrokeOverrides<O> {
    pub stroke_rate: Option<f64>,
    pub shape: O,
}

impl<S: Overridable> Overridable for StrokeConfig<S> {
    type Overrides = StrokeOverrides<S::Overrides>;

    fn with_overrides(self, overrides: &Self::Overrides) -> Self {
        Self {
            stroke_rate: overrides.stroke_rate.unwrap_or(self.stroke_rate),
            shape: self.shape.with_overrides(&overrides.shape),
        }
    }
}

/// Resolved stroke configuration shared by every paddler in a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokeParameters<S> {
    rate: StrokeRate,
    shape: S,
}

impl<S> StrokeParameters<S> {
    /// Creates stroke parameters from an already validated rate.
    #[must_use]
    pub fn new(rate: StrokeRate, shape: S) -> Self {
        Self { rate, shape }
    }

    /// Validates a [`StrokeConfig`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the stroke rate is invalid.
    pub fn from_config(config: StrokeConfig<S>) -> Result<Self, ConstraintError> {
        let StrokeConfig { stroke_rate, shape } = config;
        Ok(Self::new(StrokeRate::per_minute(stroke_rate)?, shape))
    }

    #[must_use]
    pub fn rate(&self) -> StrokeRate {
        self.rate
    }

    /// Returns the duration of one full stroke.
    #[must_use]
    pub fn period(&self) -> Constrained<Time, StrictlyPositive> {
        self.rate.period()
    }

    /// Returns the model-specific shape.
    pub fn shape(&self) -> &S {
        &self.shape
    }
}
