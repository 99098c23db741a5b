use std::f64::consts::PI;

use paddle_core::{
    Overridable, Phase, StrokeModel, StrokeOutput, StrokeParameters,
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
};
use thiserror::Error;
use uom::si::{f64::Force, force::newton};

/// A two-part stroke: a half-sine drive followed by a flat recovery.
///
/// For a phase `p` and drive fraction `d`:
///
/// ```text
///   force(p) = peak_force * sin(π p / d)   if p < d
///   force(p) = recovery_force              otherwise
/// ```
///
/// The drive starts and ends at zero force, so the only discontinuity in the
/// cycle is the step between the recovery force and the catch.
/// A negative `recovery_force` models the braking effect of the paddler's
/// body and blade moving forward between strokes.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use paddle_core::{Phase, StrokeConfig, StrokeModel, StrokeParameters};
/// use paddle_strokes::{DriveRecoveryShape, DriveRecoveryStroke};
/// use uom::si::force::newton;
///
/// let stroke = StrokeParameters::from_config(StrokeConfig {
///     stroke_rate: 60.0,
///     shape: DriveRecoveryShape::newtons(400.0, 0.5, -20.0),
/// })
/// .unwrap();
///
/// let peak = DriveRecoveryStroke
///     .force_at_phase(&stroke, Phase::new(0.25).unwrap())
///     .unwrap();
/// assert_relative_eq!(peak.forward_force.get::<newton>(), 400.0);
///
/// let recovery = DriveRecoveryStroke
///     .force_at_phase(&stroke, Phase::new(0.75).unwrap())
///     .unwrap();
/// assert_relative_eq!(recovery.forward_force.get::<newton>(), -20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveRecoveryStroke;

/// Shape of a [`DriveRecoveryStroke`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriveRecoveryShape {
    /// Force at the middle of the drive. Must be non-negative.
    pub peak_force: Force,

    /// Fraction of the cycle spent in the drive. Must lie in `(0, 1)`.
    pub drive_fraction: f64,

    /// Force during recovery. Usually zero or slightly negative.
    pub recovery_force: Force,
}

impl DriveRecoveryShape {
    /// Creates a shape with forces in newtons.
    #[must_use]
    pub fn newtons(peak_force: f64, drive_fraction: f64, recovery_force: f64) -> Self {
        Self {
            peak_force: Force::new::<newton>(peak_force),
            drive_fraction,
            recovery_force: Force::new::<newton>(recovery_force),
        }
    }

    /// Checks the shape fields.
    ///
    /// # Errors
    ///
    /// Returns a [`DriveRecoveryError`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), DriveRecoveryError> {
        NonNegative::new(self.peak_force).map_err(DriveRecoveryError::PeakForce)?;
        StrictlyPositive::new(self.drive_fraction).map_err(DriveRecoveryError::DriveFraction)?;
        if self.drive_fraction >= 1.0 {
            return Err(DriveRecoveryError::DriveFraction(
                ConstraintError::AboveMaximum,
            ));
        }
        if !self.recovery_force.is_finite() {
            return Err(DriveRecoveryError::RecoveryForce(
                ConstraintError::NotANumber,
            ));
        }
        Ok(())
    }
}

/// A typical recreational stroke: 40% drive peaking at 250 N, light braking on recovery.
impl Default for DriveRecoveryShape {
    fn default() -> Self {
        Self::newtons(250.0, 0.4, -15.0)
    }
}

/// Partial [`DriveRecoveryShape`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DriveRecoveryShapeOverrides {
    pub peak_force: Option<Force>,
    pub drive_fraction: Option<f64>,
    pub recovery_force: Option<Force>,
}

impl Overridable for DriveRecoveryShape {
    type Overrides = DriveRecoveryShapeOverrides;

    fn with_overrides(self, overrides: &DriveRecoveryShapeOverrides) -> Self {
        Self {
            peak_force: overrides.peak_force.unwrap_or(self.peak_force),
            drive_fraction: overrides.drive_fraction.unwrap_or(self.drive_fraction),
            recovery_force: overrides.recovery_force.unwrap_or(self.recovery_force),
        }
    }
}

/// Errors returned when a [`DriveRecoveryShape`] is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DriveRecoveryError {
    #[error("invalid peak force: {0}")]
    PeakForce(ConstraintError),
    #[error("invalid drive fraction, expected 0 < f < 1: {0}")]
    DriveFraction(ConstraintError),
    #[error("invalid recovery force: {0}")]
    RecoveryForce(ConstraintError),
}

impl StrokeModel for DriveRecoveryStroke {
    type Shape = DriveRecoveryShape;
    type Error = DriveRecoveryError;

    fn force_at_phase(
        &self,
        stroke: &StrokeParameters<DriveRecoveryShape>,
        phase: Phase,
    ) -> Result<StrokeOutput, Self::Error> {
        let shape = stroke.shape();
        shape.validate()?;

        let p = phase.value();
        let forward_force = if p < shape.drive_fraction {
            shape.peak_force * (PI * p / shape.drive_fraction).sin()
        } else {
            shape.recovery_force
        };

        Ok(StrokeOutput { forward_force })
    }
}
