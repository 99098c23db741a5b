use paddle_core::constraint::{Constrained, ConstraintError, StrictlyPositive};
use uom::si::{f64::Time, time::second};

use crate::{ConfigurationError, Parameter};

/// One paddler in the roster.
///
/// The `id` and `label` are carried through to the result untouched.
/// Paddlers differ only by when they start their stroke (`phase_offset`) and
/// how hard they pull (`strength_factor`); the stroke shape is shared.
///
/// # Example
///
/// ```
/// use paddle_sim::Paddler;
///
/// let stroke_side = Paddler::new("seat-1").with_label("Stroke");
/// let engine_room = Paddler::new("seat-3").with_phase_offset(0.05).with_strength(1.2);
///
/// assert_eq!(stroke_side.strength_factor(), 1.0);
/// assert_eq!(engine_room.strength_factor(), 1.2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Paddler {
    pub id: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub label: Option<String>,

    /// Fraction of a stroke cycle this paddler is ahead by, expected in `[0, 1)`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub phase_offset: f64,

    /// Multiplier on this paddler's force. Defaults to 1 when absent.
    ///
    /// Any finite value is allowed: a negative factor is a paddler working
    /// against the boat.
    #[cfg_attr(feature = "serde", serde(default))]
    pub strength_factor: Option<f64>,
}

impl Paddler {
    /// Creates an in-phase, full-strength paddler.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_phase_offset(mut self, phase_offset: f64) -> Self {
        self.phase_offset = phase_offset;
        self
    }

    #[must_use]
    pub fn with_strength(mut self, strength_factor: f64) -> Self {
        self.strength_factor = Some(strength_factor);
        self
    }

    /// Returns the effective strength factor.
    #[must_use]
    pub fn strength_factor(&self) -> f64 {
        self.strength_factor.unwrap_or(1.0)
    }
}

/// A paddler with the timing the simulator derived for this run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    pub paddler: Paddler,

    /// `phase_offset * stroke_period`.
    pub phase_offset_seconds: Time,

    /// The paddler's strength factor, or 1 if none was given.
    pub strength_factor: f64,
}

impl RosterEntry {
    /// Derives the per-run timing for `paddler`, the `index`-th in the roster.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the phase offset or the strength
    /// factor is not finite.
    pub(crate) fn resolve(
        index: usize,
        paddler: &Paddler,
        stroke_period: Constrained<Time, StrictlyPositive>,
    ) -> Result<Self, ConfigurationError> {
        if !paddler.phase_offset.is_finite() {
            return Err(ConfigurationError::new(
                Parameter::PhaseOffset { paddler: index },
                ConstraintError::NotANumber,
            ));
        }

        let strength_factor = paddler.strength_factor();
        if !strength_factor.is_finite() {
            return Err(ConfigurationError::new(
                Parameter::StrengthFactor { paddler: index },
                ConstraintError::NotANumber,
            ));
        }

        let period = stroke_period.get().get::<second>();
        Ok(Self {
            paddler: paddler.clone(),
            phase_offset_seconds: Time::new::<second>(paddler.phase_offset * period),
            strength_factor,
        })
    }
}
