use std::convert::Infallible;

use paddle_core::{Overridable, Phase, StrokeModel, StrokeOutput, StrokeParameters};
use uom::si::{f64::Force, force::newton};

/// A stroke that produces the same forward force at every phase.
///
/// Useful as a reference input: with no drag, a single constant-force paddler
/// accelerates the hull uniformly.
///
/// # Example
///
/// ```
/// use paddle_core::{Phase, StrokeConfig, StrokeModel, StrokeParameters};
/// use paddle_strokes::{ConstantShape, ConstantStroke};
/// use uom::si::force::newton;
///
/// let stroke = StrokeParameters::from_config(StrokeConfig {
///     stroke_rate: 60.0,
///     shape: ConstantShape::newtons(300.0),
/// })
/// .unwrap();
///
/// let output = ConstantStroke.force_at_phase(&stroke, Phase::zero()).unwrap();
/// assert_eq!(output.forward_force.get::<newton>(), 300.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantStroke;

/// Shape of a [`ConstantStroke`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantShape {
    /// Force applied throughout the cycle.
    pub force: Force,
}

impl ConstantShape {
    /// Creates a shape from a force in newtons.
    #[must_use]
    pub fn newtons(force: f64) -> Self {
        Self {
            force: Force::new::<newton>(force),
        }
    }
}

impl Default for ConstantShape {
    fn default() -> Self {
        Self::newtons(300.0)
    }
}

/// Partial [`ConstantShape`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ConstantShapeOverrides {
    pub force: Option<Force>,
}

impl Overridable for ConstantShape {
    type Overrides = ConstantShapeOverrides;

    fn with_overrides(self, overrides: &ConstantShapeOverrides) -> Self {
        Self {
            force: overrides.force.unwrap_or(self.force),
        }
    }
}

impl StrokeModel for ConstantStroke {
    type Shape = ConstantShape;
    type Error = Infallible;

    fn force_at_phase(
        &self,
        stroke: &StrokeParameters<ConstantShape>,
        _phase: Phase,
    ) -> Result<StrokeOutput, Self::Error> {
        Ok(StrokeOutput {
            forward_force: stroke.shape().force,
        })
    }
}
