use std::{convert::Infallible, fmt};

use paddle_core::{Phase, StrokeModel, StrokeOutput, StrokeParameters};
use uom::si::f64::Force;

/// Adapts a closure `Fn(Phase) -> Force` into a [`StrokeModel`].
///
/// The closure must be pure for the simulation to stay deterministic.
///
/// # Example
///
/// ```
/// use paddle_core::{Phase, StrokeConfig, StrokeModel, StrokeParameters};
/// use paddle_strokes::FnStroke;
/// use uom::si::{f64::Force, force::newton};
///
/// let ramp = FnStroke::new(|phase: Phase| Force::new::<newton>(100.0 * phase.value()));
/// let stroke = StrokeParameters::from_config(StrokeConfig::<()>::default()).unwrap();
///
/// let output = ramp.force_at_phase(&stroke, Phase::new(0.5).unwrap()).unwrap();
/// assert_eq!(output.forward_force.get::<newton>(), 50.0);
/// ```
#[derive(Clone, Copy)]
pub struct FnStroke<F> {
    force: F,
}

impl<F> FnStroke<F>
where
    F: Fn(Phase) -> Force,
{
    pub fn new(force: F) -> Self {
        Self { force }
    }
}

impl<F> fmt::Debug for FnStroke<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStroke").finish_non_exhaustive()
    }
}

impl<F> StrokeModel for FnStroke<F>
where
    F: Fn(Phase) -> Force,
{
    type Shape = ();
    type Error = Infallible;

    fn force_at_phase(
        &self,
        _stroke: &StrokeParameters<()>,
        phase: Phase,
    ) -> Result<StrokeOutput, Self::Error> {
        Ok(StrokeOutput {
            forward_force: (self.force)(phase),
        })
    }
}
