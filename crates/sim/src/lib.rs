//! Fixed-step simulation of a multi-paddler boat.
//!
//! The hull is a point mass pushed by several paddlers, each following the
//! same stroke shape but shifted in phase and scaled in strength, and slowed
//! by quadratic drag.
//! The boat never travels backwards.
//!
//! # Example
//!
//! ```
//! use paddle_core::StrokeOverrides;
//! use paddle_sim::{BoatOverrides, Paddler, simulate};
//! use paddle_strokes::DriveRecoveryStroke;
//! use uom::si::velocity::meter_per_second;
//!
//! let crew = [
//!     Paddler::new("bow"),
//!     Paddler::new("stern").with_phase_offset(0.1).with_strength(0.9),
//! ];
//! let boat = BoatOverrides::default().duration_si(30.0).time_step_si(0.05);
//!
//! let result = simulate(&DriveRecoveryStroke, &crew, &boat, &StrokeOverrides::default())?;
//!
//! assert_eq!(result.samples().len(), 601);
//! assert!(result.summary().final_speed.get::<meter_per_second>() > 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod boat;
mod error;
mod hull;
mod paddler;
mod result;
mod sample;
mod summary;

pub use boat::{BoatConfig, BoatOverrides, BoatParameters, MAX_STEPS};
pub use error::{ConfigurationError, Error, Parameter};
pub use paddler::{Paddler, RosterEntry};
pub use result::SimulationResult;
pub use sample::Sample;
pub use summary::Summary;

use log::debug;
use paddle_core::{
    DerivativeOf, Overridable, Phase, StepIntegrable, StrokeConfig, StrokeModel, StrokeOverrides,
    StrokeParameters,
};
use uom::{
    ConstZero,
    si::{
        f64::{Force, Time},
        length::meter,
        time::second,
        velocity::meter_per_second,
    },
};

use crate::hull::HullState;

/// Stroke overrides for the shape used by model `M`.
pub type StrokeOverridesFor<M> =
    StrokeOverrides<<<M as StrokeModel>::Shape as Overridable>::Overrides>;

/// Simulates a boat paddled by `paddlers` and returns its full trajectory.
///
/// # Algorithm
///
/// 1. Merge `boat` and `stroke` overrides onto their defaults and validate.
/// 2. Derive each paddler's phase offset in seconds from the stroke period.
/// 3. Record the initial condition as sample 0.
/// 4. For each step `i` in `1..=steps`, at `t = i * time_step`:
///    - Query `model` once per paddler at that paddler's phase, scale by
///      strength, and sum into the paddle force.
///    - Compute drag from the current (pre-update) speed.
///    - Advance the hull by explicit Euler, flooring speed at zero before it
///      advances distance.
///    - Record a [`Sample`].
/// 5. Reduce the samples into a [`Summary`].
///
/// `steps` is `max(1, floor(duration / time_step))`, so a run always holds at
/// least two samples.
///
/// # Errors
///
/// - [`Error::Configuration`] before any stepping if mass, stroke rate, time
///   step or duration is not strictly positive (or any other check in
///   [`BoatParameters::from_config`] fails, or a paddler's phase offset or
///   strength factor is not finite).
/// - [`Error::StrokeModel`] carrying the model's own error, unchanged, if the
///   model fails at any step.
pub fn simulate<M>(
    model: &M,
    paddlers: &[Paddler],
    boat: &BoatOverrides,
    stroke: &StrokeOverridesFor<M>,
) -> Result<SimulationResult<M::Shape>, Error<M::Error>>
where
    M: StrokeModel,
    M::Shape: Overridable + Default,
{
    let boat = BoatParameters::from_config(BoatConfig::default().with_overrides(boat))?;
    let stroke = StrokeConfig::<M::Shape>::default().with_overrides(stroke);
    let stroke = StrokeParameters::from_config(stroke)
        .map_err(ConfigurationError::of(Parameter::StrokeRate))?;
    let roster = paddlers
        .iter()
        .enumerate()
        .map(|(index, paddler)| RosterEntry::resolve(index, paddler, stroke.period()))
        .collect::<Result<Vec<_>, _>>()?;

    let steps = boat.steps();
    let dt = boat.time_step();

    debug!(
        "simulating {} paddler(s) over {} steps of {} s at {} strokes/min",
        roster.len(),
        steps,
        dt.get::<second>(),
        stroke.rate().strokes_per_minute(),
    );

    let mut samples = Vec::with_capacity(steps + 1);

    let mut hull = HullState::launched_at(boat.initial_speed());
    let forces = Forces::at(model, &stroke, &roster, &boat, &hull, Time::ZERO)?;
    samples.push(forces.record(Time::ZERO, &hull));

    for step in 1..=steps {
        #[allow(clippy::cast_precision_loss)]
        let time = dt * step as f64;

        let forces = Forces::at(model, &stroke, &roster, &boat, &hull, time)?;
        let acceleration: DerivativeOf<HullState, Time> = forces.net / boat.mass();
        hull = hull.step(acceleration, dt);
        samples.push(forces.record(time, &hull));
    }

    let result = SimulationResult::new(samples, boat, stroke, roster);

    let summary = result.summary();
    debug!(
        "finished after {} steps: {:.3} m at {:.3} m/s",
        summary.steps,
        summary.final_distance.get::<meter>(),
        summary.final_speed.get::<meter_per_second>(),
    );

    Ok(result)
}

/// Forces acting on the hull at one instant.
#[derive(Debug, Clone, Copy)]
struct Forces {
    paddle: Force,
    drag: Force,
    net: Force,
}

impl Forces {
    /// Sums paddler forces at `time` and applies drag at the hull's current speed.
    fn at<M: StrokeModel>(
        model: &M,
        stroke: &StrokeParameters<M::Shape>,
        roster: &[RosterEntry],
        boat: &BoatParameters,
        hull: &HullState,
        time: Time,
    ) -> Result<Self, Error<M::Error>> {
        let period = stroke.period();

        let paddle = roster.iter().try_fold(Force::ZERO, |total, entry| {
            let phase = Phase::in_cycle(time + entry.phase_offset_seconds, period);
            let output = model.force_at_phase(stroke, phase)?;
            Ok::<_, M::Error>(total + output.forward_force * entry.strength_factor)
        });
        let paddle = paddle.map_err(Error::StrokeModel)?;
        let drag = hull.drag(boat.drag_coefficient());

        Ok(Self {
            paddle,
            drag,
            net: paddle - drag,
        })
    }

    fn record(self, time: Time, hull: &HullState) -> Sample {
        Sample {
            time,
            paddle_force: self.paddle,
            drag_force: self.drag,
            net_force: self.net,
            speed: hull.forward_speed(),
            distance: hull.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;
    use paddle_core::{StrokeOutput, constraint::ConstraintError};
    use paddle_strokes::{ConstantStroke, DriveRecoveryShapeOverrides, DriveRecoveryStroke};
    use uom::si::{force::newton, velocity::meter_per_second};

    /// Records every phase it is asked about and returns a constant force.
    #[derive(Default)]
    struct PhaseRecorder {
        phases: std::cell::RefCell<Vec<f64>>,
        calls: Cell<usize>,
    }

    impl StrokeModel for PhaseRecorder {
        type Shape = ();
        type Error = std::convert::Infallible;

        fn force_at_phase(
            &self,
            _stroke: &StrokeParameters<()>,
            phase: Phase,
        ) -> Result<StrokeOutput, Self::Error> {
            self.calls.set(self.calls.get() + 1);
            self.phases.borrow_mut().push(phase.value());
            Ok(StrokeOutput::newtons(100.0))
        }
    }

    fn short_run() -> BoatOverrides {
        BoatOverrides::default().duration_si(1.0).time_step_si(0.25)
    }

    #[test]
    fn model_is_called_once_per_paddler_per_sample() {
        let model = PhaseRecorder::default();
        let crew = [Paddler::new("a"), Paddler::new("b"), Paddler::new("c")];

        let result = simulate(&model, &crew, &short_run(), &StrokeOverrides::default()).unwrap();

        assert_eq!(result.samples().len(), 5);
        assert_eq!(model.calls.get(), 3 * 5);
    }

    #[test]
    fn phases_follow_offsets_and_wrap() {
        let model = PhaseRecorder::default();
        let crew = [Paddler::new("late").with_phase_offset(0.5)];
        let stroke = StrokeOverrides {
            stroke_rate: Some(120.0),
            shape: (),
        };

        simulate(&model, &crew, &short_run(), &stroke).unwrap();

        // Period 0.5 s; samples at 0, 0.25, 0.5, 0.75, 1.0 s, offset 0.25 s.
        let phases = model.phases.borrow();
        let expected = [0.5, 0.0, 0.5, 0.0, 0.5];
        assert_eq!(phases.len(), expected.len());
        for (phase, expected) in phases.iter().zip(expected) {
            assert_relative_eq!(*phase, expected);
        }
    }

    #[test]
    fn roster_is_echoed_with_derived_offsets() {
        let crew = [
            Paddler::new("one").with_label("Stroke"),
            Paddler::new("two").with_phase_offset(0.25).with_strength(0.8),
        ];
        let stroke = StrokeOverrides {
            stroke_rate: Some(30.0),
            shape: Default::default(),
        };

        let result = simulate(&ConstantStroke, &crew, &short_run(), &stroke).unwrap();
        let roster = result.roster();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].paddler, crew[0]);
        assert_relative_eq!(roster[0].phase_offset_seconds.get::<second>(), 0.0);
        assert_relative_eq!(roster[1].phase_offset_seconds.get::<second>(), 0.5);
        assert_relative_eq!(roster[1].strength_factor, 0.8);
        assert_relative_eq!(result.stroke().rate().strokes_per_minute(), 30.0);
    }

    #[test]
    fn rejects_non_positive_stroke_rate() {
        let stroke = StrokeOverrides {
            stroke_rate: Some(0.0),
            shape: Default::default(),
        };

        let error = simulate(&ConstantStroke, &[], &short_run(), &stroke).unwrap_err();

        assert!(matches!(
            error,
            Error::Configuration(ConfigurationError {
                parameter: Parameter::StrokeRate,
                source: ConstraintError::Zero,
            })
        ));
    }

    #[test]
    fn rejects_bad_boat_parameters_before_calling_the_model() {
        let model = PhaseRecorder::default();
        let crew = [Paddler::new("a")];

        for boat in [
            short_run().mass_si(0.0),
            short_run().time_step_si(0.0),
            short_run().duration_si(-1.0),
        ] {
            let error = simulate(&model, &crew, &boat, &StrokeOverrides::default()).unwrap_err();
            assert!(matches!(error, Error::Configuration(_)));
        }
        assert_eq!(model.calls.get(), 0);
    }

    #[test]
    fn nan_strength_fails_before_stepping() {
        let model = PhaseRecorder::default();
        let crew = [Paddler::new("a"), Paddler::new("b").with_strength(f64::NAN)];

        let error = simulate(&model, &crew, &short_run(), &StrokeOverrides::default()).unwrap_err();

        assert!(matches!(
            error,
            Error::Configuration(ConfigurationError {
                parameter: Parameter::StrengthFactor { paddler: 1 },
                source: ConstraintError::NotANumber,
            })
        ));
        assert_eq!(model.calls.get(), 0);
    }

    #[test]
    fn stroke_model_errors_pass_through() {
        let crew = [Paddler::new("a")];
        let stroke = StrokeOverrides {
            stroke_rate: None,
            shape: DriveRecoveryShapeOverrides {
                drive_fraction: Some(1.5),
                ..Default::default()
            },
        };

        let error = simulate(&DriveRecoveryStroke, &crew, &short_run(), &stroke).unwrap_err();

        match error {
            Error::StrokeModel(source) => assert_eq!(
                source,
                paddle_strokes::DriveRecoveryError::DriveFraction(ConstraintError::AboveMaximum)
            ),
            Error::Configuration(error) => panic!("unexpected configuration error: {error}"),
        }
    }

    #[test]
    fn negative_initial_speed_is_recorded_as_stopped() {
        let boat = short_run().initial_speed_si(-2.0).drag_coefficient_si(0.0);

        let result = simulate(&ConstantStroke, &[], &boat, &Default::default()).unwrap();

        for sample in result.samples() {
            assert_eq!(sample.speed.get::<meter_per_second>(), 0.0);
            assert_eq!(sample.drag_force.get::<newton>(), 0.0);
        }
    }
}
