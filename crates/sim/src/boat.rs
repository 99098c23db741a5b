use paddle_core::{
    Overridable,
    constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive},
    units::{DragCoefficient, drag_coefficient_si},
};
use uom::si::{
    f64::{Mass, Time, Velocity},
    mass::kilogram,
    ratio::ratio,
    time::second,
    velocity::meter_per_second,
};

use crate::{ConfigurationError, Parameter};

/// Upper bound on `duration / time_step`, keeping the sample buffer allocatable.
pub const MAX_STEPS: usize = 10_000_000;

/// Unvalidated hull and run configuration.
///
/// The defaults describe a loaded six-seat outrigger canoe on a one-minute
/// piece, integrated at 100 Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoatConfig {
    pub mass: Mass,
    pub drag_coefficient: DragCoefficient,
    pub initial_speed: Velocity,
    pub duration: Time,
    pub time_step: Time,
}

impl Default for BoatConfig {
    fn default() -> Self {
        Self {
            mass: Mass::new::<kilogram>(350.0),
            drag_coefficient: drag_coefficient_si(30.0),
            initial_speed: Velocity::new::<meter_per_second>(0.0),
            duration: Time::new::<second>(60.0),
            time_step: Time::new::<second>(0.01),
        }
    }
}

/// Partial [`BoatConfig`]; every `Some` field replaces the default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BoatOverrides {
    pub mass: Option<Mass>,
    pub drag_coefficient: Option<DragCoefficient>,
    pub initial_speed: Option<Velocity>,
    pub duration: Option<Time>,
    pub time_step: Option<Time>,
}

impl BoatOverrides {
    /// Sets mass in SI units (kg).
    #[must_use]
    pub fn mass_si(mut self, mass: f64) -> Self {
        self.mass = Some(Mass::new::<kilogram>(mass));
        self
    }

    /// Sets the drag coefficient in SI units (N/(m/s)²).
    #[must_use]
    pub fn drag_coefficient_si(mut self, drag: f64) -> Self {
        self.drag_coefficient = Some(drag_coefficient_si(drag));
        self
    }

    /// Sets initial speed in SI units (m/s).
    #[must_use]
    pub fn initial_speed_si(mut self, speed: f64) -> Self {
        self.initial_speed = Some(Velocity::new::<meter_per_second>(speed));
        self
    }

    /// Sets the simulated duration in seconds.
    #[must_use]
    pub fn duration_si(mut self, duration: f64) -> Self {
        self.duration = Some(Time::new::<second>(duration));
        self
    }

    /// Sets the integration time step in seconds.
    #[must_use]
    pub fn time_step_si(mut self, time_step: f64) -> Self {
        self.time_step = Some(Time::new::<second>(time_step));
        self
    }
}

impl Overridable for BoatConfig {
    type Overrides = BoatOverrides;

    fn with_overrides(self, overrides: &BoatOverrides) -> Self {
        Self {
            mass: overrides.mass.unwrap_or(self.mass),
            drag_coefficient: overrides.drag_coefficient.unwrap_or(self.drag_coefficient),
            initial_speed: overrides.initial_speed.unwrap_or(self.initial_speed),
            duration: overrides.duration.unwrap_or(self.duration),
            time_step: overrides.time_step.unwrap_or(self.time_step),
        }
    }
}

/// Resolved, validated boat parameters for one run.
///
/// Serializes with the same fields as [`BoatConfig`] and deserializes through
/// [`BoatParameters::from_config`], so every check runs again.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BoatConfig", into = "BoatConfig")
)]
pub struct BoatParameters {
    mass: Constrained<Mass, StrictlyPositive>,
    drag_coefficient: Constrained<DragCoefficient, NonNegative>,
    initial_speed: Velocity,
    duration: Constrained<Time, StrictlyPositive>,
    time_step: Constrained<Time, StrictlyPositive>,
}

impl BoatParameters {
    /// Validates a [`BoatConfig`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if:
    ///
    /// - mass, duration, or time step is not strictly positive,
    /// - the drag coefficient is negative,
    /// - the initial speed is not finite,
    /// - `duration / time_step` exceeds [`MAX_STEPS`],
    ///
    /// or any of these is NaN.
    pub fn from_config(config: BoatConfig) -> Result<Self, ConfigurationError> {
        let BoatConfig {
            mass,
            drag_coefficient,
            initial_speed,
            duration,
            time_step,
        } = config;

        if !initial_speed.is_finite() {
            return Err(ConfigurationError::new(
                Parameter::InitialSpeed,
                ConstraintError::NotANumber,
            ));
        }

        let params = Self {
            mass: Constrained::new(mass).map_err(ConfigurationError::of(Parameter::Mass))?,
            drag_coefficient: Constrained::new(drag_coefficient)
                .map_err(ConfigurationError::of(Parameter::DragCoefficient))?,
            initial_speed,
            duration: Constrained::new(duration)
                .map_err(ConfigurationError::of(Parameter::Duration))?,
            time_step: Constrained::new(time_step)
                .map_err(ConfigurationError::of(Parameter::TimeStep))?,
        };

        // Also rejects an infinite duration, whose ratio is not finite either.
        let step_ratio = params.step_ratio();
        #[allow(clippy::cast_precision_loss)]
        let limit = (MAX_STEPS + 1) as f64;
        if step_ratio.is_nan() || step_ratio >= limit {
            return Err(ConfigurationError::new(
                Parameter::StepCount,
                ConstraintError::AboveMaximum,
            ));
        }

        Ok(params)
    }

    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass.get()
    }

    #[must_use]
    pub fn drag_coefficient(&self) -> DragCoefficient {
        self.drag_coefficient.get()
    }

    /// Speed at `t = 0`, as configured. May be negative.
    #[must_use]
    pub fn initial_speed(&self) -> Velocity {
        self.initial_speed
    }

    #[must_use]
    pub fn duration(&self) -> Time {
        self.duration.get()
    }

    #[must_use]
    pub fn time_step(&self) -> Time {
        self.time_step.get()
    }

    /// Returns the number of integration steps, `max(1, floor(duration / time_step))`.
    ///
    /// A run records `steps() + 1` samples, including the initial condition.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steps(&self) -> usize {
        (self.step_ratio().floor() as usize).max(1)
    }

    fn step_ratio(&self) -> f64 {
        (self.duration() / self.time_step()).get::<ratio>()
    }
}

impl TryFrom<BoatConfig> for BoatParameters {
    type Error = ConfigurationError;

    fn try_from(config: BoatConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}

impl From<BoatParameters> for BoatConfig {
    fn from(params: BoatParameters) -> Self {
        Self {
            mass: params.mass(),
            drag_coefficient: params.drag_coefficient(),
            initial_speed: params.initial_speed(),
            duration: params.duration(),
            time_step: params.time_step(),
        }
    }
}
