use std::fmt;

use paddle_core::constraint::ConstraintError;
use thiserror::Error;

/// A configuration value checked before the simulation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Mass,
    DragCoefficient,
    InitialSpeed,
    Duration,
    TimeStep,
    /// The number of steps implied by `duration / time_step`.
    StepCount,
    StrokeRate,
    /// The phase offset of the paddler at this roster index.
    PhaseOffset { paddler: usize },
    /// The strength factor of the paddler at this roster index.
    StrengthFactor { paddler: usize },
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mass => f.write_str("mass"),
            Self::DragCoefficient => f.write_str("drag coefficient"),
            Self::InitialSpeed => f.write_str("initial speed"),
            Self::Duration => f.write_str("simulation duration"),
            Self::TimeStep => f.write_str("time step"),
            Self::StepCount => f.write_str("step count"),
            Self::StrokeRate => f.write_str("stroke rate"),
            Self::PhaseOffset { paddler } => write!(f, "phase offset of paddler {paddler}"),
            Self::StrengthFactor { paddler } => {
                write!(f, "strength factor of paddler {paddler}")
            }
        }
    }
}

/// A parameter failed validation, so the simulation was never started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {parameter}: {source}")]
pub struct ConfigurationError {
    pub parameter: Parameter,
    #[source]
    pub source: ConstraintError,
}

impl ConfigurationError {
    #[must_use]
    pub fn new(parameter: Parameter, source: ConstraintError) -> Self {
        Self { parameter, source }
    }

    /// Returns a closure mapping a [`ConstraintError`] onto `parameter`.
    pub(crate) fn of(parameter: Parameter) -> impl Fn(ConstraintError) -> Self {
        move |source| Self::new(parameter, source)
    }
}

/// Error returned by [`simulate`](crate::simulate).
///
/// Either the configuration was rejected before any stepping began, or the
/// stroke model failed and its error is passed through unchanged.
/// No partial result is ever returned.
#[derive(Debug, Error)]
pub enum Error<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("stroke model failed: {0}")]
    StrokeModel(#[source] E),
}
