//! Core traits and types for the Paddle boat simulator.
//!
//! This crate defines the shared abstractions the simulator and stroke models
//! build on:
//!
//! - [`StrokeModel`]: maps stroke parameters and a [`Phase`] to a forward force
//! - [`StrokeParameters`]: a validated [`StrokeRate`] plus a model-specific shape
//! - [`Overridable`]: merges partial overrides onto a complete configuration
//! - [`StepIntegrable`]: a state that advances by one explicit integration step
//! - [`constraint`]: numeric invariants enforced at construction

pub mod constraint;
pub mod units;

mod overrides;
mod phase;
mod step;
mod stroke;

pub use overrides::Overridable;
pub use phase::Phase;
pub use step::{DerivativeOf, StepIntegrable};
pub use stroke::{
    DEFAULT_STROKE_RATE, StrokeConfig, StrokeModel, StrokeOutput, StrokeOverrides,
    StrokeParameters, StrokeRate,
};
