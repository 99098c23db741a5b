//! Ready-made [`StrokeModel`](paddle_core::StrokeModel) implementations.
//!
//! - [`ConstantStroke`]: the same force at every phase
//! - [`DriveRecoveryStroke`]: a half-sine drive followed by a flat recovery
//! - [`FnStroke`]: adapts a closure over [`Phase`](paddle_core::Phase)

mod constant;
mod drive_recovery;
mod from_fn;

pub use constant::{ConstantShape, ConstantShapeOverrides, ConstantStroke};
pub use drive_recovery::{
    DriveRecoveryError, DriveRecoveryShape, DriveRecoveryShapeOverrides, DriveRecoveryStroke,
};
pub use from_fn::FnStroke;
