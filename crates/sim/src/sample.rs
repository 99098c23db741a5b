use uom::si::f64::{Force, Length, Time, Velocity};

/// The recorded state of the boat at one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub time: Time,

    /// Sum of every paddler's strength-scaled forward force.
    pub paddle_force: Force,

    /// Hydrodynamic drag, reported as a non-negative magnitude opposing motion.
    pub drag_force: Force,

    /// `paddle_force - drag_force`.
    pub net_force: Force,

    /// Speed after this step's update. Never negative.
    pub speed: Velocity,

    /// Distance travelled since `t = 0`. Never decreases.
    pub distance: Length,
}
