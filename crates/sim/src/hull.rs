use paddle_core::{StepIntegrable, units::DragCoefficient};
use uom::{
    ConstZero,
    si::f64::{Acceleration, Force, Length, Time, Velocity},
};

/// Kinematic state of the hull.
///
/// `speed` is only ever negative before the first step, when it holds a
/// negative configured initial speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HullState {
    pub(crate) speed: Velocity,
    pub(crate) distance: Length,
}

impl HullState {
    /// The hull at `t = 0`, at the origin.
    pub(crate) fn launched_at(speed: Velocity) -> Self {
        Self {
            speed,
            distance: Length::ZERO,
        }
    }

    /// Speed with backward travel floored to zero.
    pub(crate) fn forward_speed(&self) -> Velocity {
        self.speed.max(Velocity::ZERO)
    }

    /// Quadratic drag opposing forward motion. Never negative.
    pub(crate) fn drag(&self, coefficient: DragCoefficient) -> Force {
        let speed = self.forward_speed();
        coefficient * speed * speed
    }
}

/// Explicit Euler with a no-reverse clamp.
///
/// ```text
///   v_{n+1} = max(v_n + a_n * dt, 0)
///   x_{n+1} = x_n + v_{n+1} * dt
/// ```
///
/// Velocity is clamped before it advances position, so distance never
/// decreases.
impl StepIntegrable<Time> for HullState {
    type Derivative = Acceleration;

    fn step(&self, acceleration: Acceleration, dt: Time) -> Self {
        let speed = (self.speed + acceleration * dt).max(Velocity::ZERO);
        Self {
            speed,
            distance: self.distance + speed * dt,
        }
    }
}
