//! Quantity types not provided directly by `uom`.

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Force, Velocity},
        force::newton,
        velocity::meter_per_second,
    },
    typenum::{N1, P1, Z0},
};

/// Quadratic drag coefficient, in N/(m/s)² (dimensionally kg/m).
///
/// Multiplying by a velocity squared yields a [`Force`].
pub type DragCoefficient = Quantity<ISQ<N1, P1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`DragCoefficient`] from a value in N/(m/s)².
#[must_use]
pub fn drag_coefficient_si(value: f64) -> DragCoefficient {
    let unit_speed = Velocity::new::<meter_per_second>(1.0);
    Force::new::<newton>(value) / (unit_speed * unit_speed)
}
