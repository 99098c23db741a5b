use uom::{
    ConstZero,
    si::f64::{Force, Length, Time, Velocity},
};

use crate::Sample;

/// Statistics reduced from a completed run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// The configured duration, not the time of the last sample.
    pub total_time: Time,
    pub final_speed: Velocity,
    pub final_distance: Length,

    /// Unweighted mean over every sample, including `t = 0`.
    pub average_speed: Velocity,

    /// Unweighted mean over every sample, including `t = 0`.
    pub average_net_force: Force,

    pub peak_speed: Velocity,

    /// Number of integration steps; one less than the number of samples.
    pub steps: usize,
}

impl Summary {
    /// Reduces a sample sequence.
    ///
    /// Averages treat every sample equally rather than weighting by time.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn from_samples(samples: &[Sample], total_time: Time) -> Self {
        let count = samples.len() as f64;

        let (speed_sum, net_force_sum, peak_speed) = samples.iter().fold(
            (Velocity::ZERO, Force::ZERO, Velocity::ZERO),
            |(speed_sum, net_force_sum, peak_speed), sample| {
                (
                    speed_sum + sample.speed,
                    net_force_sum + sample.net_force,
                    peak_speed.max(sample.speed),
                )
            },
        );

        let (final_speed, final_distance) = samples
            .last()
            .map_or((Velocity::ZERO, Length::ZERO), |last| {
                (last.speed, last.distance)
            });

        Self {
            total_time,
            final_speed,
            final_distance,
            average_speed: speed_sum / count,
            average_net_force: net_force_sum / count,
            peak_speed,
            steps: samples.len().saturating_sub(1),
        }
    }
}
