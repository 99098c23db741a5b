use paddle_core::StrokeParameters;

use crate::{BoatParameters, RosterEntry, Sample, Summary};

/// The complete outcome of one simulation run.
///
/// Echoes every resolved input alongside the trajectory, so a result fully
/// describes how it was produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult<S> {
    samples: Vec<Sample>,
    summary: Summary,
    boat: BoatParameters,
    stroke: StrokeParameters<S>,
    roster: Vec<RosterEntry>,
}

impl<S> SimulationResult<S> {
    pub(crate) fn new(
        samples: Vec<Sample>,
        boat: BoatParameters,
        stroke: StrokeParameters<S>,
        roster: Vec<RosterEntry>,
    ) -> Self {
        let summary = Summary::from_samples(&samples, boat.duration());
        Self {
            samples,
            summary,
            boat,
            stroke,
            roster,
        }
    }

    /// Samples in step order; index `0` is the initial condition.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn boat(&self) -> &BoatParameters {
        &self.boat
    }

    pub fn stroke(&self) -> &StrokeParameters<S> {
        &self.stroke
    }

    /// The roster with derived phase offsets, in input order.
    pub fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }
}
