use paddle_core::StrokeOverrides;
use paddle_sim::{BoatOverrides, Paddler};
use serde::{Deserialize, de::DeserializeOwned};

/// A simulation scenario read from TOML.
///
/// Every table is optional; missing values fall back to the simulator's
/// defaults. Quantities are plain numbers in SI units.
///
/// ```toml
/// [boat]
/// mass = 350.0
/// time_step = 0.01
///
/// [stroke]
/// stroke_rate = 62.0
///
/// [stroke.shape]
/// peak_force = 260.0
///
/// [[paddlers]]
/// id = "seat-1"
/// label = "Stroke"
/// ```
///
/// The keys accepted under `[stroke.shape]` depend on the stroke model
/// chosen on the command line. Unknown keys are rejected in every table, so a
/// typo or a shape written for another model never falls back to a default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(
    default,
    deny_unknown_fields,
    bound(deserialize = "O: Deserialize<'de> + Default")
)]
pub struct Scenario<O> {
    pub boat: BoatOverrides,
    pub stroke: StrokeOverrides<O>,
    pub paddlers: Vec<Paddler>,
}

impl<O> Scenario<O>
where
    O: DeserializeOwned + Default,
{
    /// Parses a scenario from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the text is malformed or a value has the
    /// wrong type.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
