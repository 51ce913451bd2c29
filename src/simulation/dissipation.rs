use std::fmt;

use crate::simulation::geometry::{maximum, square};

/// How a signal weakens with distance from its oscillator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DissipationModel {
    None,
    InverseLinear,
    InverseSquare,
}

impl DissipationModel {
    /// Every model, in cycling order
    pub const ALL: [DissipationModel; 3] = [
        DissipationModel::None,
        DissipationModel::InverseLinear,
        DissipationModel::InverseSquare,
    ];

    /// The model after this one, wrapping from the last back to the first
    pub fn next(self) -> Self {
        match self {
            DissipationModel::None => DissipationModel::InverseLinear,
            DissipationModel::InverseLinear => DissipationModel::InverseSquare,
            DissipationModel::InverseSquare => DissipationModel::None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DissipationModel::None => "no dissipation",
            DissipationModel::InverseLinear => "inverse linear",
            DissipationModel::InverseSquare => "inverse square",
        }
    }
}

impl fmt::Display for DissipationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attenuate `value` observed at `distance` from its source.
///
/// Distances below `start` are treated as `start`, so there is no
/// singularity at the source.
///
/// - inverse linear: `start · value / max(start, distance)`
/// - inverse square: `start² · value / max(start, distance)²`, i.e.
///   `(start / max(start, distance))² · value`
///
/// Both decaying models therefore return `value` unchanged at
/// `distance == start`.
pub fn dissipate(value: f64, distance: f64, model: DissipationModel, start: f64) -> f64 {
    match model {
        DissipationModel::None => value,
        DissipationModel::InverseLinear => start * value / maximum(start, distance),
        DissipationModel::InverseSquare => square(start) * value / square(maximum(start, distance)),
    }
}
