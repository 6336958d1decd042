use crate::ephemeris::Planet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Major aspects, in the order they are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectKind {
    /// Priority order: the first kind whose window contains a separation wins.
    pub const ALL: [AspectKind; 5] = [
        AspectKind::Conjunction,
        AspectKind::Opposition,
        AspectKind::Trine,
        AspectKind::Square,
        AspectKind::Sextile,
    ];

    /// Exact angle in degrees
    pub fn angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Opposition => 180.0,
            AspectKind::Trine => 120.0,
            AspectKind::Square => 90.0,
            AspectKind::Sextile => 60.0,
        }
    }

    /// Default tolerance around [`angle`](Self::angle)
    pub fn default_orb(self) -> f64 {
        match self {
            AspectKind::Sextile => 4.0,
            _ => 8.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Opposition => "Opposition",
            AspectKind::Trine => "Trine",
            AspectKind::Square => "Square",
            AspectKind::Sextile => "Sextile",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One aspect between an unordered pair of bodies.
///
/// `orb` holds the measured separation of the pair (0-180°, 2 decimals),
/// not its deviation from the exact aspect angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRecord {
    pub planet1: Planet,
    pub planet2: Planet,
    pub aspect: AspectKind,
    pub orb: f64,
}
