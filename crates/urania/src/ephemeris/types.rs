use crate::zodiac::ZodiacSign;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bodies tracked by the chart, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    pub const ALL: [Planet; 10] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Planet::Sun => "☉",
            Planet::Moon => "☽",
            Planet::Mercury => "☿",
            Planet::Venus => "♀",
            Planet::Mars => "♂",
            Planet::Jupiter => "♃",
            Planet::Saturn => "♄",
            Planet::Uranus => "♅",
            Planet::Neptune => "♆",
            Planet::Pluto => "♇",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of one body in the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetaryPosition {
    pub planet: Planet,
    pub symbol: String,
    /// Ecliptic longitude in degrees [0, 360), 3 decimals
    pub longitude: f64,
    pub sign: ZodiacSign,
    /// Degrees into `sign`, 2 decimals
    pub degree_in_sign: f64,
    /// Mean daily motion in degrees/day (signed), 4 decimals
    pub speed: f64,
    /// Equal 30° segment from 0° Aries, 1-12
    pub house: u8,
    pub is_retrograde: bool,
}
