//! Reference-epoch planet model.
//!
//! Every body is held at its longitude for one fixed moment (2004-02-12
//! 11:25 local time at Akola, India) and moved linearly at a constant mean
//! daily motion. Retrograde status is therefore fixed per body.

use crate::ephemeris::types::{Planet, PlanetaryPosition};
use crate::zodiac::{degrees_to_sign, normalize_degrees, round_longitude, round_to};

/// Julian Day of the reference snapshot.
pub const REFERENCE_JULIAN_DAY: f64 = 2453047.74653;

/// (body, longitude at the reference epoch, mean daily motion)
const REFERENCE_TABLE: &[(Planet, f64, f64)] = &[
    (Planet::Sun, 322.847, 1.0114),
    (Planet::Moon, 215.738, 13.8577),
    (Planet::Mercury, 307.793, 1.5732),
    (Planet::Venus, 4.201, 1.1745),
    (Planet::Mars, 35.618, 0.6378),
    (Planet::Jupiter, 166.563, -0.1105),
    (Planet::Saturn, 96.835, -0.0439),
    (Planet::Uranus, 332.220, 0.0570),
    (Planet::Neptune, 313.241, 0.0376),
    (Planet::Pluto, 261.776, 0.0222),
];

/// Linear extrapolation from the reference snapshot.
#[derive(Debug, Clone, Default)]
pub struct ReferenceEphemeris;

impl ReferenceEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Reference longitude and daily motion for a body.
    pub fn elements(&self, planet: Planet) -> (f64, f64) {
        REFERENCE_TABLE
            .iter()
            .find(|(p, _, _)| *p == planet)
            .map(|(_, lon, speed)| (*lon, *speed))
            .unwrap_or((0.0, 0.0))
    }

    /// Unrounded longitude of `planet` at `julian_day`, in [0, 360).
    pub fn longitude(&self, planet: Planet, julian_day: f64) -> f64 {
        let (reference_lon, speed) = self.elements(planet);
        normalize_degrees(reference_lon + (julian_day - REFERENCE_JULIAN_DAY) * speed)
    }

    /// Positions of all ten bodies, in [`Planet::ALL`] order.
    pub fn calculate_planetary_positions(&self, julian_day: f64) -> Vec<PlanetaryPosition> {
        let days = julian_day - REFERENCE_JULIAN_DAY;
        log::debug!("projecting planets {:.5} days from the reference epoch", days);

        REFERENCE_TABLE
            .iter()
            .map(|&(planet, reference_lon, speed)| {
                let longitude = normalize_degrees(reference_lon + days * speed);
                let position = degrees_to_sign(longitude);

                PlanetaryPosition {
                    planet,
                    symbol: planet.symbol().to_string(),
                    longitude: round_longitude(longitude),
                    sign: position.sign,
                    degree_in_sign: position.degree_in_sign,
                    speed: round_to(speed, 4),
                    house: equal_house_number(longitude),
                    is_retrograde: speed < 0.0,
                }
            })
            .collect()
    }
}

/// House from 0° Aries in 30° steps, ignoring the Ascendant.
pub fn equal_house_number(longitude: f64) -> u8 {
    ((normalize_degrees(longitude) / 30.0).floor() as u8 % 12) + 1
}
