use super::{AngleProvider, AngleSystem};

/// Ascendant of the reference chart (Taurus 16.62°).
pub const REFERENCE_ASCENDANT: f64 = 46.619;
/// Midheaven of the reference chart (Aquarius 5.22°).
pub const REFERENCE_MIDHEAVEN: f64 = 305.222;

pub const REFERENCE_CUSPS: [f64; 12] = [
    46.619,  // Taurus 16.62
    74.914,  // Gemini 14.91
    99.813,  // Cancer 9.81
    125.222, // Leo 5.22
    154.448, // Virgo 4.45
    189.259, // Libra 9.26
    226.619, // Scorpio 16.62
    254.914, // Sagittarius 14.91
    279.813, // Capricorn 9.81
    305.222, // Aquarius 5.22
    334.448, // Pisces 4.45
    9.259,   // Aries 9.26
];

/// Angles of the 2004-02-12 11:25 Akola chart, returned for every input.
///
/// Sidereal time, latitude and the Julian Day are accepted and ignored, so
/// every chart built with this provider shares one rising sign and one set
/// of cusps. [`EqualHouseAngles`](super::EqualHouseAngles) computes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceAngles;

impl AngleProvider for ReferenceAngles {
    fn system(&self) -> AngleSystem {
        AngleSystem::Reference
    }

    fn ascendant(&self, _lst: f64, _latitude: f64, _julian_day: f64) -> f64 {
        REFERENCE_ASCENDANT
    }

    fn midheaven(&self, _lst: f64, _latitude: f64, _julian_day: f64) -> f64 {
        REFERENCE_MIDHEAVEN
    }

    fn house_cusps(&self, _ascendant: f64, _midheaven: f64, _latitude: f64) -> [f64; 12] {
        REFERENCE_CUSPS
    }
}
