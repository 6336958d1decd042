//! Zodiac sign lookup and the fixed output roundings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve tropical signs, 30° each, starting at 0° Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign at `index`, wrapping past Pisces.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn glyph(self) -> &'static str {
        const GLYPHS: [&str; 12] = [
            "♈", "♉", "♊", "♋", "♌", "♍", "♎", "♏", "♐", "♑", "♒", "♓",
        ];
        GLYPHS[self.index()]
    }

    /// Longitude where the sign begins.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * 30.0
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A longitude expressed as sign plus degrees into that sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacPosition {
    pub sign: ZodiacSign,
    /// Rounded to 2 decimals.
    pub degree_in_sign: f64,
}

/// Reduce any longitude into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Sign index (0-11) for a longitude in any range.
pub fn sign_index(longitude: f64) -> usize {
    ((normalize_degrees(longitude) / 30.0).floor() as usize) % 12
}

/// Convert an ecliptic longitude to sign and degree within sign.
///
/// The normalised longitude is snapped to 1e-9° first so that `x` and
/// `x + 360k` land on the same double before rounding.
pub fn degrees_to_sign(longitude: f64) -> ZodiacPosition {
    let normalized = normalize_degrees(round_to(normalize_degrees(longitude), 9));
    ZodiacPosition {
        sign: ZodiacSign::from_index(sign_index(normalized)),
        degree_in_sign: round_to(normalized % 30.0, 2),
    }
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Longitude-class output rounding (3 decimals), kept inside [0, 360).
pub fn round_longitude(longitude: f64) -> f64 {
    normalize_degrees(round_to(normalize_degrees(longitude), 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_index_wraps() {
        assert_eq!(sign_index(0.0), 0);
        assert_eq!(sign_index(29.999), 0);
        assert_eq!(sign_index(30.0), 1);
        assert_eq!(sign_index(359.999_999_999), 11);
        assert_eq!(sign_index(-0.000_000_000_001), 11);
        assert_eq!(sign_index(720.0), 0);
    }

    #[test]
    fn test_round_longitude_never_reaches_360() {
        assert_eq!(round_longitude(359.9999), 0.0);
        assert_eq!(round_longitude(46.6194), 46.619);
    }

    #[test]
    fn test_sign_names_and_glyphs() {
        assert_eq!(ZodiacSign::Aquarius.to_string(), "Aquarius");
        assert_eq!(ZodiacSign::Aries.glyph(), "♈");
        assert_eq!(ZodiacSign::from_index(13), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::Leo.start_longitude(), 120.0);
    }
}
