use crate::zodiac::{degrees_to_sign, round_longitude, ZodiacSign};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which [`AngleProvider`](super::AngleProvider) produced a chart's angles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleSystem {
    /// Fixed reference chart, identical for every input.
    #[default]
    Reference,
    /// Ascendant and MC from sidereal time, equal 30° houses.
    Equal,
}

impl AngleSystem {
    pub const VALID: [&'static str; 2] = ["reference", "equal"];

    pub fn as_str(self) -> &'static str {
        match self {
            AngleSystem::Reference => "reference",
            AngleSystem::Equal => "equal",
        }
    }
}

impl fmt::Display for AngleSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid angle system: {name}. Valid systems: {valid:?}")]
pub struct UnknownAngleSystem {
    pub name: String,
    pub valid: Vec<String>,
}

impl FromStr for AngleSystem {
    type Err = UnknownAngleSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reference" | "fixed" => Ok(AngleSystem::Reference),
            "equal" => Ok(AngleSystem::Equal),
            _ => Err(UnknownAngleSystem {
                name: s.to_string(),
                valid: AngleSystem::VALID.iter().map(|v| v.to_string()).collect(),
            }),
        }
    }
}

/// Ascendant or Midheaven
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAngle {
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree_in_sign: f64,
}

impl ChartAngle {
    pub fn from_longitude(longitude: f64) -> Self {
        let position = degrees_to_sign(longitude);
        Self {
            longitude: round_longitude(longitude),
            sign: position.sign,
            degree_in_sign: position.degree_in_sign,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseCusp {
    pub house: u8,
    pub longitude: f64,
    pub sign: ZodiacSign,
    pub degree_in_sign: f64,
}

impl HouseCusp {
    pub fn new(house: u8, longitude: f64) -> Self {
        let position = degrees_to_sign(longitude);
        Self {
            house,
            longitude: round_longitude(longitude),
            sign: position.sign,
            degree_in_sign: position.degree_in_sign,
        }
    }
}
