use crate::aspects::AspectRecord;
use crate::ephemeris::PlanetaryPosition;
use crate::houses::{AngleSystem, ChartAngle, HouseCusp};
use serde::{Deserialize, Serialize};

/// Geographic coordinates in degrees, north and east positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Birth data as entered by the user once the place is resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    /// Display only
    #[serde(default)]
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24 hour clock
    pub time: String,
    pub coordinates: Option<Coordinates>,
    /// Offset of the local clock east of UTC. `None` uses local time as UT.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
    /// Display label for the time zone, e.g. `Asia/Kolkata`
    #[serde(default)]
    pub timezone: Option<String>,
}

impl BirthInput {
    pub fn new(name: impl Into<String>, date: impl Into<String>, time: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            time: time.into(),
            coordinates: Some(Coordinates { lat, lng }),
            utc_offset_minutes: None,
            timezone: None,
        }
    }

    pub fn with_utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = Some(minutes);
        self
    }

    pub fn with_timezone(mut self, label: impl Into<String>) -> Self {
        self.timezone = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetadata {
    /// 5 decimals
    pub julian_day: f64,
    /// Civil time as entered, `YYYY-MM-DD HH:MM:SS`
    pub local_time: String,
    /// Time fed to the Julian Day formula, ISO 8601 with `Z`
    pub utc_time: String,
    pub timezone: String,
    pub coordinates: Coordinates,
    pub angle_system: AngleSystem,
}

/// Complete natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthChart {
    pub ascendant: ChartAngle,
    pub midheaven: ChartAngle,
    /// Sun through Pluto
    pub planets: Vec<PlanetaryPosition>,
    /// Houses 1-12 in order
    pub houses: Vec<HouseCusp>,
    pub aspects: Vec<AspectRecord>,
    pub metadata: ChartMetadata,
}

impl BirthChart {
    pub fn planet(&self, planet: crate::ephemeris::Planet) -> Option<&PlanetaryPosition> {
        self.planets.iter().find(|p| p.planet == planet)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
