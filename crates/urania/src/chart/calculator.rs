use crate::aspects::AspectCalculator;
use crate::chart::types::{BirthChart, BirthInput, ChartMetadata, Coordinates};
use crate::ephemeris::ReferenceEphemeris;
use crate::error::ChartError;
use crate::houses::{cusps_from_longitudes, provider_for, AngleProvider, AngleSystem, ChartAngle};
use crate::time::{calculate_local_sidereal_time, julian_day_for, TimeBasis};
use crate::zodiac::round_to;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

/// Stateless chart builder. Holds only configuration, so one instance can
/// serve concurrent callers.
pub struct ChartCalculator {
    angles: Box<dyn AngleProvider>,
    ephemeris: ReferenceEphemeris,
    aspects: AspectCalculator,
}

impl ChartCalculator {
    /// Calculator using the fixed reference angles
    pub fn new() -> Self {
        Self::with_angle_system(AngleSystem::Reference)
    }

    pub fn with_angle_system(system: AngleSystem) -> Self {
        Self::with_angle_provider(provider_for(system))
    }

    pub fn with_angle_provider(angles: Box<dyn AngleProvider>) -> Self {
        Self {
            angles,
            ephemeris: ReferenceEphemeris::new(),
            aspects: AspectCalculator::new(),
        }
    }

    pub fn with_aspect_calculator(mut self, aspects: AspectCalculator) -> Self {
        self.aspects = aspects;
        self
    }

    pub fn angle_system(&self) -> AngleSystem {
        self.angles.system()
    }

    /// Build the chart for `input`.
    ///
    /// Stages run in a fixed order: Julian Day, sidereal time, Ascendant,
    /// Midheaven, house cusps, planets, aspects, metadata.
    pub fn calculate(&self, input: &BirthInput) -> Result<BirthChart, ChartError> {
        let coordinates = validate_coordinates(input.coordinates)?;
        let local = parse_local_datetime(&input.date, &input.time)?;

        let basis = TimeBasis::from_offset_minutes(input.utc_offset_minutes);
        let universal = basis.to_universal(local).ok_or_else(|| ChartError::InvalidDateTime {
            date: input.date.clone(),
            time: input.time.clone(),
        })?;

        let julian_day = julian_day_for(&universal);
        let lst = calculate_local_sidereal_time(julian_day, coordinates.lng);
        log::debug!(
            "chart for {:?}: jd={:.5} lst={:.4} basis={:?}",
            input.name,
            julian_day,
            lst,
            basis
        );

        let ascendant = self.angles.ascendant(lst, coordinates.lat, julian_day);
        let midheaven = self.angles.midheaven(lst, coordinates.lat, julian_day);
        let cusps = self.angles.house_cusps(ascendant, midheaven, coordinates.lat);

        let planets = self.ephemeris.calculate_planetary_positions(julian_day);
        let aspects = self.aspects.calculate_aspects(&planets);

        let metadata = ChartMetadata {
            julian_day: round_to(julian_day, 5),
            local_time: local.format("%Y-%m-%d %H:%M:%S").to_string(),
            utc_time: universal.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            timezone: input.timezone.clone().unwrap_or_else(|| basis.label()),
            coordinates,
            angle_system: self.angles.system(),
        };

        Ok(BirthChart {
            ascendant: ChartAngle::from_longitude(ascendant),
            midheaven: ChartAngle::from_longitude(midheaven),
            planets,
            houses: cusps_from_longitudes(&cusps),
            aspects,
            metadata,
        })
    }
}

impl Default for ChartCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a chart with the default (reference angle) calculator.
pub fn calculate_birth_chart(input: &BirthInput) -> Result<BirthChart, ChartError> {
    ChartCalculator::new().calculate(input)
}

fn validate_coordinates(coordinates: Option<Coordinates>) -> Result<Coordinates, ChartError> {
    match coordinates {
        Some(c) if c.lat.is_finite() && c.lng.is_finite() => Ok(c),
        _ => Err(ChartError::MissingCoordinates),
    }
}

fn parse_local_datetime(date: &str, time: &str) -> Result<NaiveDateTime, ChartError> {
    let invalid = || ChartError::InvalidDateTime {
        date: date.to_string(),
        time: time.to_string(),
    };

    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| invalid())?;
    let clock = TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(time.trim(), fmt).ok())
        .ok_or_else(invalid)?;

    Ok(day.and_time(clock))
}
