//! Chart angles and house cusps.
//!
//! [`AngleProvider`] is the seam between the chart assembly and whatever
//! produces the Ascendant, Midheaven and twelve cusps. [`ReferenceAngles`]
//! returns the fixed Akola chart for every input; [`EqualHouseAngles`]
//! computes the angles from sidereal time and latitude.

pub mod equal;
pub mod reference;
pub mod types;

pub use equal::EqualHouseAngles;
pub use reference::ReferenceAngles;
pub use types::{AngleSystem, ChartAngle, HouseCusp, UnknownAngleSystem};

/// Source of the Ascendant, Midheaven and house cusps.
pub trait AngleProvider: Send + Sync {
    fn system(&self) -> AngleSystem;

    /// Ascendant longitude in degrees.
    fn ascendant(&self, lst: f64, latitude: f64, julian_day: f64) -> f64;

    /// Midheaven longitude in degrees.
    fn midheaven(&self, lst: f64, latitude: f64, julian_day: f64) -> f64;

    /// Cusp longitudes for houses 1 through 12.
    fn house_cusps(&self, ascendant: f64, midheaven: f64, latitude: f64) -> [f64; 12];
}

/// Boxed provider for a configured system.
pub fn provider_for(system: AngleSystem) -> Box<dyn AngleProvider> {
    match system {
        AngleSystem::Reference => Box::new(ReferenceAngles),
        AngleSystem::Equal => Box::new(EqualHouseAngles),
    }
}

/// Build the output cusp list from raw longitudes.
pub fn cusps_from_longitudes(longitudes: &[f64; 12]) -> Vec<HouseCusp> {
    longitudes
        .iter()
        .enumerate()
        .map(|(i, &lon)| HouseCusp::new(i as u8 + 1, lon))
        .collect()
}
