pub mod reference;
pub mod types;

pub use reference::{ReferenceEphemeris, REFERENCE_JULIAN_DAY};
pub use types::{Planet, PlanetaryPosition};
