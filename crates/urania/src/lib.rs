//! Natal chart calculation.
//!
//! Maps a birth date, time and location to a [`BirthChart`]: angles, house
//! cusps, the ten classical and modern bodies and the aspects between them.
//! Planet positions come from a single reference-epoch snapshot projected
//! with constant mean daily motions, not from a perturbation ephemeris.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod rendering;
pub mod time;
pub mod zodiac;

pub use chart::{calculate_birth_chart, BirthChart, BirthInput, ChartCalculator, ChartMetadata, Coordinates};
pub use error::ChartError;
pub use houses::AngleSystem;
pub use time::TimeBasis;
