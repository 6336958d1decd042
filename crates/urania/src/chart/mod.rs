pub mod calculator;
pub mod types;

pub use calculator::{calculate_birth_chart, ChartCalculator};
pub use types::{BirthChart, BirthInput, ChartMetadata, Coordinates};
