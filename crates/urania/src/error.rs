use thiserror::Error;

/// Input validation failures. Both are raised before any computation runs
/// and neither is worth retrying with the same input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Valid coordinates are required for birth chart calculation")]
    MissingCoordinates,
    #[error("Invalid birth date or time format: date={date:?}, time={time:?}")]
    InvalidDateTime { date: String, time: String },
}
