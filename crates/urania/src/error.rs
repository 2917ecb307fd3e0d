use crate::ephemeris::EphemerisError;
use thiserror::Error;

/// Errors that abort (or, for `DashaInput`, trim) a chart computation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),
    #[error("Invalid birth date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Ascendant could not be computed: {0}")]
    Houses(#[source] EphemerisError),
    #[error("Birth timestamp is not a valid instant: {0}")]
    DashaInput(String),
    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}
