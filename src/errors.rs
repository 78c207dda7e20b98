//! Error types for active-value operations

use thiserror::Error;

/// Errors that can occur when building or sampling active values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActiveError {
    /// Sampling rate was zero, negative or not finite
    #[error("Invalid sampling rate: {0} (must be finite and > 0)")]
    InvalidRate(f64),

    /// Stretch factor was zero or not finite
    #[error("Invalid stretch factor: {0} (must be finite and non-zero)")]
    InvalidStretchFactor(f64),

    /// A movie needs at least one active to fold
    #[error("Empty input: a movie requires at least one active")]
    EmptyMovie,

    /// Era ends before it starts and cannot be sampled
    #[error("Inverted era: start {start} is after end {end}")]
    InvertedEra { start: f64, end: f64 },

    /// Era has a non-finite bound and cannot be stepped through
    #[error("Unbounded era: [{start}, {end}) has a non-finite bound")]
    UnboundedEra { start: f64, end: f64 },

    /// Sampling would produce more frames than the sampler allows
    #[error("Too many frames: {frames} requested, limit is {limit}")]
    TooManyFrames { frames: f64, limit: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Frame rendering or encoding failed
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for active-value operations
pub type ActiveResult<T> = Result<T, ActiveError>;

impl From<std::num::ParseFloatError> for ActiveError {
    fn from(err: std::num::ParseFloatError) -> Self {
        ActiveError::Configuration(err.to_string())
    }
}

impl From<std::str::ParseBoolError> for ActiveError {
    fn from(err: std::str::ParseBoolError) -> Self {
        ActiveError::Configuration(err.to_string())
    }
}
