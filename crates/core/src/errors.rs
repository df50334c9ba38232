//! Core error types for the Goalfolio engine.
//!
//! Only genuinely invalid request parameters and unexpected I/O failures
//! surface through these types. Data-quality problems in the ranking
//! snapshot are recovered inside the engine.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the allocation engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Allocation failed: {0}")]
    Allocation(#[from] AllocationError),

    #[error("Ranking snapshot error: {0}")]
    Ranking(#[from] RankingError),
}

/// Validation errors for request parameters.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while computing allocations.
///
/// `DivisionUndefined` never leaves the engine: the tactical breakdown
/// catches it and applies the fixed fallback split.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Division undefined: {0}")]
    DivisionUndefined(String),
}

/// Errors raised while loading a ranking snapshot.
#[derive(Error, Debug)]
pub enum RankingError {
    #[error("Failed to read ranking file: {0}")]
    Io(String),

    #[error("Malformed ranking data: {0}")]
    Malformed(String),

    #[error("Unsupported ranking file format: {0}")]
    UnsupportedFormat(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Ranking(RankingError::Malformed(err.to_string()))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Ranking(RankingError::Malformed(err.to_string()))
    }
}
