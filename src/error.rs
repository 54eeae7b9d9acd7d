//! Errors raised while constructing or configuring rides.
//!
//! Ride operations themselves never fail with an error: they report a
//! rejected transition through their boolean result and leave state unchanged.

use thiserror::Error;

/// Errors raised when a ride description violates its invariants.
#[derive(Debug, Error)]
pub enum RideError {
    #[error("ride id must not be empty")]
    EmptyId,
    #[error("a loop ride needs at least one station")]
    NoStations,
    #[error("station index {index} is out of range for {count} stations")]
    StationOutOfRange { index: usize, count: usize },
    #[error("{field} must be a finite number (got {value})")]
    InvalidNumber { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("{field} must not be negative (got {value:.2})")]
    Negative { field: &'static str, value: f64 },
    #[error("invalid ride description: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand for results carrying a [`RideError`].
pub type RideResult<T> = Result<T, RideError>;
