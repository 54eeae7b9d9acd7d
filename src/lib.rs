//! # u-rides
//!
//! Amusement-park ride operations: passenger rosters, fare collection, and
//! maintenance-interval enforcement across ride variants.
//!
//! ## Modules
//!
//! - [`models`] — Shared value types (passenger roster, inspection markers)
//! - [`ride`] — The `Ride` contract, fixed-capacity and loop variants, `AnyRide`
//! - [`config`] — Serializable ride descriptions with validation
//! - [`error`] — Construction and configuration errors
//!
//! Ride operations report rejection through their `bool` result and never
//! leave a ride half-updated. Diagnostics go through the `log` facade; the
//! library installs no logger.

pub mod config;
pub mod error;
pub mod models;
pub mod ride;

pub use error::{RideError, RideResult};
