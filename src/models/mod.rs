//! Shared value types for ride operations.
//!
//! Provides the passenger roster every ride owns and the inspection markers
//! rides check against.

pub mod components;
mod roster;

pub use roster::Roster;

/// Case-insensitive comparison used for passenger names, station names and
/// inspection markers.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
