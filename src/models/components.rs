//! Inspection component markers.
//!
//! An inspection hands a ride the set of checks that were signed off. A ride
//! passes when every marker it requires appears in that set, compared without
//! regard to case.

use super::names_match;

/// Track is clear of obstructions.
pub const TRACKS_CLEAR: &str = "Tracks Clear";

/// Braking system passed its check.
pub const BRAKES_OK: &str = "Brakes OK";

/// Fuel or charge is available for another loop.
pub const GAS_TANK_NOT_EMPTY: &str = "Gas Tank Not Empty";

/// Returns `true` if `marker` appears in `components`, ignoring case.
///
/// # Examples
///
/// ```
/// use u_rides::models::components::{contains_marker, BRAKES_OK};
///
/// assert!(contains_marker(&["brakes ok"], BRAKES_OK));
/// assert!(!contains_marker(&["Brakes"], BRAKES_OK));
/// ```
pub fn contains_marker(components: &[&str], marker: &str) -> bool {
    components.iter().any(|c| names_match(c, marker))
}

/// Returns `true` if every marker in `required` appears in `components`.
pub fn all_present(components: &[&str], required: &[&str]) -> bool {
    required.iter().all(|m| contains_marker(components, m))
}
