//! State shared by every ride variant.

use std::fmt;

use crate::models::Roster;

/// Identity, takings, wear and passengers of a single ride.
///
/// Variants embed a `RideCore` and expose it through
/// [`Ride::core`](super::Ride::core). Mutation is restricted to this crate so
/// that earnings only grow through fare collection and the run counter only
/// resets through a passing inspection.
#[derive(Debug, Clone)]
pub struct RideCore {
    id: String,
    earnings: f64,
    runs_since_maintenance: u32,
    roster: Roster,
}

impl RideCore {
    /// Creates the shared state with zero earnings.
    pub(crate) fn new(
        id: impl Into<String>,
        runs_since_maintenance: u32,
        roster: Roster,
    ) -> Self {
        Self {
            id: id.into(),
            earnings: 0.0,
            runs_since_maintenance,
            roster,
        }
    }

    /// Ride identity, fixed at construction.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Total fares collected.
    pub fn earnings(&self) -> f64 {
        self.earnings
    }

    /// Operation units since the last passing inspection.
    pub fn runs_since_maintenance(&self) -> u32 {
        self.runs_since_maintenance
    }

    /// Passenger slots.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub(crate) fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Adds a collected fare. Negative amounts are treated as zero so
    /// earnings never decrease.
    pub(crate) fn credit(&mut self, amount: f64) {
        if amount > 0.0 {
            self.earnings += amount;
        } else if amount < 0.0 {
            log::debug!("{}: ignoring negative fare {amount:.2}", self.id);
        }
    }

    pub(crate) fn record_runs(&mut self, runs: u32) {
        self.runs_since_maintenance = self.runs_since_maintenance.saturating_add(runs);
    }

    pub(crate) fn set_runs(&mut self, runs: u32) {
        self.runs_since_maintenance = runs;
    }

    pub(crate) fn reset_runs(&mut self) {
        self.set_runs(0);
    }

    /// Base equality: same id (by value) and same run count.
    ///
    /// Variants compare their own fields on top of this and also require the
    /// same concrete type.
    pub fn same_identity(&self, other: &Self) -> bool {
        self.id == other.id && self.runs_since_maintenance == other.runs_since_maintenance
    }

    /// Multi-line listing of the occupied slots in slot order.
    pub fn passenger_listing(&self) -> String {
        let mut out = format!("Passenger list for {}:\n", self.id);
        for name in self.roster.names() {
            out.push_str(name);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for RideCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} has run {} times and has earned ${:.2}.",
            self.id, self.runs_since_maintenance, self.earnings
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_new() {
        let c = RideCore::new("Cyclone", 3, Roster::with_seats(2));
        assert_eq!(c.id(), "Cyclone");
        assert_eq!(c.earnings(), 0.0);
        assert_eq!(c.runs_since_maintenance(), 3);
        assert_eq!(c.roster().capacity(), 2);
    }

    #[test]
    fn test_credit_ignores_negative() {
        let mut c = RideCore::new("a", 0, Roster::with_seats(0));
        c.credit(12.5);
        c.credit(-4.0);
        assert!((c.earnings() - 12.5).abs() < 1e-10);
    }

    #[test]
    fn test_runs_record_and_reset() {
        let mut c = RideCore::new("a", 1, Roster::with_seats(0));
        c.record_runs(4);
        assert_eq!(c.runs_since_maintenance(), 5);
        c.reset_runs();
        assert_eq!(c.runs_since_maintenance(), 0);
    }

    #[test]
    fn test_same_identity_by_value() {
        let a = RideCore::new(String::from("Loop"), 2, Roster::with_seats(1));
        let b = RideCore::new("Lo".to_string() + "op", 2, Roster::with_seats(5));
        let c = RideCore::new("Loop", 3, Roster::with_seats(1));
        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&c));
    }

    #[test]
    fn test_passenger_listing_skips_empty() {
        let roster = Roster::from_slots(vec![
            None,
            Some("Al".to_string()),
            None,
            Some("Bo".to_string()),
        ]);
        let c = RideCore::new("Cyclone", 0, roster);
        assert_eq!(c.passenger_listing(), "Passenger list for Cyclone:\nAl\nBo\n");
        assert_eq!(c.passenger_listing(), c.passenger_listing());
    }

    #[test]
    fn test_display() {
        let mut c = RideCore::new("Cyclone", 7, Roster::with_seats(0));
        c.credit(130.0);
        assert_eq!(c.to_string(), "Cyclone has run 7 times and has earned $130.00.");
    }
}
