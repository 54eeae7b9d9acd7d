//! Loop ride circling a fixed sequence of stations.

use std::fmt;

use super::sealed::Sealed;
use super::{seat_and_charge, Ride, RideCore};
use crate::error::{RideError, RideResult};
use crate::models::components::{BRAKES_OK, GAS_TANK_NOT_EMPTY};
use crate::models::{names_match, Roster};

const SEATS: usize = 20;
const RATE_PER_STOP: f64 = 3.0;

const REQUIRED_COMPONENTS: &[&str] = &[GAS_TANK_NOT_EMPTY, BRAKES_OK];

/// A trolley that travels a circular station sequence.
///
/// Fares are proportional to the share of the loop travelled. Wear is counted
/// in completed loops: the run counter grows by one each time the trolley
/// wraps past the last station.
///
/// Boarding never fails for lack of room. Passengers beyond the 20 seats are
/// left behind, and the trolley still moves.
///
/// # Examples
///
/// ```
/// use u_rides::ride::{LoopRide, Ride};
///
/// let mut trolley = LoopRide::new("Red Line", ["Gate", "Pier", "Fort"], 0).unwrap();
/// assert!(trolley.add_passengers(4, &[]));
/// assert_eq!(trolley.current_station(), "Pier");
/// assert_eq!(trolley.next_station(), "Fort");
/// assert_eq!(trolley.runs_since_maintenance(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LoopRide {
    core: RideCore,
    stations: Vec<String>,
    current_station: usize,
}

impl LoopRide {
    /// Creates a trolley with 20 empty seats positioned at `current_station`.
    ///
    /// # Errors
    ///
    /// Returns [`RideError::NoStations`] for an empty station list and
    /// [`RideError::StationOutOfRange`] if `current_station` is not a valid
    /// index.
    pub fn new<S: Into<String>>(
        id: impl Into<String>,
        stations: impl IntoIterator<Item = S>,
        current_station: usize,
    ) -> RideResult<Self> {
        let stations: Vec<String> = stations.into_iter().map(Into::into).collect();
        if stations.is_empty() {
            return Err(RideError::NoStations);
        }
        if current_station >= stations.len() {
            return Err(RideError::StationOutOfRange {
                index: current_station,
                count: stations.len(),
            });
        }
        Ok(Self {
            core: RideCore::new(id, 0, Roster::with_seats(SEATS)),
            stations,
            current_station,
        })
    }

    /// Sets the loops already completed since the last inspection.
    pub fn with_runs_since_maintenance(mut self, loops: u32) -> Self {
        self.core.set_runs(loops);
        self
    }

    /// Stations in loop order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Number of stations on the loop.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Position of the current station in [`stations`](Self::stations).
    pub fn current_station_index(&self) -> usize {
        self.current_station
    }

    /// Station the trolley is at.
    pub fn current_station(&self) -> &str {
        &self.stations[self.current_station]
    }

    /// Station after the current one, wrapping to the first.
    pub fn next_station(&self) -> &str {
        &self.stations[(self.current_station + 1) % self.stations.len()]
    }

    /// Moves the trolley `stops` stations along the loop.
    ///
    /// Each wrap past the last station counts as one completed loop. Does
    /// nothing if [`can_run`](Ride::can_run) rejects `stops`.
    pub fn advance(&mut self, stops: i32) {
        if !self.can_run(stops) {
            return;
        }
        let count = self.stations.len();
        let travelled = self.current_station + stops.unsigned_abs() as usize;
        if travelled >= count {
            let loops = travelled / count;
            log::trace!("{}: completed {loops} loop(s)", self.id());
            self.core.record_runs(u32::try_from(loops).unwrap_or(u32::MAX));
        }
        self.current_station = travelled % count;
    }
}

impl Sealed for LoopRide {
    fn core_mut(&mut self) -> &mut RideCore {
        &mut self.core
    }
}

impl Ride for LoopRide {
    fn core(&self) -> &RideCore {
        &self.core
    }

    fn can_run(&self, runs: i32) -> bool {
        runs >= 0
    }

    fn required_components(&self) -> &'static [&'static str] {
        REQUIRED_COMPONENTS
    }

    fn cost_per_passenger(&self, stops: i32) -> f64 {
        f64::from(stops) * RATE_PER_STOP / self.stations.len() as f64
    }

    fn add_passengers(&mut self, stops: i32, names: &[&str]) -> bool {
        if !self.can_run(stops) {
            log::debug!("{}: rejected negative stop count {stops}", self.id());
            return false;
        }
        let seated = seat_and_charge(self, stops, names);
        if seated < names.len() {
            log::debug!(
                "{}: left {} passenger(s) behind, trolley full",
                self.id(),
                names.len() - seated
            );
        }
        self.advance(stops);
        true
    }
}

impl PartialEq for LoopRide {
    fn eq(&self, other: &Self) -> bool {
        self.stations.len() == other.stations.len()
            && self
                .stations
                .iter()
                .zip(&other.stations)
                .all(|(a, b)| names_match(a, b))
            && self.core.same_identity(&other.core)
            && self.current_station == other.current_station
    }
}

impl fmt::Display for LoopRide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trolley {} has driven {} loops and has earned ${:.2}. \
             This trolley is at {}. Next up is {}.",
            self.id(),
            self.runs_since_maintenance(),
            self.earnings(),
            self.current_station(),
            self.next_station()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_stops() -> LoopRide {
        LoopRide::new("Red", ["A", "B", "C"], 0).expect("valid trolley")
    }

    #[test]
    fn test_new() {
        let t = three_stops();
        assert_eq!(t.id(), "Red");
        assert_eq!(t.station_count(), 3);
        assert_eq!(t.current_station_index(), 0);
        assert_eq!(t.roster().capacity(), 20);
        assert_eq!(t.runs_since_maintenance(), 0);
    }

    #[test]
    fn test_new_invalid() {
        let none: [&str; 0] = [];
        assert!(matches!(LoopRide::new("x", none, 0), Err(RideError::NoStations)));
        assert!(matches!(
            LoopRide::new("x", ["A", "B"], 2),
            Err(RideError::StationOutOfRange { index: 2, count: 2 })
        ));
    }

    #[test]
    fn test_can_run() {
        let t = three_stops().with_runs_since_maintenance(10_000);
        assert!(t.can_run(0));
        assert!(t.can_run(1_000));
        assert!(!t.can_run(-1));
    }

    #[test]
    fn test_cost_per_passenger() {
        let t = three_stops();
        assert!((t.cost_per_passenger(3) - 3.0).abs() < 1e-10);
        assert!((t.cost_per_passenger(1) - 1.0).abs() < 1e-10);
        let single = LoopRide::new("s", ["Only"], 0).expect("valid");
        assert!((single.cost_per_passenger(2) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_advance_wraps() {
        let mut t = three_stops();
        t.advance(2);
        assert_eq!(t.current_station_index(), 2);
        assert_eq!(t.runs_since_maintenance(), 0);
        t.advance(1);
        assert_eq!(t.current_station_index(), 0);
        assert_eq!(t.runs_since_maintenance(), 1);
        t.advance(7);
        assert_eq!(t.current_station_index(), 1);
        assert_eq!(t.runs_since_maintenance(), 3);
    }

    #[test]
    fn test_advance_negative_is_noop() {
        let mut t = LoopRide::new("Red", ["A", "B", "C"], 1).expect("valid");
        t.advance(-2);
        assert_eq!(t.current_station_index(), 1);
        assert_eq!(t.runs_since_maintenance(), 0);
    }

    #[test]
    fn test_add_passengers_example() {
        let mut t = three_stops();
        assert!(t.add_passengers(4, &[]));
        assert_eq!(t.current_station_index(), 1);
        assert_eq!(t.runs_since_maintenance(), 1);
        assert_eq!(t.earnings(), 0.0);
    }

    #[test]
    fn test_add_passengers_charges_each() {
        let mut t = three_stops();
        assert!(t.add_passengers(2, &["Al", "Bo", "Cy"]));
        assert!((t.earnings() - 6.0).abs() < 1e-10);
        assert_eq!(t.roster().occupied(), 3);
        assert_eq!(t.current_station(), "C");
    }

    #[test]
    fn test_add_passengers_drops_overflow() {
        let mut t = three_stops();
        let names: Vec<String> = (0..25).map(|i| format!("P{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        assert!(t.add_passengers(3, &refs));
        assert!(t.roster().is_full());
        assert!(t.roster().contains("P19"));
        assert!(!t.roster().contains("P20"));
        assert!((t.earnings() - 20.0 * 3.0).abs() < 1e-10);
        assert_eq!(t.runs_since_maintenance(), 1);
    }

    #[test]
    fn test_add_passengers_rejects_negative() {
        let mut t = three_stops();
        assert!(!t.add_passengers(-1, &["Al"]));
        assert_eq!(t.roster().occupied(), 0);
        assert_eq!(t.current_station_index(), 0);
        assert_eq!(t.earnings(), 0.0);
    }

    #[test]
    fn test_inspect() {
        let mut t = three_stops().with_runs_since_maintenance(4);
        assert!(!t.inspect(&["Brakes OK", "Tracks Clear"]));
        assert_eq!(t.runs_since_maintenance(), 4);
        assert!(t.inspect(&["GAS TANK NOT EMPTY", "brakes ok"]));
        assert_eq!(t.runs_since_maintenance(), 0);
    }

    #[test]
    fn test_equality() {
        let a = three_stops();
        let b = LoopRide::new("Red", ["a", "b", "c"], 0).expect("valid");
        assert_eq!(a, b);
        let reordered = LoopRide::new("Red", ["B", "A", "C"], 0).expect("valid");
        assert_ne!(a, reordered);
        let longer = LoopRide::new("Red", ["A", "B", "C", "D"], 0).expect("valid");
        assert_ne!(a, longer);
        let moved = LoopRide::new("Red", ["A", "B", "C"], 1).expect("valid");
        assert_ne!(a, moved);
        assert_ne!(a, a.clone().with_runs_since_maintenance(1));
    }

    #[test]
    fn test_display() {
        let mut t = three_stops();
        t.add_passengers(2, &["Al"]);
        assert_eq!(
            t.to_string(),
            "Trolley Red has driven 0 loops and has earned $2.00. \
             This trolley is at C. Next up is A."
        );
    }
}
