//! Fixed-capacity ride with a run ceiling between inspections.

use std::fmt;

use super::sealed::Sealed;
use super::{seat_and_charge, Ride, RideCore};
use crate::error::{RideError, RideResult};
use crate::models::components::{BRAKES_OK, TRACKS_CLEAR};
use crate::models::Roster;

const DEFAULT_SEATS: usize = 4;
const DEFAULT_RATE: f64 = 10.0;
const DEFAULT_SURCHARGE: f64 = 15.0;
const DEFAULT_MAX_RUNS: u32 = 200;

const REQUIRED_COMPONENTS: &[&str] = &[TRACKS_CLEAR, BRAKES_OK];

/// A roller coaster: fixed seating, a per-run rate plus a flat surcharge, and
/// a ceiling on runs before it must pass inspection.
///
/// Boarding is all-or-nothing. A request is rejected outright if the ride
/// would exceed its ceiling or if there are fewer empty seats than names.
///
/// # Examples
///
/// ```
/// use u_rides::ride::{FixedCapacityRide, Ride};
///
/// let mut coaster = FixedCapacityRide::new("Cyclone")
///     .with_max_runs(10)
///     .with_rate(2.0)
///     .with_surcharge(1.0);
/// assert_eq!(coaster.cost_per_passenger(3), 7.0);
/// assert!(coaster.add_passengers(8, &["Al"]));
/// assert!(!coaster.can_run(3));
/// assert_eq!(coaster.remaining_runs(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FixedCapacityRide {
    core: RideCore,
    rate: f64,
    surcharge: f64,
    max_runs: u32,
}

impl FixedCapacityRide {
    /// Creates a ride with 4 empty seats, rate 10.00, surcharge 15.00 and a
    /// ceiling of 200 runs.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            core: RideCore::new(id, 0, Roster::with_seats(DEFAULT_SEATS)),
            rate: DEFAULT_RATE,
            surcharge: DEFAULT_SURCHARGE,
            max_runs: DEFAULT_MAX_RUNS,
        }
    }

    /// Sets the runs already made since the last inspection.
    pub fn with_runs_since_maintenance(mut self, runs: u32) -> Self {
        self.core.set_runs(runs);
        self
    }

    /// Replaces the seating with `seats` empty seats.
    pub fn with_seats(mut self, seats: usize) -> Self {
        *self.core.roster_mut() = Roster::with_seats(seats);
        self
    }

    /// Replaces the seating with an initial slot layout.
    pub fn with_passengers(mut self, slots: Vec<Option<String>>) -> Self {
        *self.core.roster_mut() = Roster::from_slots(slots);
        self
    }

    /// Sets the per-run rate.
    ///
    /// Unchecked, like the other pricing setters; see
    /// [`validate`](Self::validate).
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the flat surcharge added to every fare.
    pub fn with_surcharge(mut self, surcharge: f64) -> Self {
        self.surcharge = surcharge;
        self
    }

    /// Sets the run ceiling between inspections.
    pub fn with_max_runs(mut self, max_runs: u32) -> Self {
        self.max_runs = max_runs;
        self
    }

    /// Checks the pricing and ceiling set through the builder.
    ///
    /// # Errors
    ///
    /// Returns `RideError` for a non-finite or non-positive rate, a
    /// non-finite or negative surcharge, or a zero ceiling.
    ///
    /// ```
    /// use u_rides::ride::FixedCapacityRide;
    ///
    /// assert!(FixedCapacityRide::new("Cyclone").validate().is_ok());
    /// assert!(FixedCapacityRide::new("Cyclone").with_rate(-10.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> RideResult<()> {
        check_pricing(self.rate, self.surcharge, self.max_runs)
    }

    /// Charge per run.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Flat amount added to every fare.
    pub fn surcharge(&self) -> f64 {
        self.surcharge
    }

    /// Run ceiling between inspections.
    pub fn max_runs(&self) -> u32 {
        self.max_runs
    }

    /// Runs left before inspection is due, never below zero.
    pub fn remaining_runs(&self) -> u32 {
        self.max_runs.saturating_sub(self.runs_since_maintenance())
    }

    /// Number of unoccupied seats.
    pub fn empty_seats(&self) -> usize {
        self.core.roster().empty_seats()
    }
}

/// Rate must be positive, surcharge non-negative, ceiling non-zero, and both
/// amounts finite.
pub(crate) fn check_pricing(rate: f64, surcharge: f64, max_runs: u32) -> RideResult<()> {
    if !rate.is_finite() {
        return Err(RideError::InvalidNumber {
            field: "rate",
            value: rate,
        });
    }
    if rate <= 0.0 {
        return Err(RideError::NonPositive { field: "rate" });
    }
    if !surcharge.is_finite() {
        return Err(RideError::InvalidNumber {
            field: "surcharge",
            value: surcharge,
        });
    }
    if surcharge < 0.0 {
        return Err(RideError::Negative {
            field: "surcharge",
            value: surcharge,
        });
    }
    if max_runs == 0 {
        return Err(RideError::NonPositive { field: "max_runs" });
    }
    Ok(())
}

impl Sealed for FixedCapacityRide {
    fn core_mut(&mut self) -> &mut RideCore {
        &mut self.core
    }
}

impl Ride for FixedCapacityRide {
    fn core(&self) -> &RideCore {
        &self.core
    }

    fn can_run(&self, stops: i32) -> bool {
        if stops < 0 {
            return false;
        }
        i64::from(self.runs_since_maintenance()) + i64::from(stops) <= i64::from(self.max_runs)
    }

    fn required_components(&self) -> &'static [&'static str] {
        REQUIRED_COMPONENTS
    }

    fn cost_per_passenger(&self, stops: i32) -> f64 {
        f64::from(stops) * self.rate + self.surcharge
    }

    fn add_passengers(&mut self, stops: i32, names: &[&str]) -> bool {
        if !self.can_run(stops) {
            log::debug!(
                "{}: cannot run {stops} more (at {} of {})",
                self.id(),
                self.runs_since_maintenance(),
                self.max_runs
            );
            return false;
        }
        // Capacity is checked once, before anyone boards.
        if self.empty_seats() < names.len() {
            log::debug!(
                "{}: {} passengers but only {} empty seats",
                self.id(),
                names.len(),
                self.empty_seats()
            );
            return false;
        }
        seat_and_charge(self, stops, names);
        // can_run guarantees stops is non-negative.
        self.core.record_runs(stops.unsigned_abs());
        true
    }
}

impl PartialEq for FixedCapacityRide {
    fn eq(&self, other: &Self) -> bool {
        self.core.same_identity(&other.core)
            && self.rate == other.rate
            && self.surcharge == other.surcharge
            && self.max_runs == other.max_runs
    }
}

impl fmt::Display for FixedCapacityRide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Roller Coaster {} It can only run {} more times. \
             It costs ${:.2} per ride and there is a one-time photo fee of ${:.2}.",
            self.core,
            self.remaining_runs(),
            self.rate,
            self.surcharge
        )
    }
}
