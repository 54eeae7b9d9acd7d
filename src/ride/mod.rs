//! The shared ride contract and its two variants.
//!
//! Every ride owns a [`RideCore`] (identity, earnings, run counter and
//! passenger roster) and implements [`Ride`], which defines when it may run,
//! what an inspection must sign off, how fares are priced and how passengers
//! board. The set of variants is closed:
//!
//! - [`FixedCapacityRide`]: a roller coaster with a run ceiling between
//!   inspections and a flat surcharge per fare.
//! - [`LoopRide`]: a trolley circling a fixed station sequence, wearing one
//!   run per completed loop.
//!
//! [`AnyRide`] holds either variant behind one value.

mod any;
mod fixed_capacity;
mod loop_ride;
mod state;

pub use any::{AnyRide, RideKind};
pub use fixed_capacity::FixedCapacityRide;
pub use loop_ride::LoopRide;
pub use state::RideCore;

pub(crate) use fixed_capacity::check_pricing;

use crate::models::components::all_present;
use crate::models::Roster;

mod sealed {
    use super::RideCore;

    /// Write access to a ride's shared state, reachable only inside this
    /// crate.
    pub trait Sealed {
        fn core_mut(&mut self) -> &mut RideCore;
    }
}

/// Behaviour shared by all ride variants.
///
/// `units` is the fare unit: stops travelled for a loop ride, track runs for
/// a fixed-capacity ride. Negative units are never legal and are rejected by
/// [`can_run`](Ride::can_run).
///
/// # Examples
///
/// ```
/// use u_rides::ride::{FixedCapacityRide, Ride};
///
/// let mut coaster = FixedCapacityRide::new("Cyclone");
/// assert!(coaster.add_passengers(5, &["Al", "Bo"]));
/// assert_eq!(coaster.runs_since_maintenance(), 5);
/// assert!((coaster.earnings() - 130.0).abs() < 1e-10);
///
/// assert!(!coaster.inspect(&["Tracks Clear"]));
/// assert!(coaster.inspect(&["tracks clear", "BRAKES OK"]));
/// assert_eq!(coaster.runs_since_maintenance(), 0);
/// ```
///
/// Shared state is read-only from outside the crate; the id, seat count and
/// earnings can only change through the operations above.
///
/// ```compile_fail
/// use u_rides::ride::{FixedCapacityRide, Ride};
///
/// let mut coaster = FixedCapacityRide::new("Cyclone");
/// let _ = coaster.core_mut();
/// ```
pub trait Ride: sealed::Sealed {
    /// Shared state.
    fn core(&self) -> &RideCore;

    /// Returns `true` if the ride may operate for `units` more units.
    fn can_run(&self, units: i32) -> bool;

    /// Markers an inspection must include for the ride to pass.
    fn required_components(&self) -> &'static [&'static str];

    /// Fare for one passenger travelling `units`.
    fn cost_per_passenger(&self, units: i32) -> f64;

    /// Boards `names` for `units` and operates the ride.
    ///
    /// Returns `false` with no change to the ride when the request is
    /// rejected.
    fn add_passengers(&mut self, units: i32, names: &[&str]) -> bool;

    /// Checks the signed-off `components` against
    /// [`required_components`](Ride::required_components), ignoring case.
    ///
    /// A pass resets the run counter; a failure changes nothing.
    fn inspect(&mut self, components: &[&str]) -> bool {
        if !all_present(components, self.required_components()) {
            log::debug!(
                "{}: inspection failed, required {:?}",
                self.id(),
                self.required_components()
            );
            return false;
        }
        log::info!(
            "{}: inspection passed after {} runs",
            self.id(),
            self.runs_since_maintenance()
        );
        self.core_mut().reset_runs();
        true
    }

    /// Adds one passenger's fare for `units` to the earnings.
    ///
    /// Variants do not override this; pricing lives in
    /// [`cost_per_passenger`](Ride::cost_per_passenger).
    fn charge_passenger(&mut self, units: i32) {
        let fare = self.cost_per_passenger(units);
        self.core_mut().credit(fare);
    }

    /// Empties the first slot holding `name`, ignoring case.
    fn remove_passenger(&mut self, name: &str) -> bool {
        self.core_mut().roster_mut().remove(name)
    }

    /// Multi-line listing of the seated passengers.
    fn passenger_listing(&self) -> String {
        self.core().passenger_listing()
    }

    /// Ride identity.
    fn id(&self) -> &str {
        self.core().id()
    }

    /// Total fares collected.
    fn earnings(&self) -> f64 {
        self.core().earnings()
    }

    /// Operation units since the last passing inspection.
    fn runs_since_maintenance(&self) -> u32 {
        self.core().runs_since_maintenance()
    }

    /// Passenger slots.
    fn roster(&self) -> &Roster {
        self.core().roster()
    }
}

/// Seats each name in the first empty slot and charges it for `units`.
///
/// Names that find no empty slot are dropped. Returns how many were seated.
fn seat_and_charge<R: Ride + ?Sized>(ride: &mut R, units: i32, names: &[&str]) -> usize {
    let mut seated = 0;
    for name in names {
        match ride.core_mut().roster_mut().seat(name) {
            Some(slot) => {
                log::trace!("{}: seated {name} in slot {slot}", ride.id());
                ride.charge_passenger(units);
                seated += 1;
            }
            None => log::trace!("{}: no seat left for {name}", ride.id()),
        }
    }
    seated
}
