//! A single value holding either ride variant.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::sealed::Sealed;
use super::{FixedCapacityRide, LoopRide, Ride, RideCore};

/// Tag naming a ride variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideKind {
    FixedCapacity,
    Loop,
}

/// Either ride variant, dispatched through [`Ride`].
///
/// Two `AnyRide`s are equal only if they hold the same variant and that
/// variant's own equality holds.
///
/// # Examples
///
/// ```
/// use u_rides::ride::{AnyRide, FixedCapacityRide, LoopRide, Ride, RideKind};
///
/// let mut rides: Vec<AnyRide> = vec![
///     FixedCapacityRide::new("Cyclone").into(),
///     LoopRide::new("Red", ["A", "B", "C"], 0).unwrap().into(),
/// ];
/// for ride in &mut rides {
///     assert!(ride.add_passengers(3, &["Al"]));
/// }
/// assert_eq!(rides[0].kind(), RideKind::FixedCapacity);
/// assert_eq!(rides[1].runs_since_maintenance(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AnyRide {
    FixedCapacity(FixedCapacityRide),
    Loop(LoopRide),
}

impl AnyRide {
    /// Variant held.
    pub fn kind(&self) -> RideKind {
        match self {
            Self::FixedCapacity(_) => RideKind::FixedCapacity,
            Self::Loop(_) => RideKind::Loop,
        }
    }

    /// The fixed-capacity ride, if that is the variant held.
    pub fn as_fixed_capacity(&self) -> Option<&FixedCapacityRide> {
        match self {
            Self::FixedCapacity(r) => Some(r),
            Self::Loop(_) => None,
        }
    }

    /// The loop ride, if that is the variant held.
    pub fn as_loop(&self) -> Option<&LoopRide> {
        match self {
            Self::Loop(r) => Some(r),
            Self::FixedCapacity(_) => None,
        }
    }

    fn inner(&self) -> &dyn Ride {
        match self {
            Self::FixedCapacity(r) => r,
            Self::Loop(r) => r,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Ride {
        match self {
            Self::FixedCapacity(r) => r,
            Self::Loop(r) => r,
        }
    }
}

impl Sealed for AnyRide {
    fn core_mut(&mut self) -> &mut RideCore {
        self.inner_mut().core_mut()
    }
}

impl Ride for AnyRide {
    fn core(&self) -> &RideCore {
        self.inner().core()
    }

    fn can_run(&self, units: i32) -> bool {
        self.inner().can_run(units)
    }

    fn required_components(&self) -> &'static [&'static str] {
        self.inner().required_components()
    }

    fn cost_per_passenger(&self, units: i32) -> f64 {
        self.inner().cost_per_passenger(units)
    }

    fn add_passengers(&mut self, units: i32, names: &[&str]) -> bool {
        self.inner_mut().add_passengers(units, names)
    }
}

impl From<FixedCapacityRide> for AnyRide {
    fn from(ride: FixedCapacityRide) -> Self {
        Self::FixedCapacity(ride)
    }
}

impl From<LoopRide> for AnyRide {
    fn from(ride: LoopRide) -> Self {
        Self::Loop(ride)
    }
}

impl fmt::Display for AnyRide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedCapacity(r) => fmt::Display::fmt(r, f),
            Self::Loop(r) => fmt::Display::fmt(r, f),
        }
    }
}
