//! Serializable ride descriptions.
//!
//! A [`RideConfig`] describes one ride in JSON (or any serde format), is
//! checked with [`RideConfig::validate`], and is turned into a live ride with
//! [`RideConfig::build`]. Omitted fields fall back to the defaults of the
//! corresponding constructor.
//!
//! ```
//! use u_rides::config::RideConfig;
//! use u_rides::ride::Ride;
//!
//! let ride = RideConfig::from_json_str(
//!     r#"{ "kind": "loop", "id": "Red", "stations": ["A", "B", "C"] }"#,
//! )
//! .unwrap();
//! assert_eq!(ride.id(), "Red");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{RideError, RideResult};
use crate::ride::{check_pricing, AnyRide, FixedCapacityRide, LoopRide, RideKind};

/// Description of a [`FixedCapacityRide`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedCapacityConfig {
    pub id: String,
    #[serde(default = "FixedCapacityConfig::default_seats")]
    pub seats: usize,
    #[serde(default = "FixedCapacityConfig::default_rate")]
    pub rate: f64,
    #[serde(default = "FixedCapacityConfig::default_surcharge")]
    pub surcharge: f64,
    #[serde(default = "FixedCapacityConfig::default_max_runs")]
    pub max_runs: u32,
    #[serde(default)]
    pub runs_since_maintenance: u32,
}

impl FixedCapacityConfig {
    const fn default_seats() -> usize {
        4
    }

    const fn default_rate() -> f64 {
        10.0
    }

    const fn default_surcharge() -> f64 {
        15.0
    }

    const fn default_max_runs() -> u32 {
        200
    }

    /// Creates a description with default seating, pricing and ceiling.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            seats: Self::default_seats(),
            rate: Self::default_rate(),
            surcharge: Self::default_surcharge(),
            max_runs: Self::default_max_runs(),
            runs_since_maintenance: 0,
        }
    }

    /// Checks the description before construction.
    ///
    /// # Errors
    ///
    /// Returns `RideError` for an empty id, no seats, a non-finite or
    /// non-positive rate, a non-finite or negative surcharge, or a zero
    /// ceiling.
    pub fn validate(&self) -> RideResult<()> {
        validate_id(&self.id)?;
        if self.seats == 0 {
            return Err(RideError::NonPositive { field: "seats" });
        }
        check_pricing(self.rate, self.surcharge, self.max_runs)?;
        Ok(())
    }

    /// Validates and builds the ride.
    pub fn build(&self) -> RideResult<FixedCapacityRide> {
        self.validate()?;
        Ok(FixedCapacityRide::new(self.id.clone())
            .with_seats(self.seats)
            .with_rate(self.rate)
            .with_surcharge(self.surcharge)
            .with_max_runs(self.max_runs)
            .with_runs_since_maintenance(self.runs_since_maintenance))
    }
}

/// Description of a [`LoopRide`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopConfig {
    pub id: String,
    pub stations: Vec<String>,
    #[serde(default)]
    pub current_station: usize,
    #[serde(default)]
    pub runs_since_maintenance: u32,
}

impl LoopConfig {
    /// Checks the description before construction.
    ///
    /// # Errors
    ///
    /// Returns `RideError` for an empty id, no stations, or a current station
    /// outside the station list.
    pub fn validate(&self) -> RideResult<()> {
        validate_id(&self.id)?;
        if self.stations.is_empty() {
            return Err(RideError::NoStations);
        }
        if self.current_station >= self.stations.len() {
            return Err(RideError::StationOutOfRange {
                index: self.current_station,
                count: self.stations.len(),
            });
        }
        Ok(())
    }

    /// Validates and builds the ride.
    pub fn build(&self) -> RideResult<LoopRide> {
        self.validate()?;
        Ok(
            LoopRide::new(self.id.clone(), self.stations.clone(), self.current_station)?
                .with_runs_since_maintenance(self.runs_since_maintenance),
        )
    }
}

/// Description of either ride variant, tagged by `"kind"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RideConfig {
    FixedCapacity(FixedCapacityConfig),
    Loop(LoopConfig),
}

impl RideConfig {
    /// Variant this description builds.
    pub fn kind(&self) -> RideKind {
        match self {
            Self::FixedCapacity(_) => RideKind::FixedCapacity,
            Self::Loop(_) => RideKind::Loop,
        }
    }

    /// Checks the description of whichever variant it holds.
    pub fn validate(&self) -> RideResult<()> {
        match self {
            Self::FixedCapacity(c) => c.validate(),
            Self::Loop(c) => c.validate(),
        }
    }

    /// Validates and builds the described ride.
    pub fn build(&self) -> RideResult<AnyRide> {
        let ride: AnyRide = match self {
            Self::FixedCapacity(c) => c.build()?.into(),
            Self::Loop(c) => c.build()?.into(),
        };
        Ok(ride)
    }

    /// Parses a JSON description and builds the ride.
    ///
    /// # Errors
    ///
    /// Returns [`RideError::Json`] for malformed input and the validation
    /// errors of [`RideConfig::validate`] otherwise.
    pub fn from_json_str(json: &str) -> RideResult<AnyRide> {
        let config: Self = serde_json::from_str(json)?;
        config.build()
    }
}

/// Parses a JSON array of ride descriptions and builds every ride.
///
/// Fails on the first invalid entry.
pub fn rides_from_json_str(json: &str) -> RideResult<Vec<AnyRide>> {
    let configs: Vec<RideConfig> = serde_json::from_str(json)?;
    configs.iter().map(RideConfig::build).collect()
}

fn validate_id(id: &str) -> RideResult<()> {
    if id.trim().is_empty() {
        return Err(RideError::EmptyId);
    }
    Ok(())
}
