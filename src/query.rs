//! # Query service over an ephemeris snapshot
//!
//! Each query is a pure, stateless function over one immutable
//! [`EphemerisSet`] snapshot, taken once per request. The service owns the
//! `Arc` so results can be computed without touching the tracker's shared
//! reference again.
//!
//! Operations
//! -----------------
//! * [`list`](QueryService::list) – paginated sub-sequence of the store.
//! * [`find_by_epoch`](QueryService::find_by_epoch) – exact string match.
//! * [`find_closest`](QueryService::find_closest) – minimal absolute time
//!   distance, first occurrence on ties.
//! * [`speed`](QueryService::speed) – `‖velocity‖₂` at an exact epoch.
//! * [`location`](QueryService::location) – geodetic subsatellite point at an
//!   exact epoch.
//! * [`now`](QueryService::now) – closest vector to the wall clock, with its
//!   speed.
//! * [`average_speed`](QueryService::average_speed) – mean speed over the
//!   whole set.

use std::sync::Arc;

use hifitime::Epoch;
use serde::Serialize;

use crate::constants::{Degree, Kilometer, KilometerPerSecond};
use crate::conversion::cartesian_to_geodetic;
use crate::ephemeris::{EphemerisSet, StateVector};
use crate::tracker_errors::TrackerError;

/// Speed at one exact epoch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedReport {
    pub epoch: String,
    pub speed: KilometerPerSecond,
}

/// Geodetic subsatellite point at one exact epoch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationReport {
    pub epoch: String,
    pub latitude: Degree,
    pub longitude: Degree,
    pub altitude: Kilometer,
}

/// The state vector closest to the current wall clock, with its speed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NowReport {
    pub epoch: String,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    pub speed: KilometerPerSecond,
}

pub struct QueryService {
    snapshot: Arc<EphemerisSet>,
}

impl QueryService {
    pub fn new(snapshot: Arc<EphemerisSet>) -> Self {
        QueryService { snapshot }
    }

    /// Paginated listing; both bounds are clamped by the store.
    pub fn list(&self, offset: Option<usize>, limit: Option<usize>) -> &[StateVector] {
        self.snapshot.slice(offset, limit)
    }

    /// Exact lookup by raw epoch string.
    pub fn find_by_epoch(&self, epoch: &str) -> Result<&StateVector, TrackerError> {
        self.snapshot
            .get(epoch)
            .ok_or_else(|| TrackerError::EpochNotFound(epoch.to_string()))
    }

    /// The stored vector with minimal absolute time distance to `at`.
    pub fn find_closest(&self, at: Epoch) -> Result<&StateVector, TrackerError> {
        self.snapshot.closest(at).ok_or(TrackerError::EmptyEphemeris)
    }

    pub fn speed(&self, epoch: &str) -> Result<SpeedReport, TrackerError> {
        let vector = self.find_by_epoch(epoch)?;
        Ok(SpeedReport {
            epoch: vector.epoch.clone(),
            speed: vector.speed(),
        })
    }

    pub fn location(&self, epoch: &str) -> Result<LocationReport, TrackerError> {
        let vector = self.find_by_epoch(epoch)?;
        let geo = cartesian_to_geodetic(&vector.position_vector());
        Ok(LocationReport {
            epoch: vector.epoch.clone(),
            latitude: geo.latitude,
            longitude: geo.longitude,
            altitude: geo.altitude,
        })
    }

    /// The vector closest to the current wall clock, with its speed.
    pub fn now(&self) -> Result<NowReport, TrackerError> {
        let wall_clock = Epoch::now()?;
        let vector = self.find_closest(wall_clock)?;
        Ok(NowReport {
            epoch: vector.epoch.clone(),
            position: vector.position,
            velocity: vector.velocity,
            speed: vector.speed(),
        })
    }

    pub fn average_speed(&self) -> KilometerPerSecond {
        self.snapshot.average_speed()
    }
}
