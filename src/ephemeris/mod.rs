//! # Ephemeris: state vectors and the in-memory store
//!
//! The central types of the data-access layer:
//!
//! * [`StateVector`] — one timestamped position/velocity sample of the ISS
//!   trajectory, keyed by the raw feed timestamp string.
//! * [`EphemerisSet`] — the ordered, read-only collection built from one
//!   parse of the upstream OEM document.
//!
//! Modules
//! -----------------
//! * [`oem_reader`](crate::ephemeris::oem_reader) – Schema-validated parse of
//!   the upstream OEM/NDM XML into `Vec<StateVector>`.
//!
//! Data Model
//! -----------------
//! * **Key:** the raw epoch string (`2025-074T11:34:54.000Z`), unique within
//!   a set; on duplicates the first occurrence wins.
//! * **Order:** the source feed's chronological order is preserved.
//! * **Lifecycle:** a set is immutable once built; refreshing the data means
//!   building a new set and swapping the shared reference.
//!
//! Units & Time Scales
//! -----------------
//! * Positions are **kilometers**, velocities **kilometers per second**, in
//!   the J2000 frame as published by the feed.
//! * Parsed epochs are UTC [`hifitime::Epoch`] values with millisecond
//!   precision from the feed.

use std::collections::HashMap;

use hifitime::Epoch;
use nalgebra::Vector3;
use serde::Serialize;
use tracing::warn;

use crate::constants::KilometerPerSecond;

pub mod oem_reader;

/// One ISS trajectory sample: position and velocity at a given epoch.
///
/// The raw `epoch` string is the lookup key used by the query layer; `at` is
/// its parsed, comparable form and is not serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateVector {
    pub epoch: String,
    #[serde(skip)]
    pub at: Epoch,
    /// Position components (x, y, z) in km
    pub position: [f64; 3],
    /// Velocity components (x_dot, y_dot, z_dot) in km/s
    pub velocity: [f64; 3],
}

impl StateVector {
    pub fn position_vector(&self) -> Vector3<f64> {
        Vector3::from(self.position)
    }

    pub fn velocity_vector(&self) -> Vector3<f64> {
        Vector3::from(self.velocity)
    }

    /// Instantaneous speed, the Euclidean norm of the velocity components.
    pub fn speed(&self) -> KilometerPerSecond {
        self.velocity_vector().norm()
    }
}

/// The in-memory store: an ordered sequence of [`StateVector`] plus an index
/// from epoch string to position in the sequence.
#[derive(Debug, Default)]
pub struct EphemerisSet {
    vectors: Vec<StateVector>,
    by_epoch: HashMap<String, usize>,
}

impl EphemerisSet {
    /// Build a set from parsed records, preserving input order.
    ///
    /// Duplicate epochs keep the first occurrence; later ones are dropped
    /// with a warning.
    pub fn from_vectors(vectors: Vec<StateVector>) -> Self {
        let mut kept: Vec<StateVector> = Vec::with_capacity(vectors.len());
        let mut by_epoch: HashMap<String, usize> = HashMap::with_capacity(vectors.len());

        for vector in vectors {
            match by_epoch.entry(vector.epoch.clone()) {
                std::collections::hash_map::Entry::Occupied(_) => {
                    warn!(epoch = %vector.epoch, "duplicate epoch in feed, keeping first");
                }
                std::collections::hash_map::Entry::Vacant(entry) => {
                    entry.insert(kept.len());
                    kept.push(vector);
                }
            }
        }

        EphemerisSet {
            vectors: kept,
            by_epoch,
        }
    }

    /// Full ordered sequence.
    pub fn all(&self) -> &[StateVector] {
        &self.vectors
    }

    /// Sub-sequence starting at `offset` of length `limit`.
    ///
    /// Absent values default to the start of the sequence and the full
    /// remainder respectively. Out-of-range offsets clamp to an empty slice.
    pub fn slice(&self, offset: Option<usize>, limit: Option<usize>) -> &[StateVector] {
        let start = offset.unwrap_or(0).min(self.vectors.len());
        let end = match limit {
            Some(limit) => start.saturating_add(limit).min(self.vectors.len()),
            None => self.vectors.len(),
        };
        &self.vectors[start..end]
    }

    /// Exact lookup by raw epoch string.
    pub fn get(&self, epoch: &str) -> Option<&StateVector> {
        self.by_epoch.get(epoch).map(|&idx| &self.vectors[idx])
    }

    /// The stored vector whose epoch minimizes `|at - epoch|`.
    ///
    /// Ties are broken by first occurrence in the sequence. `None` for an
    /// empty set.
    pub fn closest(&self, at: Epoch) -> Option<&StateVector> {
        self.vectors
            .iter()
            .min_by_key(|vector| (vector.at - at).abs())
    }

    /// Mean instantaneous speed over the whole set, 0 when empty.
    pub fn average_speed(&self) -> KilometerPerSecond {
        if self.vectors.is_empty() {
            return 0.0;
        }
        let total: f64 = self.vectors.iter().map(StateVector::speed).sum();
        total / self.vectors.len() as f64
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
