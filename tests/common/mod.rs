#![allow(dead_code)]

use iss_tracker::ephemeris::{EphemerisSet, StateVector};
use iss_tracker::time::parse_epoch;

/// Build a [`StateVector`] from the raw feed-style fields.
pub fn state_vector(epoch: &str, position: [f64; 3], velocity: [f64; 3]) -> StateVector {
    StateVector {
        epoch: epoch.to_string(),
        at: parse_epoch(epoch).expect("test epoch must parse"),
        position,
        velocity,
    }
}

/// The two reference samples used across the query tests.
pub fn sample_set() -> EphemerisSet {
    EphemerisSet::from_vectors(vec![
        state_vector(
            "2025-055T12:00:00.000Z",
            [-4488.3365, 5094.0272, -251.5952],
            [-3.7069, -2.9739, 6.0133],
        ),
        state_vector(
            "2025-056T14:30:00.000Z",
            [-4499.0030, 5000.2340, -400.1230],
            [-3.5000, -2.9000, 6.0500],
        ),
    ])
}

/// A larger hour-spaced set for the pagination properties.
pub fn spaced_set(count: usize) -> EphemerisSet {
    let vectors = (0..count)
        .map(|i| {
            state_vector(
                &format!("2025-074T{:02}:34:54.000Z", i),
                [-4488.3365 + i as f64, 5094.0272, -251.5952],
                [5.3675, 5.3571, -0.9957],
            )
        })
        .collect();
    EphemerisSet::from_vectors(vectors)
}
