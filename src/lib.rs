//! REST service over the NASA ISS OEM ephemeris feed: fetch the 15-day XML
//! document, parse it into an in-memory set of state vectors, and answer
//! position/velocity/speed queries against it.

pub mod constants;
pub mod conversion;
pub mod env_state;
pub mod ephemeris;
pub mod query;
pub mod server;
pub mod time;
pub mod tracker;
pub mod tracker_errors;

pub use ephemeris::{EphemerisSet, StateVector};
pub use tracker::IssTracker;
pub use tracker_errors::TrackerError;
