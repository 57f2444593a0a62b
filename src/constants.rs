//! # Constants and type definitions
//!
//! Centralizes the physical constants, unit aliases, and upstream endpoints
//! used throughout the crate. These definitions are shared by the ephemeris
//! store, the geodetic conversion routines, and the tracker façade.

// -------------------------------------------------------------------------------------------------
// Upstream endpoints
// -------------------------------------------------------------------------------------------------

/// NASA public OEM ephemeris for the ISS (15-day sliding window, J2000 frame).
pub const ISS_OEM_URL: &str =
    "https://nasa-public-data.s3.amazonaws.com/iss-coords/current/ISS_OEM/ISS.OEM_J2K_EPH.xml";

// -------------------------------------------------------------------------------------------------
// Physical constants
// -------------------------------------------------------------------------------------------------

/// Mean Earth radius in kilometers, spherical approximation.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Degrees per radian.
pub const DEG_PER_RAD: f64 = 180.0 / std::f64::consts::PI;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;

/// Distance in kilometers
pub type Kilometer = f64;

/// Velocity in kilometers per second
pub type KilometerPerSecond = f64;
