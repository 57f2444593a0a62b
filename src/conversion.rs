//! Conversion from Cartesian J2000 positions to geodetic coordinates.
//!
//! Uses a spherical-Earth approximation: latitude and longitude come straight
//! from the position direction, altitude is the distance to the sphere of
//! radius [`EARTH_RADIUS_KM`](crate::constants::EARTH_RADIUS_KM).

use nalgebra::Vector3;
use serde::Serialize;

use crate::constants::{Degree, Kilometer, DEG_PER_RAD, EARTH_RADIUS_KM};

/// A subsatellite point: geodetic latitude/longitude plus altitude above the
/// mean Earth sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeodeticPoint {
    pub latitude: Degree,
    pub longitude: Degree,
    pub altitude: Kilometer,
}

/// Convert a Cartesian position (km) into a [`GeodeticPoint`].
///
/// Arguments
/// ---------
/// * `position`: position vector in kilometers
///
/// Return
/// ------
/// * latitude and longitude in degrees, altitude in kilometers
pub fn cartesian_to_geodetic(position: &Vector3<f64>) -> GeodeticPoint {
    let (x, y, z) = (position.x, position.y, position.z);

    let longitude = y.atan2(x) * DEG_PER_RAD;
    let latitude = z.atan2(x.hypot(y)) * DEG_PER_RAD;
    let altitude = position.norm() - EARTH_RADIUS_KM;

    GeodeticPoint {
        latitude,
        longitude,
        altitude,
    }
}

#[cfg(test)]
mod conversion_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cartesian_to_geodetic() {
        let position = Vector3::new(-4488.3365, 5094.0272, -251.5952);
        let geo = cartesian_to_geodetic(&position);

        assert_relative_eq!(geo.latitude, -2.1222805461714476, epsilon = 1e-9);
        assert_relative_eq!(geo.longitude, 131.38320829652244, epsilon = 1e-9);
        assert_relative_eq!(geo.altitude, 422.9368407599386, epsilon = 1e-9);
    }

    #[test]
    fn test_cartesian_to_geodetic_axes() {
        // On the +X axis: equator, prime meridian
        let geo = cartesian_to_geodetic(&Vector3::new(EARTH_RADIUS_KM + 400.0, 0.0, 0.0));
        assert_relative_eq!(geo.latitude, 0.0);
        assert_relative_eq!(geo.longitude, 0.0);
        assert_relative_eq!(geo.altitude, 400.0, epsilon = 1e-9);

        // Over the north pole
        let geo = cartesian_to_geodetic(&Vector3::new(0.0, 0.0, EARTH_RADIUS_KM));
        assert_relative_eq!(geo.latitude, 90.0);
        assert_relative_eq!(geo.altitude, 0.0, epsilon = 1e-9);
    }
}
