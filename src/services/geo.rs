//! Great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A point in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine distance to `other`, in miles rounded to one decimal.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine_miles(*self, *other)
    }
}

/// Haversine distance in miles, rounded to one decimal place.
pub fn haversine_miles(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Clamp guards asin against h drifting past 1.0 for antipodal points
    let c = 2.0 * h.sqrt().min(1.0).asin();

    (EARTH_RADIUS_MILES * c * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const DENVER: GeoPoint = GeoPoint::new(39.7392, -104.9903);
    const BOULDER: GeoPoint = GeoPoint::new(40.0150, -105.2705);

    #[test]
    fn test_identical_points() {
        assert_eq!(haversine_miles(DENVER, DENVER), 0.0);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(haversine_miles(DENVER, BOULDER), haversine_miles(BOULDER, DENVER));
    }

    #[test]
    fn test_known_distance() {
        // Denver to Boulder is roughly 24 miles as the crow flies
        let d = DENVER.distance_to(&BOULDER);
        assert!((23.0..26.0).contains(&d), "got {}", d);
        assert_eq!(d, (d * 10.0).round() / 10.0);
    }
}
