//! Great-circle distances between airports.

use serde::{Deserialize, Serialize};

/// Mean Earth diameter in kilometres used by the game.
pub const EARTH_DIAMETER_KM: f64 = 12_742.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another coordinate, in kilometres.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        distance(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Haversine great-circle distance in kilometres; inputs are in degrees.
#[must_use]
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    EARTH_DIAMETER_KM * h.sqrt().asin()
}
