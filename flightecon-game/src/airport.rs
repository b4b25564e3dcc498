//! Airport records as loaded from the dataset.
use serde::{Deserialize, Serialize};

use crate::geometry::Coordinate;

pub type AirportId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: AirportId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub continent: String,
    pub iata: String,
    pub icao: String,
    pub lat: f64,
    pub lng: f64,
    /// Runway length in feet.
    pub rwy: u16,
    /// Market size, percent.
    #[serde(default)]
    pub market: u8,
    #[serde(default)]
    pub hub_cost: u32,
}

impl Airport {
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    /// Great-circle distance to another airport, in kilometres.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.coordinate().distance_to(other.coordinate())
    }

    #[must_use]
    pub const fn accepts_runway(&self, requirement: u16) -> bool {
        self.rwy >= requirement
    }
}

impl std::fmt::Display for Airport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}|{}", self.iata, self.icao, self.name)
    }
}
