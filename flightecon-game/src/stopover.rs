//! Single-hop stopover search for routes beyond an aircraft's range.
use log::trace;
use serde::{Deserialize, Serialize};

use crate::aircraft::Aircraft;
use crate::airport::Airport;
use crate::constants::MIN_ROUTE_DISTANCE;
use crate::settings::GameMode;

/// Intermediate airport splitting a route into two legs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "StopoverRecord", from = "StopoverRecord")]
pub enum Stopover {
    #[default]
    None,
    Via {
        airport: Airport,
        /// Sum of both legs, km.
        full_distance: f64,
    },
}

impl Stopover {
    /// Scan `airports` for the candidate with the shortest two-leg total.
    ///
    /// Candidates must accept the aircraft's runway (waived in easy mode),
    /// differ from both endpoints, and keep each leg within
    /// `[100, aircraft.range]`. Ties keep the earliest candidate.
    ///
    /// Every leg is measured from coordinates. A dataset's stored direct
    /// distance plays no part here, so `full_distance` can come out shorter
    /// than the stored distance that made the stopover necessary.
    #[must_use]
    pub fn find_by_efficiency<'a, I>(
        airports: I,
        origin: &Airport,
        destination: &Airport,
        aircraft: &Aircraft,
        mode: GameMode,
    ) -> Self
    where
        I: IntoIterator<Item = &'a Airport>,
    {
        let requirement = mode.runway_requirement(aircraft.rwy);
        let range = aircraft.range_km();
        let leg_ok = |leg: f64| (MIN_ROUTE_DISTANCE..=range).contains(&leg);

        let mut best: Option<(&Airport, f64)> = None;
        for candidate in airports {
            if !candidate.accepts_runway(requirement)
                || candidate.id == origin.id
                || candidate.id == destination.id
            {
                continue;
            }
            let to_origin = origin.distance_to(candidate);
            if !leg_ok(to_origin) {
                continue;
            }
            let to_destination = candidate.distance_to(destination);
            if !leg_ok(to_destination) {
                continue;
            }
            let total = to_origin + to_destination;
            trace!(
                "stopover candidate {} for {} -> {}: {total:.1} km",
                candidate.iata, origin.iata, destination.iata
            );
            if best.is_none_or(|(_, shortest)| total < shortest) {
                best = Some((candidate, total));
            }
        }

        best.map_or(Self::None, |(airport, full_distance)| Self::Via {
            airport: airport.clone(),
            full_distance,
        })
    }

    #[must_use]
    pub const fn exists(&self) -> bool {
        matches!(self, Self::Via { .. })
    }

    #[must_use]
    pub const fn airport(&self) -> Option<&Airport> {
        match self {
            Self::None => None,
            Self::Via { airport, .. } => Some(airport),
        }
    }

    #[must_use]
    pub const fn full_distance(&self) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Via { full_distance, .. } => Some(*full_distance),
        }
    }
}

/// Wire form: `{ "exists": false }` or `{ "airport", "full_distance", "exists": true }`.
#[derive(Serialize, Deserialize)]
struct StopoverRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    airport: Option<Airport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    full_distance: Option<f64>,
    exists: bool,
}

impl From<Stopover> for StopoverRecord {
    fn from(stopover: Stopover) -> Self {
        match stopover {
            Stopover::None => Self {
                airport: None,
                full_distance: None,
                exists: false,
            },
            Stopover::Via {
                airport,
                full_distance,
            } => Self {
                airport: Some(airport),
                full_distance: Some(full_distance),
                exists: true,
            },
        }
    }
}

impl From<StopoverRecord> for Stopover {
    fn from(record: StopoverRecord) -> Self {
        match (record.exists, record.airport, record.full_distance) {
            (true, Some(airport), Some(full_distance)) => Self::Via {
                airport,
                full_distance,
            },
            _ => Self::None,
        }
    }
}
