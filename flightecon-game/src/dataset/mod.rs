//! Read-only airport, aircraft and demand lookups.
//!
//! The engine never reaches for global tables: every operation takes a
//! [`Dataset`] handle. [`InMemoryDataset`] is the bundled implementation,
//! loaded once from JSON; [`SharedDataset`] lets a host swap in a reloaded
//! snapshot without disturbing queries already running.
use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aircraft::{Aircraft, AircraftId};
use crate::airport::{Airport, AirportId};
use crate::demand::{CargoDemand, PaxDemand, RouteDemand};

mod query;
mod shared;
mod suggest;

pub use query::{AircraftQuery, AirportQuery};
pub use shared::SharedDataset;

/// A requested entity is missing from the dataset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("airport not found: {query}{}", suggest::did_you_mean(.suggestions))]
    AirportNotFound {
        query: String,
        /// Closest matches, best first.
        suggestions: Vec<String>,
    },
    #[error("aircraft not found: {query}{}", suggest::did_you_mean(.suggestions))]
    AircraftNotFound {
        query: String,
        suggestions: Vec<String>,
    },
    #[error("no demand recorded from airport {origin} to airport {destination}")]
    DemandNotFound {
        origin: AirportId,
        destination: AirportId,
    },
    #[error("invalid query: {query}")]
    InvalidQuery { query: String },
}

/// Dataset file could not be turned into a consistent dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to parse dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate airport id {id}")]
    DuplicateAirport { id: AirportId },
    #[error("duplicate aircraft id {id}")]
    DuplicateAircraft { id: AircraftId },
    #[error("demand entry references unknown airport {id}")]
    UnknownAirport { id: AirportId },
}

/// Read-only view over airports, aircraft and route demand.
pub trait Dataset {
    /// Every airport in dataset order.
    fn airports(&self) -> &[Airport];

    /// Every aircraft in dataset order.
    fn aircraft(&self) -> &[Aircraft];

    /// Demand for the ordered pair, if recorded.
    fn demand(&self, origin: AirportId, destination: AirportId) -> Option<RouteDemand>;

    fn airport_by_id(&self, id: AirportId) -> Option<&Airport> {
        self.airports().iter().find(|ap| ap.id == id)
    }

    /// Resolve an airport query string.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidQuery`] for malformed queries and
    /// [`LookupError::AirportNotFound`], carrying near matches, when nothing
    /// matches.
    fn find_airport(&self, query: &str) -> Result<&Airport, LookupError> {
        let parsed: AirportQuery = query.parse()?;
        let airports = self.airports();
        let found = match &parsed {
            AirportQuery::Id(id) => self.airport_by_id(*id),
            AirportQuery::Iata(code) => find_in(airports, |ap| ap.iata.eq_ignore_ascii_case(code)),
            AirportQuery::Icao(code) => find_in(airports, |ap| ap.icao.eq_ignore_ascii_case(code)),
            AirportQuery::Name(name) => find_in(airports, |ap| ap.name.eq_ignore_ascii_case(name)),
            AirportQuery::Any(term) => find_in(airports, |ap| ap.iata.eq_ignore_ascii_case(term))
                .or_else(|| find_in(airports, |ap| ap.icao.eq_ignore_ascii_case(term)))
                .or_else(|| find_in(airports, |ap| ap.name.eq_ignore_ascii_case(term)))
                .or_else(|| {
                    term.parse::<AirportId>()
                        .ok()
                        .and_then(|id| self.airport_by_id(id))
                }),
        };
        found.ok_or_else(|| LookupError::AirportNotFound {
            query: query.trim().to_string(),
            suggestions: suggest::airports(airports, &parsed),
        })
    }

    /// Resolve an aircraft query string.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidQuery`] for malformed queries and
    /// [`LookupError::AircraftNotFound`] when nothing matches.
    fn find_aircraft(&self, query: &str) -> Result<&Aircraft, LookupError> {
        let parsed: AircraftQuery = query.parse()?;
        let fleet = self.aircraft();
        let found = match &parsed {
            AircraftQuery::Id(id) => find_in(fleet, |ac| ac.id == *id),
            AircraftQuery::Shortname(sn) => {
                find_in(fleet, |ac| ac.shortname.eq_ignore_ascii_case(sn))
            }
            AircraftQuery::Name(name) => find_in(fleet, |ac| ac.name.eq_ignore_ascii_case(name)),
            AircraftQuery::Any(term) => find_in(fleet, |ac| ac.shortname.eq_ignore_ascii_case(term))
                .or_else(|| find_in(fleet, |ac| ac.name.eq_ignore_ascii_case(term)))
                .or_else(|| {
                    term.parse::<AircraftId>()
                        .ok()
                        .and_then(|id| find_in(fleet, |ac| ac.id == id))
                }),
        };
        found.ok_or_else(|| LookupError::AircraftNotFound {
            query: query.trim().to_string(),
            suggestions: suggest::aircraft(fleet, &parsed),
        })
    }

    /// Demand for the ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::DemandNotFound`] when the pair is unknown.
    fn lookup_demand(
        &self,
        origin: AirportId,
        destination: AirportId,
    ) -> Result<RouteDemand, LookupError> {
        self.demand(origin, destination)
            .ok_or(LookupError::DemandNotFound {
                origin,
                destination,
            })
    }
}

impl<D: Dataset + ?Sized> Dataset for Arc<D> {
    fn airports(&self) -> &[Airport] {
        (**self).airports()
    }

    fn aircraft(&self) -> &[Aircraft] {
        (**self).aircraft()
    }

    fn demand(&self, origin: AirportId, destination: AirportId) -> Option<RouteDemand> {
        (**self).demand(origin, destination)
    }

    fn airport_by_id(&self, id: AirportId) -> Option<&Airport> {
        (**self).airport_by_id(id)
    }
}

/// One demand record as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandEntry {
    pub origin: AirportId,
    pub destination: AirportId,
    pub y: u32,
    pub j: u32,
    pub f: u32,
    /// Large cargo, lbs. Derived from economy demand when absent.
    #[serde(default)]
    pub l: Option<u32>,
    /// Heavy cargo, lbs. Derived from business demand when absent.
    #[serde(default)]
    pub h: Option<u32>,
    /// Direct distance, km. Computed from coordinates when absent.
    #[serde(default)]
    pub distance: Option<f64>,
}

/// On-disk dataset layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetFile {
    pub airports: Vec<Airport>,
    #[serde(default)]
    pub aircraft: Vec<Aircraft>,
    #[serde(default)]
    pub demand: Vec<DemandEntry>,
    /// Register every entry for the reverse direction too, unless that
    /// direction has its own entry.
    #[serde(default = "DatasetFile::default_bidirectional")]
    pub bidirectional: bool,
}

impl DatasetFile {
    const fn default_bidirectional() -> bool {
        true
    }
}

/// Immutable dataset held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    airports: Vec<Airport>,
    aircraft: Vec<Aircraft>,
    airport_index: HashMap<AirportId, usize>,
    demand: HashMap<(AirportId, AirportId), RouteDemand>,
}

impl InMemoryDataset {
    /// Parse and index a dataset from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the records are inconsistent.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Index already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns an error on duplicate ids or demand referencing unknown airports.
    pub fn from_file(file: DatasetFile) -> Result<Self, DatasetError> {
        let DatasetFile {
            airports,
            aircraft,
            demand,
            bidirectional,
        } = file;

        let mut airport_index = HashMap::with_capacity(airports.len());
        for (idx, ap) in airports.iter().enumerate() {
            if airport_index.insert(ap.id, idx).is_some() {
                return Err(DatasetError::DuplicateAirport { id: ap.id });
            }
        }
        let mut seen_aircraft = HashSet::with_capacity(aircraft.len());
        for ac in &aircraft {
            if !seen_aircraft.insert(ac.id) {
                return Err(DatasetError::DuplicateAircraft { id: ac.id });
            }
        }

        let mut table = HashMap::with_capacity(demand.len() * 2);
        let mut mirrored = Vec::new();
        for entry in &demand {
            let origin = lookup_index(&airports, &airport_index, entry.origin)?;
            let destination = lookup_index(&airports, &airport_index, entry.destination)?;
            let route_demand = entry.resolve(origin, destination);
            table.insert((entry.origin, entry.destination), route_demand);
            if bidirectional {
                mirrored.push(((entry.destination, entry.origin), route_demand));
            }
        }
        for (key, route_demand) in mirrored {
            if let Entry::Vacant(slot) = table.entry(key) {
                slot.insert(route_demand);
            }
        }

        Ok(Self {
            airports,
            aircraft,
            airport_index,
            demand: table,
        })
    }

    #[must_use]
    pub fn demand_len(&self) -> usize {
        self.demand.len()
    }
}

impl Dataset for InMemoryDataset {
    fn airports(&self) -> &[Airport] {
        &self.airports
    }

    fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    fn demand(&self, origin: AirportId, destination: AirportId) -> Option<RouteDemand> {
        self.demand.get(&(origin, destination)).copied()
    }

    fn airport_by_id(&self, id: AirportId) -> Option<&Airport> {
        self.airport_index
            .get(&id)
            .and_then(|idx| self.airports.get(*idx))
    }
}

impl DemandEntry {
    fn resolve(&self, origin: &Airport, destination: &Airport) -> RouteDemand {
        let pax = PaxDemand::new(self.y, self.j, self.f);
        let derived = CargoDemand::from(pax);
        RouteDemand {
            pax,
            cargo: CargoDemand::new(self.l.unwrap_or(derived.l), self.h.unwrap_or(derived.h)),
            distance: self
                .distance
                .unwrap_or_else(|| origin.distance_to(destination)),
        }
    }
}

fn find_in<T>(items: &[T], pred: impl Fn(&T) -> bool) -> Option<&T> {
    items.iter().find(|item| pred(item))
}

fn lookup_index<'a>(
    airports: &'a [Airport],
    index: &HashMap<AirportId, usize>,
    id: AirportId,
) -> Result<&'a Airport, DatasetError> {
    index
        .get(&id)
        .and_then(|idx| airports.get(*idx))
        .ok_or(DatasetError::UnknownAirport { id })
}
