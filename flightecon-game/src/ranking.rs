//! Destination ranking: every reachable route from one origin, best first.
use log::{debug, trace};
use serde::Serialize;

use crate::aircraft::Aircraft;
use crate::airport::Airport;
use crate::constants::MAX_RANGE_MULTIPLIER;
use crate::dataset::Dataset;
use crate::route::{AircraftRoute, RouteOptions};
use crate::settings::GameSettings;

/// A valid route to `airport`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Destination {
    pub airport: Airport,
    pub route: AircraftRoute,
}

impl Destination {
    #[must_use]
    pub fn profit(&self) -> f64 {
        self.route.profit().unwrap_or(f64::NEG_INFINITY)
    }
}

/// Assemble a route from `origin` to every other airport that accepts the
/// aircraft and keep the valid ones, sorted by descending profit.
///
/// Equal profits keep dataset order. Pairs without demand are skipped.
#[must_use]
pub fn find_routes<D: Dataset + ?Sized>(
    dataset: &D,
    origin: &Airport,
    aircraft: &Aircraft,
    options: &RouteOptions,
    settings: &GameSettings,
) -> Vec<Destination> {
    let reach = MAX_RANGE_MULTIPLIER * aircraft.range_km();
    let options = options.with_max_distance(options.max_distance.min(reach));
    let requirement = settings.mode.runway_requirement(aircraft.rwy);

    let mut scanned = 0_usize;
    let mut destinations: Vec<Destination> = Vec::new();
    for airport in dataset.airports() {
        if !airport.accepts_runway(requirement) || airport.id == origin.id {
            continue;
        }
        scanned += 1;
        match AircraftRoute::create(dataset, origin, airport, aircraft, &options, settings) {
            Ok(route) if route.valid => destinations.push(Destination {
                airport: airport.clone(),
                route,
            }),
            Ok(_) => {}
            Err(err) => trace!("skipping {} -> {}: {err}", origin.iata, airport.iata),
        }
    }

    destinations.sort_by(|a, b| b.profit().total_cmp(&a.profit()));
    debug!(
        "ranked {} destinations from {} for {} ({scanned} candidates scanned)",
        destinations.len(),
        origin.iata,
        aircraft.shortname
    );
    destinations
}
