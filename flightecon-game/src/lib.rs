//! Flight Economics Engine
//!
//! Platform-agnostic route economics for airline-management games: cabin
//! allocation, ticket pricing, stopover search, operating costs and profit,
//! plus a brute-force reference optimizer for checking the closed-form
//! allocator. This crate does no I/O; callers inject a [`Dataset`].

pub mod aircraft;
pub mod airport;
pub mod allocation;
pub mod constants;
pub mod costs;
pub mod dataset;
pub mod demand;
pub mod economics;
pub mod geometry;
pub mod numbers;
pub mod pricing;
pub mod ranking;
pub mod reference;
pub mod route;
pub mod settings;
pub mod stopover;

// Re-export commonly used types
pub use aircraft::{Aircraft, AircraftId, AircraftType};
pub use airport::{Airport, AirportId};
pub use allocation::{
    CargoAlgorithm, CargoConfig, Config, PaxAlgorithm, PaxClass, PaxConfig, PaxStrategyTable,
};
pub use costs::{FlightCosts, estimate_load};
pub use dataset::{
    AircraftQuery, AirportQuery, Dataset, DatasetError, DatasetFile, DemandEntry,
    InMemoryDataset, LookupError, SharedDataset,
};
pub use demand::{CargoDemand, PaxDemand, RouteDemand};
pub use economics::{AircraftEconomics, CabinEconomics, TripDemand};
pub use geometry::{Coordinate, distance};
pub use pricing::{CargoTicket, PaxTicket, Ticket};
pub use ranking::{Destination, find_routes};
pub use reference::{
    BruteCargoConfig, BrutePaxConfig, SimulationParams, brute_cargo_conf, brute_pax_conf,
    simulate_closed_form, simulate_closed_form_cargo,
};
pub use route::{
    AircraftRoute, Route, RouteError, RouteFinancials, RouteOptions, Warning, WarningList,
};
pub use settings::{GameMode, GameSettings, SettingsError};
pub use stopover::Stopover;

/// Query front-end binding a dataset to one player's settings.
pub struct RouteEngine<D>
where
    D: Dataset,
{
    dataset: D,
    settings: GameSettings,
}

impl<D> RouteEngine<D>
where
    D: Dataset,
{
    /// Create an engine after checking the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is outside the range the game allows.
    pub fn new(dataset: D, settings: GameSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self { dataset, settings })
    }

    #[must_use]
    pub const fn dataset(&self) -> &D {
        &self.dataset
    }

    #[must_use]
    pub const fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Assemble one route from query strings.
    ///
    /// # Errors
    ///
    /// Returns an error if a query does not resolve or the route has no
    /// valid airport pair.
    pub fn route(
        &self,
        origin: &str,
        destination: &str,
        aircraft: &str,
        options: &RouteOptions,
    ) -> Result<AircraftRoute, RouteError> {
        let origin = self.dataset.find_airport(origin)?;
        let destination = self.dataset.find_airport(destination)?;
        let aircraft = self.dataset.find_aircraft(aircraft)?;
        AircraftRoute::create(
            &self.dataset,
            origin,
            destination,
            aircraft,
            options,
            &self.settings,
        )
    }

    /// Rank every destination reachable from `origin`.
    ///
    /// # Errors
    ///
    /// Returns an error if the origin or aircraft query does not resolve.
    pub fn destinations(
        &self,
        origin: &str,
        aircraft: &str,
        options: &RouteOptions,
    ) -> Result<Vec<Destination>, LookupError> {
        let origin = self.dataset.find_airport(origin)?;
        let aircraft = self.dataset.find_aircraft(aircraft)?;
        Ok(find_routes(
            &self.dataset,
            origin,
            aircraft,
            options,
            &self.settings,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "airports": [
            {"id": 1, "name": "Origin", "iata": "ORG", "icao": "XORG", "lat": 0.0, "lng": 0.0, "rwy": 9000},
            {"id": 2, "name": "East", "iata": "EST", "icao": "XEST", "lat": 0.0, "lng": 10.0, "rwy": 9000},
            {"id": 3, "name": "Hop", "iata": "HOP", "icao": "XHOP", "lat": 0.0, "lng": 0.5, "rwy": 9000}
        ],
        "aircraft": [
            {"id": 1, "shortname": "j200", "name": "Jet 200", "type": "PAX", "speed": 900.0,
             "fuel": 20.0, "co2": 0.18, "cost": 100000000, "capacity": 200, "rwy": 8000,
             "check_cost": 500000, "range": 5000, "maint": 450}
        ],
        "demand": [
            {"origin": 1, "destination": 2, "y": 150, "j": 40, "f": 10},
            {"origin": 1, "destination": 3, "y": 500, "j": 100, "f": 30},
            {"origin": 2, "destination": 3, "y": 100, "j": 20, "f": 5}
        ]
    }"#;

    fn engine() -> RouteEngine<InMemoryDataset> {
        let dataset = InMemoryDataset::from_json(FIXTURE).unwrap();
        RouteEngine::new(dataset, GameSettings::default()).unwrap()
    }

    #[test]
    fn engine_resolves_queries_and_builds_routes() {
        let engine = engine();
        let route = engine
            .route("ORG", "iata:est", "j200", &RouteOptions::default())
            .unwrap();
        assert!(route.valid);
        assert_eq!(route.needs_stopover, Some(false));
        assert!(route.profit().is_some());
    }

    #[test]
    fn engine_surfaces_lookup_failures() {
        let engine = engine();
        let err = engine
            .route("ORG", "ZZZ", "j200", &RouteOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            RouteError::Lookup(LookupError::AirportNotFound { .. })
        ));
        let err = engine
            .route("ORG", "ORG", "j200", &RouteOptions::default())
            .unwrap_err();
        assert_eq!(err, RouteError::SameEndpoints { airport: 1 });
    }

    #[test]
    fn engine_ranks_only_valid_destinations() {
        let engine = engine();
        let ranked = engine
            .destinations("ORG", "j200", &RouteOptions::default())
            .unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].airport.iata, "EST");
    }

    #[test]
    fn engine_rejects_invalid_settings() {
        let dataset = InMemoryDataset::from_json(FIXTURE).unwrap();
        let settings = GameSettings {
            load: 1.5,
            ..GameSettings::default()
        };
        assert!(RouteEngine::new(dataset, settings).is_err());
    }
}
