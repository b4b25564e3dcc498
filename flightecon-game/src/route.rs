//! Route assembly: gate checks, allocation, pricing, costs and profit.
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::aircraft::Aircraft;
use crate::airport::{Airport, AirportId};
use crate::allocation::Config;
use crate::constants::{MAX_RANGE_MULTIPLIER, MIN_ROUTE_DISTANCE, REDUCED_CONTRIBUTION_DISTANCE};
use crate::costs::FlightCosts;
use crate::dataset::{Dataset, LookupError};
use crate::demand::{CargoDemand, PaxDemand};
use crate::economics::{CabinEconomics, TripDemand};
use crate::pricing::Ticket;
use crate::settings::GameSettings;
use crate::stopover::Stopover;

/// Preconditions that stop a route from being built at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("origin and destination are the same airport ({airport})")]
    SameEndpoints { airport: AirportId },
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Diagnostics attached to an [`AircraftRoute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Warning {
    ErrDistanceAboveSpecified,
    ErrDistanceTooLong,
    ErrDistanceTooShort,
    ReducedContribution,
    ErrNoStopover,
    ErrFlightTimeAboveSpecified,
    ErrInsufficientDemand,
}

impl Warning {
    /// Whether this warning stops route assembly.
    #[must_use]
    pub const fn is_blocking(self) -> bool {
        !matches!(self, Self::ReducedContribution)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ErrDistanceAboveSpecified => "ERR_DISTANCE_ABOVE_SPECIFIED",
            Self::ErrDistanceTooLong => "ERR_DISTANCE_TOO_LONG",
            Self::ErrDistanceTooShort => "ERR_DISTANCE_TOO_SHORT",
            Self::ReducedContribution => "REDUCED_CONTRIBUTION",
            Self::ErrNoStopover => "ERR_NO_STOPOVER",
            Self::ErrFlightTimeAboveSpecified => "ERR_FLIGHT_TIME_ABOVE_SPECIFIED",
            Self::ErrInsufficientDemand => "ERR_INSUFFICIENT_DEMAND",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// At most one soft warning plus one blocking warning.
pub type WarningList = SmallVec<[Warning; 2]>;

/// Caller-side limits for route assembly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteOptions {
    #[serde(default = "RouteOptions::default_trips_per_day")]
    pub trips_per_day: u32,
    /// Maximum direct distance, km.
    #[serde(default = "RouteOptions::unlimited")]
    pub max_distance: f64,
    /// Maximum flight time, hours.
    #[serde(default = "RouteOptions::unlimited")]
    pub max_flight_time: f64,
}

impl RouteOptions {
    const fn default_trips_per_day() -> u32 {
        1
    }

    const fn unlimited() -> f64 {
        f64::INFINITY
    }

    #[must_use]
    pub const fn new(trips_per_day: u32, max_distance: f64, max_flight_time: f64) -> Self {
        let trips_per_day = if trips_per_day == 0 { 1 } else { trips_per_day };
        Self {
            trips_per_day,
            max_distance,
            max_flight_time,
        }
    }

    #[must_use]
    pub const fn with_trips_per_day(self, trips_per_day: u32) -> Self {
        Self::new(trips_per_day, self.max_distance, self.max_flight_time)
    }

    #[must_use]
    pub const fn with_max_distance(self, max_distance: f64) -> Self {
        Self::new(self.trips_per_day, max_distance, self.max_flight_time)
    }

    #[must_use]
    pub const fn with_max_flight_time(self, max_flight_time: f64) -> Self {
        Self::new(self.trips_per_day, self.max_distance, max_flight_time)
    }

    const fn trips(&self) -> u32 {
        if self.trips_per_day == 0 {
            1
        } else {
            self.trips_per_day
        }
    }
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self::new(
            Self::default_trips_per_day(),
            Self::unlimited(),
            Self::unlimited(),
        )
    }
}

/// Demand and distance for a known, distinct airport pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub origin: AirportId,
    pub destination: AirportId,
    pub pax_demand: PaxDemand,
    pub cargo_demand: CargoDemand,
    /// Great-circle distance, km.
    pub direct_distance: f64,
    pub valid: bool,
}

impl Route {
    /// # Errors
    ///
    /// Returns [`RouteError::SameEndpoints`] for identical airports and
    /// [`RouteError::Lookup`] when the dataset has no demand for the pair.
    pub fn create<D: Dataset + ?Sized>(
        dataset: &D,
        origin: &Airport,
        destination: &Airport,
    ) -> Result<Self, RouteError> {
        if origin.id == destination.id {
            return Err(RouteError::SameEndpoints { airport: origin.id });
        }
        let demand = dataset.lookup_demand(origin.id, destination.id)?;
        Ok(Self {
            origin: origin.id,
            destination: destination.id,
            pax_demand: demand.pax,
            cargo_demand: demand.cargo,
            direct_distance: demand.distance,
            valid: true,
        })
    }

    /// Demand one flight must be sized against.
    #[must_use]
    pub fn demand_per_trip(&self, trips_per_day: u32, load: f64) -> TripDemand {
        TripDemand {
            pax: self.pax_demand.per_trip_at_load(trips_per_day, load),
            cargo: self.cargo_demand.per_trip_at_load(trips_per_day, load),
        }
    }
}

/// Allocation, prices and money for a route that passed every gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteFinancials {
    pub config: Config,
    pub ticket: Ticket,
    /// Income of one flight at 100% load.
    pub max_income: f64,
    /// Income of one flight at the assumed load.
    pub income: f64,
    pub fuel: f64,
    pub co2: f64,
    pub acheck_cost: f64,
    pub repair_cost: f64,
    pub profit: f64,
}

/// A [`Route`] flown by one aircraft.
///
/// Fields are filled in gate order; an assembly that stops early leaves the
/// later ones `None`, and they are left out of the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftRoute {
    pub route: Route,
    pub warnings: WarningList,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_stopover: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopover: Option<Stopover>,
    /// Hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_time: Option<f64>,
    #[serde(flatten)]
    pub financials: Option<RouteFinancials>,
}

impl AircraftRoute {
    /// Run every gate for `aircraft` flying `origin` to `destination`.
    ///
    /// Gate failures are reported through [`AircraftRoute::warnings`] with
    /// `valid == false`; only missing preconditions are errors.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] for identical endpoints or an unknown pair.
    pub fn create<D: Dataset + ?Sized>(
        dataset: &D,
        origin: &Airport,
        destination: &Airport,
        aircraft: &Aircraft,
        options: &RouteOptions,
        settings: &GameSettings,
    ) -> Result<Self, RouteError> {
        let route = Route::create(dataset, origin, destination)?;
        let mut acr = Self::pending(route);
        let distance = route.direct_distance;
        let range = aircraft.range_km();

        let distance_gate = if distance > options.max_distance {
            Some(Warning::ErrDistanceAboveSpecified)
        } else if distance > MAX_RANGE_MULTIPLIER * range {
            Some(Warning::ErrDistanceTooLong)
        } else if distance < MIN_ROUTE_DISTANCE {
            Some(Warning::ErrDistanceTooShort)
        } else {
            None
        };
        if let Some(warning) = distance_gate {
            return Ok(acr.reject(warning, origin, destination));
        }
        if distance < REDUCED_CONTRIBUTION_DISTANCE {
            acr.warnings.push(Warning::ReducedContribution);
        }

        let needs_stopover = distance > range;
        let stopover = if needs_stopover {
            Stopover::find_by_efficiency(
                dataset.airports(),
                origin,
                destination,
                aircraft,
                settings.mode,
            )
        } else {
            Stopover::None
        };
        let full_distance = stopover.full_distance().unwrap_or(distance);
        let found = stopover.exists();
        acr.needs_stopover = Some(needs_stopover);
        acr.stopover = Some(stopover);
        if needs_stopover && !found {
            return Ok(acr.reject(Warning::ErrNoStopover, origin, destination));
        }

        let flight_time = full_distance / (aircraft.speed * settings.mode.speed_multiplier());
        acr.flight_time = Some(flight_time);
        if flight_time > options.max_flight_time {
            return Ok(acr.reject(Warning::ErrFlightTimeAboveSpecified, origin, destination));
        }

        let economics = aircraft.economics();
        let per_trip = route.demand_per_trip(options.trips(), settings.load);
        let config = economics.allocate(&per_trip, aircraft.capacity, distance, settings);
        if !config.is_valid() {
            return Ok(acr.reject(Warning::ErrInsufficientDemand, origin, destination));
        }

        let ticket = economics.price(distance, settings);
        let max_income = economics.max_income(&config, &ticket, aircraft.capacity);
        let income = max_income * settings.load;
        let costs = FlightCosts::compute(aircraft, &config, full_distance, flight_time, settings);
        acr.financials = Some(RouteFinancials {
            config,
            ticket,
            max_income,
            income,
            fuel: costs.fuel,
            co2: costs.co2,
            acheck_cost: costs.acheck_cost,
            repair_cost: costs.repair_cost,
            profit: income - costs.total(settings),
        });
        acr.valid = true;
        Ok(acr)
    }

    fn pending(route: Route) -> Self {
        Self {
            route,
            warnings: WarningList::new(),
            valid: false,
            needs_stopover: None,
            stopover: None,
            flight_time: None,
            financials: None,
        }
    }

    fn reject(mut self, warning: Warning, origin: &Airport, destination: &Airport) -> Self {
        debug!(
            "route {} -> {} rejected: {warning}",
            origin.iata, destination.iata
        );
        self.warnings.push(warning);
        self
    }

    #[must_use]
    pub fn profit(&self) -> Option<f64> {
        self.financials.as_ref().map(|fin| fin.profit)
    }

    #[must_use]
    pub fn has_warning(&self, warning: Warning) -> bool {
        self.warnings.contains(&warning)
    }

    /// Leg distance actually flown: the coordinate-measured legs via the
    /// stopover when one was used, otherwise the stored direct distance.
    #[must_use]
    pub fn full_distance(&self) -> f64 {
        self.stopover
            .as_ref()
            .and_then(Stopover::full_distance)
            .unwrap_or(self.route.direct_distance)
    }
}
