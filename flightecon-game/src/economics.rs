//! Per-aircraft-type economics.
//!
//! Passenger, cargo and VIP aircraft share one capability: size a cabin
//! against per-trip demand, price tickets for a distance, and turn both into
//! a full-load income. The route assembler only talks to [`AircraftEconomics`].
use crate::aircraft::AircraftType;
use crate::allocation::{CargoConfig, Config, PaxConfig};
use crate::constants::CARGO_L_SPACE_FACTOR;
use crate::demand::{CargoDemand, PaxDemand};
use crate::pricing::{CargoTicket, PaxTicket, Ticket};
use crate::settings::GameSettings;

/// Per-trip demand the allocator sizes a cabin against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TripDemand {
    pub pax: PaxDemand,
    pub cargo: CargoDemand,
}

/// Capability shared by every aircraft type.
pub trait CabinEconomics {
    /// Split `capacity` across classes for a route of `distance` km.
    fn allocate(
        &self,
        demand: &TripDemand,
        capacity: u32,
        distance: f64,
        settings: &GameSettings,
    ) -> Config;

    /// Optimal ticket prices for a route of `distance` km.
    fn price(&self, distance: f64, settings: &GameSettings) -> Ticket;

    /// Income of one flight at 100% load. Mismatched config and ticket kinds earn nothing.
    fn max_income(&self, config: &Config, ticket: &Ticket, capacity: u32) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaxEconomics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CargoEconomics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VipEconomics;

impl CabinEconomics for PaxEconomics {
    fn allocate(
        &self,
        demand: &TripDemand,
        capacity: u32,
        distance: f64,
        settings: &GameSettings,
    ) -> Config {
        Config::Pax(PaxConfig::calc_pax_conf(
            demand.pax,
            capacity,
            distance,
            settings.mode,
        ))
    }

    fn price(&self, distance: f64, settings: &GameSettings) -> Ticket {
        Ticket::Pax(PaxTicket::from_optimal(distance, settings.mode))
    }

    fn max_income(&self, config: &Config, ticket: &Ticket, _capacity: u32) -> f64 {
        match (config, ticket) {
            (Config::Pax(cfg), Ticket::Pax(t)) => seat_income(cfg, t),
            _ => 0.0,
        }
    }
}

impl CabinEconomics for VipEconomics {
    fn allocate(
        &self,
        demand: &TripDemand,
        capacity: u32,
        distance: f64,
        settings: &GameSettings,
    ) -> Config {
        PaxEconomics.allocate(demand, capacity, distance, settings)
    }

    fn price(&self, distance: f64, _settings: &GameSettings) -> Ticket {
        Ticket::Vip(PaxTicket::vip_from_optimal(distance))
    }

    fn max_income(&self, config: &Config, ticket: &Ticket, _capacity: u32) -> f64 {
        match (config, ticket) {
            (Config::Pax(cfg), Ticket::Vip(t)) => seat_income(cfg, t),
            _ => 0.0,
        }
    }
}

impl CabinEconomics for CargoEconomics {
    fn allocate(
        &self,
        demand: &TripDemand,
        capacity: u32,
        _distance: f64,
        settings: &GameSettings,
    ) -> Config {
        Config::Cargo(CargoConfig::calc_cargo_conf(
            demand.cargo,
            capacity,
            settings.l_training,
            settings.h_training,
        ))
    }

    fn price(&self, distance: f64, settings: &GameSettings) -> Ticket {
        Ticket::Cargo(CargoTicket::from_optimal(distance, settings.mode))
    }

    fn max_income(&self, config: &Config, ticket: &Ticket, capacity: u32) -> f64 {
        match (config, ticket) {
            (Config::Cargo(cfg), Ticket::Cargo(t)) => {
                let l = f64::from(cfg.l) * CARGO_L_SPACE_FACTOR * t.l;
                let h = f64::from(cfg.h) * t.h;
                (l + h) * f64::from(capacity) / 100.0
            }
            _ => 0.0,
        }
    }
}

/// Tagged union over the per-type economics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftEconomics {
    Pax,
    Cargo,
    Vip,
}

impl AircraftEconomics {
    #[must_use]
    pub const fn for_kind(kind: AircraftType) -> Self {
        match kind {
            AircraftType::Pax => Self::Pax,
            AircraftType::Cargo => Self::Cargo,
            AircraftType::Vip => Self::Vip,
        }
    }

    fn inner(self) -> &'static dyn CabinEconomics {
        match self {
            Self::Pax => &PaxEconomics,
            Self::Cargo => &CargoEconomics,
            Self::Vip => &VipEconomics,
        }
    }
}

impl CabinEconomics for AircraftEconomics {
    fn allocate(
        &self,
        demand: &TripDemand,
        capacity: u32,
        distance: f64,
        settings: &GameSettings,
    ) -> Config {
        self.inner().allocate(demand, capacity, distance, settings)
    }

    fn price(&self, distance: f64, settings: &GameSettings) -> Ticket {
        self.inner().price(distance, settings)
    }

    fn max_income(&self, config: &Config, ticket: &Ticket, capacity: u32) -> f64 {
        self.inner().max_income(config, ticket, capacity)
    }
}

fn seat_income(cfg: &PaxConfig, ticket: &PaxTicket) -> f64 {
    f64::from(cfg.y) * f64::from(ticket.y)
        + f64::from(cfg.j) * f64::from(ticket.j)
        + f64::from(cfg.f) * f64::from(ticket.f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::{CargoAlgorithm, PaxAlgorithm};

    #[test]
    fn dispatch_follows_aircraft_type() {
        let settings = GameSettings::default();
        let pax = AircraftEconomics::for_kind(AircraftType::Pax).price(1_000.0, &settings);
        let vip = AircraftEconomics::for_kind(AircraftType::Vip).price(1_000.0, &settings);
        let cargo = AircraftEconomics::for_kind(AircraftType::Cargo).price(1_000.0, &settings);
        assert!(matches!(pax, Ticket::Pax(_)));
        assert!(matches!(vip, Ticket::Vip(_)));
        assert!(matches!(cargo, Ticket::Cargo(_)));
    }

    #[test]
    fn pax_income_sums_seats_times_prices() {
        let config = Config::Pax(PaxConfig {
            y: 77,
            j: 45,
            f: 11,
            valid: true,
            algorithm: PaxAlgorithm::Fjy,
        });
        let ticket = Ticket::Pax(PaxTicket { y: 674, j: 1563, f: 2684 });
        let income = AircraftEconomics::Pax.max_income(&config, &ticket, 200);
        assert!((income - 151_757.0).abs() < 1e-9);
        assert!(AircraftEconomics::Vip.max_income(&config, &ticket, 200).abs() < f64::EPSILON);
    }

    #[test]
    fn cargo_income_scales_with_capacity() {
        let config = Config::Cargo(CargoConfig {
            l: 50,
            h: 50,
            valid: true,
            algorithm: CargoAlgorithm::L,
        });
        let ticket = Ticket::Cargo(CargoTicket { l: 2.0, h: 1.0 });
        let income = AircraftEconomics::Cargo.max_income(&config, &ticket, 1_000);
        assert!((income - (50.0 * 0.7 * 2.0 + 50.0) * 10.0).abs() < 1e-9);
    }

    #[test]
    fn cargo_allocation_uses_cargo_demand_and_training() {
        let demand = TripDemand {
            pax: PaxDemand::default(),
            cargo: CargoDemand::new(90_000, 0),
        };
        let settings = GameSettings::default();
        let config = AircraftEconomics::Cargo.allocate(&demand, 100_000, 5_000.0, &settings);
        assert!(matches!(config, Config::Cargo(cfg) if cfg.l == 100 && cfg.valid));
    }
}
