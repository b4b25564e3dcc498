//! Brute-force reference optimizer.
//!
//! Exhaustively searches cabin splits and fleet sizes while simulating how a
//! day's demand drains across consecutive flights. It shares pricing with
//! the closed-form allocator but nothing else, so the two can be checked
//! against each other.
//!
//! The cargo sweep scales large-cargo capacity by the training multiplier
//! before applying the percentage split, which differs slightly from the
//! closed-form cargo allocator. Treat cargo results as an approximation.
use serde::{Deserialize, Serialize};

use crate::allocation::{CargoConfig, PaxConfig};
use crate::constants::{
    CARGO_L_SPACE_FACTOR, CARGO_SWEEP_STEPS, MAX_PLANES_PER_ROUTE, REFERENCE_LOAD_COEFFICIENT,
};
use crate::demand::{CargoDemand, PaxDemand};
use crate::pricing::{CargoTicket, PaxTicket};
use crate::settings::GameMode;

/// Inputs shared by every simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub distance: f64,
    pub reputation: f64,
    pub flights_per_day: u32,
    pub mode: GameMode,
}

/// Seats flown per departure by the whole fleet on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaxSeats {
    pub y: u32,
    pub j: u32,
    pub f: u32,
}

impl From<&PaxConfig> for PaxSeats {
    fn from(cfg: &PaxConfig) -> Self {
        Self {
            y: cfg.y,
            j: cfg.j,
            f: cfg.f,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BrutePaxConfig {
    pub y: u32,
    pub j: u32,
    pub f: u32,
    pub planes: u32,
    /// Best daily income per plane.
    pub max_income: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BruteCargoConfig {
    /// Fraction of capacity given to large cargo, 0..=1.
    pub l_pct: f64,
    pub h_pct: f64,
    pub planes: u32,
    /// Best daily income per plane.
    pub max_income: f64,
}

/// Share of offered seats actually sold at `reputation`.
#[must_use]
pub fn reference_load(offered: f64, reputation: f64) -> f64 {
    offered * REFERENCE_LOAD_COEFFICIENT * reputation
}

/// Daily income of a fleet offering `seats` per departure.
///
/// Each departure sells the reputation-scaled share of whichever is
/// smaller, the seats or the demand still left that day.
#[must_use]
pub fn simulate_pax_income(
    seats: PaxSeats,
    daily: PaxDemand,
    ticket: &PaxTicket,
    reputation: f64,
    flights_per_day: u32,
) -> f64 {
    let offered = [f64::from(seats.y), f64::from(seats.j), f64::from(seats.f)];
    let prices = [f64::from(ticket.y), f64::from(ticket.j), f64::from(ticket.f)];
    let mut remaining = [f64::from(daily.y), f64::from(daily.j), f64::from(daily.f)];
    let mut income = 0.0;
    for _ in 0..flights_per_day {
        for class in 0..3 {
            let sold = reference_load(offered[class].min(remaining[class]), reputation);
            remaining[class] -= sold;
            income += sold * prices[class];
        }
    }
    income
}

/// Daily income of a fleet offering `l` and `h` lbs per departure.
#[must_use]
pub fn simulate_cargo_income(
    l: f64,
    h: f64,
    daily: CargoDemand,
    ticket: &CargoTicket,
    reputation: f64,
    flights_per_day: u32,
) -> f64 {
    let mut l_left = f64::from(daily.l);
    let mut h_left = f64::from(daily.h);
    let mut income = 0.0;
    for _ in 0..flights_per_day {
        let l_sold = reference_load(l.min(l_left), reputation);
        let h_sold = reference_load(h.min(h_left), reputation);
        l_left -= l_sold;
        h_left -= h_sold;
        income += l_sold * ticket.l + h_sold * ticket.h;
    }
    income
}

/// Best (Y, J, F, planes) by daily income per plane.
///
/// F is always the largest count the space left by Y and J allows. Fleet
/// sizes are tried from the largest down, so equal incomes favour more
/// planes. Returns the all-zero config when nothing earns money.
#[must_use]
pub fn brute_pax_conf(
    demand: PaxDemand,
    max_seats: u32,
    params: &SimulationParams,
) -> BrutePaxConfig {
    let ticket = PaxTicket::from_optimal(params.distance, params.mode);
    let mut best = BrutePaxConfig::default();
    for y in (0..=max_seats).rev() {
        for j in (0..=(max_seats - y) / 2).rev() {
            let f = (max_seats - y - 2 * j) / 3;
            for planes in (1..=MAX_PLANES_PER_ROUTE).rev() {
                let seats = PaxSeats {
                    y: y * planes,
                    j: j * planes,
                    f: f * planes,
                };
                let per_plane = simulate_pax_income(
                    seats,
                    demand,
                    &ticket,
                    params.reputation,
                    params.flights_per_day,
                ) / f64::from(planes);
                if per_plane > best.max_income {
                    best = BrutePaxConfig {
                        y,
                        j,
                        f,
                        planes,
                        max_income: per_plane,
                    };
                }
            }
        }
    }
    best
}

/// Best large/heavy split by daily income per plane, sweeping the heavy
/// share in 1% steps.
#[must_use]
pub fn brute_cargo_conf(
    demand: CargoDemand,
    capacity: u32,
    l_training: u8,
    h_training: u8,
    params: &SimulationParams,
) -> BruteCargoConfig {
    let ticket = CargoTicket::from_optimal(params.distance, params.mode);
    let mut best = BruteCargoConfig::default();
    for step in 0..=CARGO_SWEEP_STEPS {
        let h_pct = f64::from(step) / f64::from(CARGO_SWEEP_STEPS);
        let (l_cap, h_cap) = cargo_space(capacity, l_training, h_training, h_pct);
        for planes in (1..=MAX_PLANES_PER_ROUTE).rev() {
            let fleet = f64::from(planes);
            let per_plane = simulate_cargo_income(
                l_cap * fleet,
                h_cap * fleet,
                demand,
                &ticket,
                params.reputation,
                params.flights_per_day,
            ) / fleet;
            if per_plane > best.max_income {
                best = BruteCargoConfig {
                    l_pct: 1.0 - h_pct,
                    h_pct,
                    planes,
                    max_income: per_plane,
                };
            }
        }
    }
    best
}

/// Large and heavy lbs one plane carries when `h_pct` of its space is heavy.
fn cargo_space(capacity: u32, l_training: u8, h_training: u8, h_pct: f64) -> (f64, f64) {
    let capacity = f64::from(capacity);
    let l_multiplier = 1.0 + f64::from(l_training) / 100.0;
    let h_multiplier = 1.0 + f64::from(h_training) / 100.0;
    (
        capacity * CARGO_L_SPACE_FACTOR * l_multiplier * (1.0 - h_pct),
        capacity * h_multiplier * h_pct,
    )
}

/// Daily income of a single plane flying a closed-form pax config through
/// the same simulation the brute-force search uses.
#[must_use]
pub fn simulate_closed_form(
    config: &PaxConfig,
    demand: PaxDemand,
    params: &SimulationParams,
) -> f64 {
    let ticket = PaxTicket::from_optimal(params.distance, params.mode);
    simulate_pax_income(
        PaxSeats::from(config),
        demand,
        &ticket,
        params.reputation,
        params.flights_per_day,
    )
}

/// Daily income of a single plane flying a closed-form cargo split through
/// the reference cargo simulation.
#[must_use]
pub fn simulate_closed_form_cargo(
    config: &CargoConfig,
    capacity: u32,
    (l_training, h_training): (u8, u8),
    demand: CargoDemand,
    params: &SimulationParams,
) -> f64 {
    let ticket = CargoTicket::from_optimal(params.distance, params.mode);
    let h_pct = f64::from(config.h) / 100.0;
    let (l, h) = cargo_space(capacity, l_training, h_training, h_pct);
    simulate_cargo_income(
        l,
        h,
        demand,
        &ticket,
        params.reputation,
        params.flights_per_day,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(flights_per_day: u32) -> SimulationParams {
        SimulationParams {
            distance: 3_000.0,
            reputation: 87.0,
            flights_per_day,
            mode: GameMode::Easy,
        }
    }

    #[test]
    fn simulation_depletes_demand_across_flights() {
        let ticket = PaxTicket { y: 100, j: 0, f: 0 };
        let seats = PaxSeats { y: 50, j: 0, f: 0 };
        let demand = PaxDemand::new(60, 0, 0);
        let one = simulate_pax_income(seats, demand, &ticket, 100.0, 1);
        let two = simulate_pax_income(seats, demand, &ticket, 100.0, 2);
        let load = REFERENCE_LOAD_COEFFICIENT * 100.0;
        assert!((one - 50.0 * load * 100.0).abs() < 1e-9);
        let left = 60.0 - 50.0 * load;
        assert!((two - one - left * load * 100.0).abs() < 1e-9);
    }

    #[test]
    fn no_demand_yields_zero_config() {
        let best = brute_pax_conf(PaxDemand::default(), 30, &params(1));
        assert_eq!(best, BrutePaxConfig::default());
        assert!(best.max_income.abs() < f64::EPSILON);
    }

    #[test]
    fn brute_force_fills_premium_demand_first() {
        let best = brute_pax_conf(PaxDemand::new(10, 4, 2), 30, &params(1));
        assert!(best.max_income > 0.0);
        assert!(best.y + 2 * best.j + 3 * best.f <= 30);
        assert!(best.f >= 2 && best.j >= 4);
    }

    #[test]
    fn cargo_sweep_covers_both_extremes() {
        let heavy_only = brute_cargo_conf(CargoDemand::new(0, 50_000), 10_000, 0, 0, &params(1));
        assert!((heavy_only.h_pct - 1.0).abs() < 1e-9);
        let large_only = brute_cargo_conf(CargoDemand::new(50_000, 0), 10_000, 0, 0, &params(1));
        assert!(large_only.h_pct.abs() < 1e-9);
        assert!(large_only.max_income > 0.0);
    }

    #[test]
    fn closed_form_cargo_split_is_one_of_the_swept_splits() {
        let demand = CargoDemand::new(40_000, 30_000);
        let config = CargoConfig::calc_cargo_conf(demand, 60_000, 0, 0);
        let closed = simulate_closed_form_cargo(&config, 60_000, (0, 0), demand, &params(1));
        let best = brute_cargo_conf(demand, 60_000, 0, 0, &params(1));
        assert!(closed > 0.0);
        assert!(closed <= best.max_income + 1e-6);
    }
}
