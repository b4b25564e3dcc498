//! Per-flight operating costs and load estimation.
use serde::{Deserialize, Serialize};

use crate::aircraft::Aircraft;
use crate::allocation::Config;
use crate::constants::{
    CARGO_CO2_H_DIVISOR, CARGO_CO2_L_DIVISOR, CARGO_L_SPACE_FACTOR, CO2_CI_BASE, CO2_CI_DIVISOR,
    FUEL_CI_BASE, FUEL_CI_DIVISOR, LOAD_AUTOPRICE_DIRECT, LOAD_AUTOPRICE_STOPOVER,
    LOAD_MANUAL_DIRECT, LOAD_MANUAL_STOPOVER, MODIFICATION_FACTOR, REPAIR_COST_FRACTION,
    UNIT_PRICE_DIVISOR,
};
use crate::numbers::ceil_to_hundredth;
use crate::settings::GameSettings;

/// Expected load factor for a route.
///
/// Above an autoprice ratio of 1 the load only depends on reputation. At or
/// below it the load interpolates linearly between the reputation-based base
/// load (ratio 0 gives a full aircraft) and that base (ratio 1).
#[must_use]
pub fn estimate_load(reputation: f64, autoprice_ratio: f64, has_stopover: bool) -> f64 {
    if autoprice_ratio > 1.0 {
        let coefficient = if has_stopover {
            LOAD_AUTOPRICE_STOPOVER
        } else {
            LOAD_AUTOPRICE_DIRECT
        };
        return coefficient * reputation;
    }
    let coefficient = if has_stopover {
        LOAD_MANUAL_STOPOVER
    } else {
        LOAD_MANUAL_DIRECT
    };
    let base_load = coefficient * reputation;
    (base_load - 1.0) * autoprice_ratio + 1.0
}

/// Fuel burned over `distance` km, in lbs.
#[must_use]
pub fn calc_fuel(aircraft: &Aircraft, distance: f64, fuel_training: u8, cost_index: u8) -> f64 {
    let modification = if aircraft.fuel_mod {
        MODIFICATION_FACTOR
    } else {
        1.0
    };
    training_reduction(fuel_training)
        * ceil_to_hundredth(distance)
        * modification
        * aircraft.fuel
        * (f64::from(cost_index) / FUEL_CI_DIVISOR + FUEL_CI_BASE)
}

/// CO2 emitted over `distance` km, in quotas.
///
/// Emissions grow with the occupied payload at `load` plus a fixed share per
/// seat (or per lb of capacity for cargo aircraft).
#[must_use]
pub fn calc_co2(
    aircraft: &Aircraft,
    config: &Config,
    distance: f64,
    load: f64,
    co2_training: u8,
    cost_index: u8,
) -> f64 {
    let modification = if aircraft.co2_mod {
        MODIFICATION_FACTOR
    } else {
        1.0
    };
    let (units, fixed) = emission_payload(config, aircraft.capacity);
    training_reduction(co2_training)
        * (ceil_to_hundredth(distance) * modification * aircraft.co2 * units * load + fixed)
        * (f64::from(cost_index) / CO2_CI_DIVISOR + CO2_CI_BASE)
}

/// Share of the periodic check attributed to one flight.
#[must_use]
pub fn acheck_cost(aircraft: &Aircraft, flight_time: f64) -> f64 {
    f64::from(aircraft.check_cost) * flight_time / f64::from(aircraft.maint.max(1))
}

/// Wear repair attributed to one flight.
#[must_use]
pub fn repair_cost(aircraft: &Aircraft) -> f64 {
    f64::from(aircraft.cost) / UNIT_PRICE_DIVISOR * REPAIR_COST_FRACTION
}

/// Operating costs of one flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FlightCosts {
    pub fuel: f64,
    pub co2: f64,
    pub acheck_cost: f64,
    pub repair_cost: f64,
}

impl FlightCosts {
    #[must_use]
    pub fn compute(
        aircraft: &Aircraft,
        config: &Config,
        distance: f64,
        flight_time: f64,
        settings: &GameSettings,
    ) -> Self {
        Self {
            fuel: calc_fuel(
                aircraft,
                distance,
                settings.fuel_training,
                settings.cost_index,
            ),
            co2: calc_co2(
                aircraft,
                config,
                distance,
                settings.load,
                settings.co2_training,
                settings.cost_index,
            ),
            acheck_cost: acheck_cost(aircraft, flight_time),
            repair_cost: repair_cost(aircraft),
        }
    }

    /// Everything deducted from income, with fuel and CO2 at the settings' unit prices.
    #[must_use]
    pub fn total(&self, settings: &GameSettings) -> f64 {
        self.fuel * settings.fuel_price / UNIT_PRICE_DIVISOR
            + self.co2 * settings.co2_price / UNIT_PRICE_DIVISOR
            + self.acheck_cost
            + self.repair_cost
    }
}

fn training_reduction(training: u8) -> f64 {
    1.0 - f64::from(training) / 100.0
}

fn emission_payload(config: &Config, capacity: u32) -> (f64, f64) {
    match config {
        Config::Pax(cfg) => (f64::from(cfg.space_units()), f64::from(cfg.seats())),
        Config::Cargo(cfg) => {
            let per_lb = f64::from(cfg.l) / 100.0 * CARGO_L_SPACE_FACTOR / CARGO_CO2_L_DIVISOR
                + f64::from(cfg.h) / 100.0 / CARGO_CO2_H_DIVISOR;
            let capacity = f64::from(capacity);
            (per_lb * capacity, capacity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::AircraftType;
    use crate::allocation::{PaxAlgorithm, PaxConfig};

    fn jet() -> Aircraft {
        Aircraft {
            id: 1,
            shortname: "jet".into(),
            manufacturer: "Test".into(),
            name: "Jet".into(),
            kind: AircraftType::Pax,
            speed: 900.0,
            fuel: 20.0,
            co2: 0.18,
            cost: 100_000_000,
            capacity: 200,
            rwy: 8_000,
            check_cost: 500_000,
            range: 5_000,
            maint: 450,
            fuel_mod: false,
            co2_mod: false,
        }
    }

    #[test]
    fn load_estimate_is_piecewise_in_autoprice_ratio() {
        assert!((estimate_load(100.0, 1.06, false) - 0.904_35).abs() < 1e-12);
        assert!((estimate_load(100.0, 1.06, true) - 0.858_55).abs() < 1e-12);
        assert!((estimate_load(87.0, 0.0, false) - 1.0).abs() < 1e-12);
        let manual = estimate_load(100.0, 1.0, false);
        assert!((manual - 0.952_65).abs() < 1e-12);
    }

    #[test]
    fn fuel_scales_with_cost_index_training_and_mods() {
        let mut ac = jet();
        let base = calc_fuel(&ac, 1_000.0, 0, 200);
        assert!((base - 1_000.0 * 20.0 * 1.0).abs() < 1e-9);
        let trained = calc_fuel(&ac, 1_000.0, 3, 200);
        assert!((trained - base * 0.97).abs() < 1e-9);
        ac.fuel_mod = true;
        assert!((calc_fuel(&ac, 1_000.0, 0, 200) - base * 0.9).abs() < 1e-9);
        assert!((calc_fuel(&jet(), 1_000.0, 0, 0) - base * 0.6).abs() < 1e-9);
    }

    #[test]
    fn pax_co2_counts_space_units_and_seats() {
        let config = Config::Pax(PaxConfig {
            y: 77,
            j: 45,
            f: 11,
            valid: true,
            algorithm: PaxAlgorithm::Fjy,
        });
        let co2 = calc_co2(&jet(), &config, 1_000.0, 1.0, 0, 200);
        let expected = (1_000.0 * 0.18 * 200.0 + 133.0) * 1.0;
        assert!((co2 - expected).abs() < 1e-6, "co2 = {co2}");
    }

    #[test]
    fn maintenance_and_repair() {
        let ac = jet();
        assert!((acheck_cost(&ac, 4.5) - 5_000.0).abs() < 1e-9);
        assert!((repair_cost(&ac) - 750.0).abs() < 1e-9);
    }

    #[test]
    fn total_prices_fuel_and_co2_per_thousand() {
        let costs = FlightCosts {
            fuel: 10_000.0,
            co2: 2_000.0,
            acheck_cost: 100.0,
            repair_cost: 50.0,
        };
        let settings = GameSettings::default();
        assert!((costs.total(&settings) - (7_000.0 + 240.0 + 150.0)).abs() < 1e-9);
    }
}
