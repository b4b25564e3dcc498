//! Closed-form seat and cargo allocation.
//!
//! Every pax ordering runs through the same greedy routine: fill classes in
//! priority order up to their per-trip demand, then hand the remaining space
//! to the last class. An ordering is only a good fit when that last class
//! can actually sell what it is given.
use serde::{Deserialize, Serialize};

use crate::constants::CARGO_L_SPACE_FACTOR;
use crate::demand::{CargoDemand, PaxDemand};
use crate::numbers::trunc_f64_to_u32;
use crate::settings::GameMode;

mod strategy;

pub use strategy::{CargoAlgorithm, PaxAlgorithm, PaxClass, PaxStrategyTable, ThresholdStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaxConfig {
    pub y: u32,
    pub j: u32,
    pub f: u32,
    pub valid: bool,
    pub algorithm: PaxAlgorithm,
}

impl PaxConfig {
    /// Pick the ordering for this distance and mode, then allocate with it.
    #[must_use]
    pub fn calc_pax_conf(
        demand: PaxDemand,
        capacity: u32,
        distance: f64,
        mode: GameMode,
    ) -> Self {
        let algorithm = PaxStrategyTable::for_mode(mode).select(distance);
        Self::allocate(demand, capacity, algorithm)
    }

    /// Greedy allocation of `capacity` space units following `algorithm`.
    ///
    /// The first two classes take their demand while the cumulative demand
    /// still fits; otherwise they take whatever space is left. The last class
    /// takes the remainder. Space that the last class cannot use because of
    /// its seat size goes to economy so the layout fills the cabin exactly.
    #[must_use]
    pub fn allocate(demand: PaxDemand, capacity: u32, algorithm: PaxAlgorithm) -> Self {
        let wanted = [demand.y, demand.j, demand.f];
        let mut seats = [0_u32; 3];
        let mut used = 0_u32;
        let mut demand_space = 0_u64;
        let [first, second, last] = algorithm.priority();

        for class in [first, second] {
            let space = class.space();
            let want = wanted[class.index()];
            demand_space += u64::from(want) * u64::from(space);
            let granted = if demand_space > u64::from(capacity) {
                (capacity - used) / space
            } else {
                want
            };
            seats[class.index()] = granted;
            used += granted * space;
        }

        let remainder = (capacity - used) / last.space();
        seats[last.index()] = remainder;
        used += remainder * last.space();
        seats[PaxClass::Y.index()] += capacity - used;

        Self {
            y: seats[0],
            j: seats[1],
            f: seats[2],
            valid: remainder <= wanted[last.index()],
            algorithm,
        }
    }

    /// Cabin space used, in economy-seat units.
    #[must_use]
    pub const fn space_units(&self) -> u32 {
        self.y + self.j * 2 + self.f * 3
    }

    #[must_use]
    pub const fn seats(&self) -> u32 {
        self.y + self.j + self.f
    }
}

/// Cargo split as integer percentages of usable capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CargoConfig {
    pub l: u8,
    pub h: u8,
    pub valid: bool,
    pub algorithm: CargoAlgorithm,
}

impl CargoConfig {
    /// Large-first split, falling back to heavy-first when large-first cannot be filled.
    #[must_use]
    pub fn calc_cargo_conf(
        demand: CargoDemand,
        capacity: u32,
        l_training: u8,
        h_training: u8,
    ) -> Self {
        let large_first = Self::calc_l_conf(demand, capacity, l_training);
        if large_first.valid {
            return large_first;
        }
        let heavy_first = Self::calc_h_conf(demand, capacity, h_training);
        if heavy_first.valid {
            heavy_first
        } else {
            large_first
        }
    }

    /// Large cargo is the limiting resource.
    #[must_use]
    pub fn calc_l_conf(demand: CargoDemand, capacity: u32, l_training: u8) -> Self {
        let l_capacity = f64::from(capacity) * CARGO_L_SPACE_FACTOR * training_factor(l_training);
        let l_demand = f64::from(demand.l);
        if l_demand >= l_capacity {
            return Self::split(100, true, CargoAlgorithm::L);
        }
        let l = percent_of(l_demand, l_capacity);
        let valid = f64::from(demand.h) >= (l_capacity - l_demand) / CARGO_L_SPACE_FACTOR;
        Self::split(l, valid, CargoAlgorithm::L)
    }

    /// Heavy cargo is the limiting resource.
    #[must_use]
    pub fn calc_h_conf(demand: CargoDemand, capacity: u32, h_training: u8) -> Self {
        let h_capacity = f64::from(capacity) * training_factor(h_training);
        let h_demand = f64::from(demand.h);
        if h_demand >= h_capacity {
            return Self::split(0, true, CargoAlgorithm::H);
        }
        let h = percent_of(h_demand, h_capacity);
        let valid = f64::from(demand.l) >= h_capacity - h_demand;
        Self::split(100 - h, valid, CargoAlgorithm::H)
    }

    const fn split(l: u8, valid: bool, algorithm: CargoAlgorithm) -> Self {
        Self {
            l,
            h: 100 - l,
            valid,
            algorithm,
        }
    }
}

/// Layout chosen for an aircraft, matching its type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Config {
    Pax(PaxConfig),
    Cargo(CargoConfig),
}

impl Config {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        match self {
            Self::Pax(cfg) => cfg.valid,
            Self::Cargo(cfg) => cfg.valid,
        }
    }
}

fn training_factor(training: u8) -> f64 {
    1.0 + f64::from(training) / 100.0
}

fn percent_of(part: f64, whole: f64) -> u8 {
    let pct = trunc_f64_to_u32(part / whole * 100.0).min(100);
    u8::try_from(pct).unwrap_or(100)
}
