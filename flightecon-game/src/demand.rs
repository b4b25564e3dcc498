//! Daily demand figures and their per-trip normalisation.
use serde::{Deserialize, Serialize};

use crate::constants::{CARGO_H_LBS_PER_J_PAX, CARGO_L_LBS_PER_Y_PAX};
use crate::numbers::trunc_f64_to_u32;

/// Daily passenger demand by class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaxDemand {
    pub y: u32,
    pub j: u32,
    pub f: u32,
}

impl PaxDemand {
    #[must_use]
    pub const fn new(y: u32, j: u32, f: u32) -> Self {
        Self { y, j, f }
    }

    /// Demand a single flight must be sized against: daily demand split over
    /// `trips_per_day`, inflated to what would fill the cabin at `load`.
    #[must_use]
    pub fn per_trip_at_load(self, trips_per_day: u32, load: f64) -> Self {
        let scale = |daily: u32| scale_demand(daily, trips_per_day, load);
        Self {
            y: scale(self.y),
            j: scale(self.j),
            f: scale(self.f),
        }
    }
}

/// Daily cargo demand in lbs, large (L) and heavy (H).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CargoDemand {
    pub l: u32,
    pub h: u32,
}

impl CargoDemand {
    #[must_use]
    pub const fn new(l: u32, h: u32) -> Self {
        Self { l, h }
    }

    /// Cargo demand implied by passenger demand when a route has no explicit figures.
    #[must_use]
    pub fn from_pax(pax: PaxDemand) -> Self {
        let l = (f64::from(pax.y) / 2.0).round() * CARGO_L_LBS_PER_Y_PAX;
        let h = f64::from(pax.j) * CARGO_H_LBS_PER_J_PAX;
        Self {
            l: trunc_f64_to_u32(l),
            h: trunc_f64_to_u32(h),
        }
    }

    #[must_use]
    pub fn per_trip_at_load(self, trips_per_day: u32, load: f64) -> Self {
        Self {
            l: scale_demand(self.l, trips_per_day, load),
            h: scale_demand(self.h, trips_per_day, load),
        }
    }
}

impl From<PaxDemand> for CargoDemand {
    fn from(pax: PaxDemand) -> Self {
        Self::from_pax(pax)
    }
}

/// Demand snapshot for one ordered airport pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RouteDemand {
    pub pax: PaxDemand,
    pub cargo: CargoDemand,
    /// Direct great-circle distance, km.
    pub distance: f64,
}

fn scale_demand(daily: u32, trips_per_day: u32, load: f64) -> u32 {
    let trips = f64::from(trips_per_day.max(1));
    trunc_f64_to_u32(f64::from(daily) / trips / load)
}
