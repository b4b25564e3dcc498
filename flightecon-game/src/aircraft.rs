//! Aircraft specifications as loaded from the dataset.
use serde::{Deserialize, Serialize};

use crate::economics::AircraftEconomics;

pub type AircraftId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AircraftType {
    Pax,
    Cargo,
    Vip,
}

impl AircraftType {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pax => "PAX",
            Self::Cargo => "CARGO",
            Self::Vip => "VIP",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: AircraftId,
    pub shortname: String,
    #[serde(default)]
    pub manufacturer: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AircraftType,
    /// Cruise speed, km/h.
    pub speed: f64,
    /// Fuel burn, lbs per km.
    pub fuel: f64,
    /// CO2 emitted, quotas per km per space unit.
    pub co2: f64,
    pub cost: u32,
    /// Seats for pax/VIP aircraft, lbs for cargo aircraft.
    pub capacity: u32,
    /// Runway requirement, feet.
    pub rwy: u16,
    /// Cost of one periodic check.
    pub check_cost: u32,
    /// Range, km.
    pub range: u32,
    /// Hours between periodic checks.
    pub maint: u16,
    #[serde(default)]
    pub fuel_mod: bool,
    #[serde(default)]
    pub co2_mod: bool,
}

impl Aircraft {
    /// Capability object the route assembler dispatches through.
    #[must_use]
    pub const fn economics(&self) -> AircraftEconomics {
        AircraftEconomics::for_kind(self.kind)
    }

    #[must_use]
    pub fn range_km(&self) -> f64 {
        f64::from(self.range)
    }
}

impl std::fmt::Display for Aircraft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{} {}' {} R{}",
            self.shortname,
            self.manufacturer,
            self.name,
            self.kind.label(),
            self.range
        )
    }
}
