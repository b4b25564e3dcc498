//! Player-side game settings consumed by every route computation.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    EASY_SPEED_MULTIPLIER, MAX_CARGO_TRAINING_PCT, MAX_CO2_PRICE, MAX_CO2_TRAINING,
    MAX_COST_INDEX, MAX_FUEL_PRICE, MAX_FUEL_TRAINING, MAX_WEAR_TRAINING,
    REALISM_SPEED_MULTIPLIER,
};

/// Game difficulty. Selects pricing formulas, speed and allocation thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    #[default]
    Easy,
    Realism,
}

impl GameMode {
    #[must_use]
    pub const fn is_realism(self) -> bool {
        matches!(self, Self::Realism)
    }

    /// Cruise speed multiplier applied to every aircraft.
    #[must_use]
    pub const fn speed_multiplier(self) -> f64 {
        match self {
            Self::Easy => EASY_SPEED_MULTIPLIER,
            Self::Realism => REALISM_SPEED_MULTIPLIER,
        }
    }

    /// Runway length an airport needs to serve `aircraft_rwy`; easy mode ignores runways.
    #[must_use]
    pub const fn runway_requirement(self, aircraft_rwy: u16) -> u16 {
        match self {
            Self::Easy => 0,
            Self::Realism => aircraft_rwy,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Realism => "REALISM",
        }
    }
}

/// Errors raised when settings fall outside the ranges the game allows.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("{field} must be in (0, 1] (got {value:.3})")]
    LoadOutOfRange { field: &'static str, value: f64 },
    #[error("{field} must be at most {max} (got {value})")]
    TrainingAboveCap {
        field: &'static str,
        max: u8,
        value: u8,
    },
    #[error("{field} must be between 0 and {max:.0} (got {value:.2})")]
    PriceOutOfRange {
        field: &'static str,
        max: f64,
        value: f64,
    },
    #[error("cost index must be at most {max} (got {value})")]
    CostIndexAboveCap { max: u8, value: u8 },
    #[error("reputation must be in (0, 100] (got {value:.2})")]
    ReputationOutOfRange { value: f64 },
}

/// Player settings read by the route engine; never mutated by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    #[serde(default)]
    pub mode: GameMode,
    /// Fuel training, percent reduction of fuel burn.
    #[serde(default)]
    pub fuel_training: u8,
    /// CO2 training, percent reduction of emissions.
    #[serde(default)]
    pub co2_training: u8,
    #[serde(default)]
    pub wear_training: u8,
    #[serde(default)]
    pub repair_training: u8,
    /// Large-cargo capacity training, percent.
    #[serde(default)]
    pub l_training: u8,
    /// Heavy-cargo capacity training, percent.
    #[serde(default)]
    pub h_training: u8,
    /// Price per 1000 lbs of fuel.
    #[serde(default = "GameSettings::default_fuel_price")]
    pub fuel_price: f64,
    /// Price per 1000 quotas of CO2.
    #[serde(default = "GameSettings::default_co2_price")]
    pub co2_price: f64,
    /// Assumed load factor as a fraction in (0, 1].
    #[serde(default = "GameSettings::default_load")]
    pub load: f64,
    #[serde(default = "GameSettings::default_cost_index")]
    pub cost_index: u8,
    /// Airline reputation, used by load estimation and the reference optimizer.
    #[serde(default = "GameSettings::default_reputation")]
    pub reputation: f64,
}

impl GameSettings {
    const fn default_fuel_price() -> f64 {
        700.0
    }

    const fn default_co2_price() -> f64 {
        120.0
    }

    const fn default_load() -> f64 {
        0.87
    }

    const fn default_cost_index() -> u8 {
        200
    }

    const fn default_reputation() -> f64 {
        87.0
    }

    /// Default settings for a realism-mode player.
    #[must_use]
    pub fn default_realism() -> Self {
        Self {
            mode: GameMode::Realism,
            ..Self::default()
        }
    }

    /// Parse settings from JSON, filling unspecified fields with game defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into settings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check every field against the range the game accepts.
    ///
    /// # Errors
    ///
    /// Returns the first violated range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.load > 0.0 && self.load <= 1.0) {
            return Err(SettingsError::LoadOutOfRange {
                field: "load",
                value: self.load,
            });
        }
        let trainings = [
            ("fuel_training", self.fuel_training, MAX_FUEL_TRAINING),
            ("co2_training", self.co2_training, MAX_CO2_TRAINING),
            ("wear_training", self.wear_training, MAX_WEAR_TRAINING),
            ("repair_training", self.repair_training, MAX_WEAR_TRAINING),
            ("l_training", self.l_training, MAX_CARGO_TRAINING_PCT),
            ("h_training", self.h_training, MAX_CARGO_TRAINING_PCT),
        ];
        for (field, value, max) in trainings {
            if value > max {
                return Err(SettingsError::TrainingAboveCap { field, max, value });
            }
        }
        let prices = [
            ("fuel_price", self.fuel_price, MAX_FUEL_PRICE),
            ("co2_price", self.co2_price, MAX_CO2_PRICE),
        ];
        for (field, value, max) in prices {
            if !(0.0..=max).contains(&value) {
                return Err(SettingsError::PriceOutOfRange { field, max, value });
            }
        }
        if self.cost_index > MAX_COST_INDEX {
            return Err(SettingsError::CostIndexAboveCap {
                max: MAX_COST_INDEX,
                value: self.cost_index,
            });
        }
        if !(self.reputation > 0.0 && self.reputation <= 100.0) {
            return Err(SettingsError::ReputationOutOfRange {
                value: self.reputation,
            });
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::Easy,
            fuel_training: 0,
            co2_training: 0,
            wear_training: 0,
            repair_training: 0,
            l_training: 0,
            h_training: 0,
            fuel_price: Self::default_fuel_price(),
            co2_price: Self::default_co2_price(),
            load: Self::default_load(),
            cost_index: Self::default_cost_index(),
            reputation: Self::default_reputation(),
        }
    }
}
