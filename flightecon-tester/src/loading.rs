use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use flightecon_game::{Dataset, GameMode, GameSettings, InMemoryDataset};

pub fn load_dataset(path: &Path) -> Result<InMemoryDataset> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let dataset = InMemoryDataset::from_json(&raw)
        .with_context(|| format!("failed to parse dataset {}", path.display()))?;
    info!(
        "loaded dataset {}: {} airports, {} aircraft, {} demand pairs",
        path.display(),
        dataset.airports().len(),
        dataset.aircraft().len(),
        dataset.demand_len()
    );
    Ok(dataset)
}

/// Settings from `path`, or the game defaults. `realism` overrides the mode.
pub fn load_settings(path: Option<&Path>, realism: bool) -> Result<GameSettings> {
    let mut settings = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read settings {}", path.display()))?;
            GameSettings::from_json(&raw)
                .with_context(|| format!("failed to parse settings {}", path.display()))?
        }
        None if realism => GameSettings::default_realism(),
        None => GameSettings::default(),
    };
    if realism {
        settings.mode = GameMode::Realism;
    }
    settings
        .validate()
        .context("settings are outside the range the game allows")?;
    Ok(settings)
}
