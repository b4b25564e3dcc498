//! Priority orderings and the distance tables that pick between them.
use serde::{Deserialize, Serialize};

use crate::constants::{
    EASY_FJY_BELOW, EASY_FYJ_BELOW, EASY_YFJ_BELOW, REALISM_FJY_BELOW, REALISM_JFY_BELOW,
    REALISM_JYF_BELOW,
};
use crate::settings::GameMode;

/// Passenger cabin class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaxClass {
    Y,
    J,
    F,
}

impl PaxClass {
    /// Floor space one seat of this class takes, in economy-seat units.
    #[must_use]
    pub const fn space(self) -> u32 {
        match self {
            Self::Y => 1,
            Self::J => 2,
            Self::F => 3,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Y => 0,
            Self::J => 1,
            Self::F => 2,
        }
    }
}

/// Order in which the greedy pax allocator fills classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaxAlgorithm {
    Fjy,
    Fyj,
    Jfy,
    Jyf,
    Yfj,
    Yjf,
}

impl PaxAlgorithm {
    pub const ALL: [Self; 6] = [
        Self::Fjy,
        Self::Fyj,
        Self::Jfy,
        Self::Jyf,
        Self::Yfj,
        Self::Yjf,
    ];

    /// Classes in fill order; the last one absorbs the remaining capacity.
    #[must_use]
    pub const fn priority(self) -> [PaxClass; 3] {
        use PaxClass::{F, J, Y};
        match self {
            Self::Fjy => [F, J, Y],
            Self::Fyj => [F, Y, J],
            Self::Jfy => [J, F, Y],
            Self::Jyf => [J, Y, F],
            Self::Yfj => [Y, F, J],
            Self::Yjf => [Y, J, F],
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fjy => "FJY",
            Self::Fyj => "FYJ",
            Self::Jfy => "JFY",
            Self::Jyf => "JYF",
            Self::Yfj => "YFJ",
            Self::Yjf => "YJF",
        }
    }
}

/// Cargo allocation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CargoAlgorithm {
    /// Large cargo first. Nearly always the more profitable split.
    L,
    /// Heavy cargo first. Only pays off on extreme distances.
    H,
}

/// One row of a strategy table: distances strictly below `below` use `algorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdStep {
    pub below: f64,
    pub algorithm: PaxAlgorithm,
}

const fn step(below: f64, algorithm: PaxAlgorithm) -> ThresholdStep {
    ThresholdStep { below, algorithm }
}

const EASY_STEPS: &[ThresholdStep] = &[
    step(EASY_FJY_BELOW, PaxAlgorithm::Fjy),
    step(EASY_FYJ_BELOW, PaxAlgorithm::Fyj),
    step(EASY_YFJ_BELOW, PaxAlgorithm::Yfj),
];

const REALISM_STEPS: &[ThresholdStep] = &[
    step(REALISM_FJY_BELOW, PaxAlgorithm::Fjy),
    step(REALISM_JFY_BELOW, PaxAlgorithm::Jfy),
    step(REALISM_JYF_BELOW, PaxAlgorithm::Jyf),
];

/// Ascending distance thresholds mapped to pax orderings for one game mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaxStrategyTable {
    pub steps: &'static [ThresholdStep],
    /// Ordering used at or beyond the last threshold.
    pub beyond: PaxAlgorithm,
}

impl PaxStrategyTable {
    #[must_use]
    pub const fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Easy => Self {
                steps: EASY_STEPS,
                beyond: PaxAlgorithm::Yjf,
            },
            GameMode::Realism => Self {
                steps: REALISM_STEPS,
                beyond: PaxAlgorithm::Yjf,
            },
        }
    }

    /// First ordering whose threshold the distance falls under.
    #[must_use]
    pub fn select(&self, distance: f64) -> PaxAlgorithm {
        self.steps
            .iter()
            .find(|step| distance < step.below)
            .map_or(self.beyond, |step| step.algorithm)
    }
}
