//! Randomized checks of the closed-form pax and cargo allocators against the
//! brute-force reference optimizer.
//!
//! The closed-form allocators size one flight from per-trip demand, exactly
//! as route assembly does. The reference simulation then flies that layout
//! against the full day's demand so both sides are scored the same way.
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use thiserror::Error;

use flightecon_game::{
    BruteCargoConfig, BrutePaxConfig, CargoConfig, CargoDemand, GameMode, GameSettings,
    PaxAlgorithm, PaxClass, PaxConfig, PaxDemand, SimulationParams, brute_cargo_conf,
    brute_pax_conf, simulate_closed_form, simulate_closed_form_cargo,
};

/// Incomes within this many currency units count as equal.
const INCOME_TOLERANCE: f64 = 1e-6;

const MIN_CARGO_CAPACITY: u32 = 10_000;
const MAX_CARGO_CAPACITY: u32 = 300_000;

#[derive(Debug, Clone)]
pub struct VerifyConfig {
    pub cases: usize,
    pub seed: u64,
    /// Largest pax cabin sampled, in economy-seat units.
    pub max_capacity: u32,
    /// Closed-form income over reference income below this is a violation.
    pub min_ratio: f64,
    pub settings: GameSettings,
}

#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerificationError {
    #[error("case {case}: {algorithm:?} layout fills {used} of {capacity} space units")]
    LayoutNotFilled {
        case: usize,
        algorithm: PaxAlgorithm,
        used: u32,
        capacity: u32,
    },
    #[error(
        "case {case}: layout marked valid={reported} with {seats} {class:?} seats for a demand of {demand}"
    )]
    ValidityMismatch {
        case: usize,
        reported: bool,
        class: PaxClass,
        seats: u32,
        demand: u32,
    },
    #[error("case {case}: {cabin} income ratio {ratio:.4} is below the floor {floor:.4}")]
    IncomeBelowFloor {
        case: usize,
        cabin: &'static str,
        ratio: f64,
        floor: f64,
    },
    #[error("case {case}: cargo split L {l}% / H {h}% does not add up to 100")]
    CargoSplitNotWhole { case: usize, l: u8, h: u8 },
    #[error("case {case}: reference layout needs {used} space units in a {capacity}-unit cabin")]
    ReferenceOverCapacity { case: usize, used: u32, capacity: u32 },
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub case: usize,
    pub demand: PaxDemand,
    /// Demand the closed-form allocator sized the cabin against.
    pub per_trip: PaxDemand,
    pub capacity: u32,
    pub params: SimulationParams,
    pub closed_form: PaxConfig,
    pub closed_form_income: f64,
    pub reference: BrutePaxConfig,
    /// Closed-form income over reference income; 1.0 when neither earns.
    pub ratio: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CargoCaseOutcome {
    pub case: usize,
    pub demand: CargoDemand,
    pub per_trip: CargoDemand,
    /// Usable capacity in lbs.
    pub capacity: u32,
    pub params: SimulationParams,
    pub closed_form: CargoConfig,
    pub closed_form_income: f64,
    pub reference: BruteCargoConfig,
    pub ratio: f64,
}

/// Spread of closed-form over reference income ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct RatioStats {
    pub min: f64,
    pub mean: f64,
}

impl RatioStats {
    fn collect(ratios: impl Iterator<Item = f64>) -> Self {
        let (count, sum, min) = ratios.fold((0_u32, 0.0, f64::INFINITY), |(n, sum, min), r| {
            (n + 1, sum + r, f64::min(min, r))
        });
        if count == 0 {
            return Self::default();
        }
        Self {
            min,
            mean: sum / f64::from(count),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationSummary {
    pub seed: u64,
    pub mode: GameMode,
    pub min_ratio_floor: f64,
    pub cases: Vec<CaseOutcome>,
    pub cargo_cases: Vec<CargoCaseOutcome>,
    pub violations: Vec<VerificationError>,
    pub pax: RatioStats,
    pub cargo: RatioStats,
}

impl VerificationSummary {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct PaxSample {
    demand: PaxDemand,
    capacity: u32,
    params: SimulationParams,
}

#[derive(Debug, Clone, Copy)]
struct CargoSample {
    demand: CargoDemand,
    capacity: u32,
    params: SimulationParams,
}

fn sample_params(rng: &mut ChaCha20Rng, settings: &GameSettings) -> SimulationParams {
    SimulationParams {
        distance: rng.gen_range(150.0..17_000.0),
        reputation: settings.reputation,
        flights_per_day: rng.gen_range(1..=3),
        mode: settings.mode,
    }
}

fn sample_pax(rng: &mut ChaCha20Rng, config: &VerifyConfig) -> PaxSample {
    let capacity = rng.gen_range(3..=config.max_capacity.max(3));
    // Demand up to three cabins' worth so both shortage and surplus show up.
    let demand = PaxDemand::new(
        rng.gen_range(0..=capacity * 3),
        rng.gen_range(0..=capacity),
        rng.gen_range(0..=capacity / 2),
    );
    PaxSample {
        demand,
        capacity,
        params: sample_params(rng, &config.settings),
    }
}

fn sample_cargo(rng: &mut ChaCha20Rng, config: &VerifyConfig) -> CargoSample {
    let capacity = rng.gen_range(MIN_CARGO_CAPACITY..=MAX_CARGO_CAPACITY);
    let demand = CargoDemand::new(
        rng.gen_range(0..=capacity * 2),
        rng.gen_range(0..=capacity * 2),
    );
    CargoSample {
        demand,
        capacity,
        params: sample_params(rng, &config.settings),
    }
}

const fn class_seats(config: &PaxConfig, class: PaxClass) -> u32 {
    match class {
        PaxClass::Y => config.y,
        PaxClass::J => config.j,
        PaxClass::F => config.f,
    }
}

const fn class_demand(demand: PaxDemand, class: PaxClass) -> u32 {
    match class {
        PaxClass::Y => demand.y,
        PaxClass::J => demand.j,
        PaxClass::F => demand.f,
    }
}

fn income_ratio(closed: f64, reference: f64) -> f64 {
    if reference > 0.0 {
        closed / reference
    } else {
        1.0
    }
}

fn check_pax_case(
    case: usize,
    sample: PaxSample,
    config: &VerifyConfig,
) -> (CaseOutcome, Vec<VerificationError>) {
    let PaxSample {
        demand,
        capacity,
        params,
    } = sample;
    let per_trip = demand.per_trip_at_load(params.flights_per_day, config.settings.load);
    let closed_form = PaxConfig::calc_pax_conf(per_trip, capacity, params.distance, params.mode);
    let closed_form_income = simulate_closed_form(&closed_form, demand, &params);
    let reference = brute_pax_conf(demand, capacity, &params);
    let ratio = income_ratio(closed_form_income, reference.max_income);

    let mut violations = Vec::new();
    if closed_form.space_units() != capacity {
        violations.push(VerificationError::LayoutNotFilled {
            case,
            algorithm: closed_form.algorithm,
            used: closed_form.space_units(),
            capacity,
        });
    }
    let [.., last] = closed_form.algorithm.priority();
    let seats = class_seats(&closed_form, last);
    let wanted = class_demand(per_trip, last);
    if closed_form.valid != (seats <= wanted) {
        violations.push(VerificationError::ValidityMismatch {
            case,
            reported: closed_form.valid,
            class: last,
            seats,
            demand: wanted,
        });
    }
    if ratio < config.min_ratio {
        violations.push(VerificationError::IncomeBelowFloor {
            case,
            cabin: "pax",
            ratio,
            floor: config.min_ratio,
        });
    }
    let used = reference.y + 2 * reference.j + 3 * reference.f;
    if used > capacity {
        violations.push(VerificationError::ReferenceOverCapacity {
            case,
            used,
            capacity,
        });
    }

    debug!(
        "pax case {case}: cap {capacity}, {per_trip:?} per trip, {:.0} km -> ratio {ratio:.4}",
        params.distance
    );
    let outcome = CaseOutcome {
        case,
        demand,
        per_trip,
        capacity,
        params,
        closed_form,
        closed_form_income,
        reference,
        ratio,
    };
    (outcome, violations)
}

fn check_cargo_case(
    case: usize,
    sample: CargoSample,
    config: &VerifyConfig,
) -> (CargoCaseOutcome, Vec<VerificationError>) {
    let CargoSample {
        demand,
        capacity,
        params,
    } = sample;
    let settings = &config.settings;
    let trainings = (settings.l_training, settings.h_training);
    let per_trip = demand.per_trip_at_load(params.flights_per_day, settings.load);
    let closed_form =
        CargoConfig::calc_cargo_conf(per_trip, capacity, settings.l_training, settings.h_training);
    let closed_form_income =
        simulate_closed_form_cargo(&closed_form, capacity, trainings, demand, &params);
    let reference = brute_cargo_conf(
        demand,
        capacity,
        settings.l_training,
        settings.h_training,
        &params,
    );
    let ratio = income_ratio(closed_form_income, reference.max_income);

    let mut violations = Vec::new();
    if u16::from(closed_form.l) + u16::from(closed_form.h) != 100 {
        violations.push(VerificationError::CargoSplitNotWhole {
            case,
            l: closed_form.l,
            h: closed_form.h,
        });
    }
    if ratio < config.min_ratio {
        violations.push(VerificationError::IncomeBelowFloor {
            case,
            cabin: "cargo",
            ratio,
            floor: config.min_ratio,
        });
    }

    debug!(
        "cargo case {case}: cap {capacity} lbs, {per_trip:?} per trip, {:.0} km -> ratio {ratio:.4}",
        params.distance
    );
    let outcome = CargoCaseOutcome {
        case,
        demand,
        per_trip,
        capacity,
        params,
        closed_form,
        closed_form_income,
        reference,
        ratio,
    };
    (outcome, violations)
}

/// Sample `config.cases` pax cases and as many cargo cases from a seeded RNG
/// and check each one.
#[must_use]
pub fn run_verification(config: &VerifyConfig) -> VerificationSummary {
    let mut rng = ChaCha20Rng::seed_from_u64(config.seed);
    let mut cases = Vec::with_capacity(config.cases);
    let mut cargo_cases = Vec::with_capacity(config.cases);
    let mut violations = Vec::new();
    for case in 0..config.cases {
        let (outcome, found) = check_pax_case(case, sample_pax(&mut rng, config), config);
        cases.push(outcome);
        violations.extend(found);

        let (outcome, found) = check_cargo_case(case, sample_cargo(&mut rng, config), config);
        cargo_cases.push(outcome);
        violations.extend(found);
    }

    VerificationSummary {
        seed: config.seed,
        mode: config.settings.mode,
        min_ratio_floor: config.min_ratio,
        pax: RatioStats::collect(cases.iter().map(|c| c.ratio)),
        cargo: RatioStats::collect(cargo_cases.iter().map(|c| c.ratio)),
        cases,
        cargo_cases,
        violations,
    }
}
