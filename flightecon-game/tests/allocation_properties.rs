use flightecon_game::{
    CargoConfig, CargoDemand, GameMode, PaxAlgorithm, PaxClass, PaxConfig, PaxDemand,
    PaxStrategyTable,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const CASES: usize = 2_000;

fn slot(class: PaxClass) -> usize {
    match class {
        PaxClass::Y => 0,
        PaxClass::J => 1,
        PaxClass::F => 2,
    }
}

fn random_pax_demand(rng: &mut ChaCha20Rng) -> PaxDemand {
    PaxDemand::new(
        rng.gen_range(0..=1_500),
        rng.gen_range(0..=400),
        rng.gen_range(0..=150),
    )
}

#[test]
fn valid_pax_configs_fill_capacity_exactly() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed_0001);
    let mut valid_seen = 0;
    for _ in 0..CASES {
        let demand = random_pax_demand(&mut rng);
        let capacity = rng.gen_range(1..=600);
        let algorithm = PaxAlgorithm::ALL[rng.gen_range(0..PaxAlgorithm::ALL.len())];
        let cfg = PaxConfig::allocate(demand, capacity, algorithm);
        assert_eq!(cfg.algorithm, algorithm);
        if cfg.valid {
            valid_seen += 1;
            assert_eq!(
                cfg.y + 2 * cfg.j + 3 * cfg.f,
                capacity,
                "{demand:?} cap {capacity} {}",
                algorithm.label()
            );
        }
        assert!(cfg.space_units() <= capacity);
    }
    assert!(valid_seen > CASES / 10, "only {valid_seen} valid cases");
}

#[test]
fn leading_classes_get_their_demand_when_it_fits() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed_0002);
    for _ in 0..CASES {
        let demand = random_pax_demand(&mut rng);
        let capacity = rng.gen_range(1..=600);
        for algorithm in PaxAlgorithm::ALL {
            let cfg = PaxConfig::allocate(demand, capacity, algorithm);
            let seats = [cfg.y, cfg.j, cfg.f];
            let wanted = [demand.y, demand.j, demand.f];
            let [first, second, _] = algorithm.priority();
            let leading = u64::from(wanted[slot(first)]) * u64::from(first.space())
                + u64::from(wanted[slot(second)]) * u64::from(second.space());
            if leading > u64::from(capacity) {
                continue;
            }
            // Economy also absorbs space the last class cannot use.
            for class in [first, second] {
                if class != PaxClass::Y {
                    assert_eq!(seats[slot(class)], wanted[slot(class)], "{}", algorithm.label());
                }
            }
        }
    }
}

#[test]
fn allocation_is_deterministic() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed_0003);
    for _ in 0..200 {
        let demand = random_pax_demand(&mut rng);
        let capacity = rng.gen_range(1..=600);
        let distance = rng.gen_range(100.0..20_000.0);
        let mode = if rng.gen_bool(0.5) {
            GameMode::Easy
        } else {
            GameMode::Realism
        };
        let a = PaxConfig::calc_pax_conf(demand, capacity, distance, mode);
        let b = PaxConfig::calc_pax_conf(demand, capacity, distance, mode);
        assert_eq!(a, b);
        assert_eq!(a.algorithm, PaxStrategyTable::for_mode(mode).select(distance));
    }
}

#[test]
fn f_first_orderings_truncate_first_class() {
    for capacity in [10_u32, 11, 200, 301, 599] {
        let demand = PaxDemand::new(10, 10, capacity);
        for algorithm in [PaxAlgorithm::Fjy, PaxAlgorithm::Fyj] {
            let cfg = PaxConfig::allocate(demand, capacity, algorithm);
            assert_eq!(cfg.f, capacity / 3, "{}", algorithm.label());
        }
    }
}

#[test]
fn cargo_percentages_always_sum_to_one_hundred() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed_0004);
    for _ in 0..CASES {
        let demand = CargoDemand::new(rng.gen_range(0..=2_000_000), rng.gen_range(0..=2_000_000));
        let capacity = rng.gen_range(1_000..=1_500_000);
        let l_training = rng.gen_range(0..=6);
        let h_training = rng.gen_range(0..=6);
        let cfg = CargoConfig::calc_cargo_conf(demand, capacity, l_training, h_training);
        assert_eq!(u32::from(cfg.l) + u32::from(cfg.h), 100);
        let l_first = CargoConfig::calc_l_conf(demand, capacity, l_training);
        if l_first.valid {
            assert_eq!(cfg, l_first);
        }
    }
}
