use flightecon_game::{
    CargoDemand, GameMode, PaxConfig, PaxDemand, SimulationParams, brute_cargo_conf,
    brute_pax_conf, simulate_closed_form,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn params(rng: &mut ChaCha20Rng) -> SimulationParams {
    SimulationParams {
        distance: rng.gen_range(500.0..12_000.0),
        reputation: rng.gen_range(60.0..100.0),
        flights_per_day: rng.gen_range(1..=4),
        mode: if rng.gen_bool(0.5) {
            GameMode::Easy
        } else {
            GameMode::Realism
        },
    }
}

#[test]
fn brute_force_never_loses_to_closed_form() {
    let mut rng = ChaCha20Rng::seed_from_u64(41);
    for _ in 0..25 {
        let params = params(&mut rng);
        let capacity = rng.gen_range(6..=36);
        let demand = PaxDemand::new(
            rng.gen_range(0..=60),
            rng.gen_range(0..=20),
            rng.gen_range(0..=10),
        );
        let closed = PaxConfig::calc_pax_conf(demand, capacity, params.distance, params.mode);
        let closed_income = simulate_closed_form(&closed, demand, &params);
        let best = brute_pax_conf(demand, capacity, &params);
        assert!(
            best.max_income >= closed_income,
            "{demand:?} cap {capacity}: brute {} < closed {closed_income}",
            best.max_income
        );
        assert!(best.y + 2 * best.j + 3 * best.f <= capacity);
        assert!((1..=20).contains(&best.planes) || best.max_income == 0.0);
    }
}

#[test]
fn brute_force_is_deterministic() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let params = params(&mut rng);
    let demand = PaxDemand::new(40, 12, 6);
    assert_eq!(
        brute_pax_conf(demand, 24, &params),
        brute_pax_conf(demand, 24, &params)
    );
}

#[test]
fn cargo_split_fractions_are_complementary() {
    let mut rng = ChaCha20Rng::seed_from_u64(43);
    for _ in 0..10 {
        let params = params(&mut rng);
        let demand = CargoDemand::new(rng.gen_range(0..200_000), rng.gen_range(0..200_000));
        let (l_training, h_training) = (rng.gen_range(0..=6), rng.gen_range(0..=6));
        let best = brute_cargo_conf(demand, 50_000, l_training, h_training, &params);
        assert!((best.l_pct + best.h_pct - 1.0).abs() < 1e-9 || best.max_income == 0.0);
        assert!((0.0..=1.0).contains(&best.h_pct));
    }
}
