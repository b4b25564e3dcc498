use flightecon_game::{
    Aircraft, AircraftType, Airport, Dataset, DatasetFile, DemandEntry, GameSettings,
    InMemoryDataset, RouteOptions, find_routes,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const SHORT_FIELD: u32 = 2;

fn airport(id: u32, lat: f64, lng: f64, rwy: u16) -> Airport {
    let code = format!("A{id:02}");
    Airport {
        id,
        name: code.to_lowercase(),
        fullname: format!("{code} Regional"),
        country: "Testland".into(),
        continent: "Nowhere".into(),
        iata: code.clone(),
        icao: format!("X{code}"),
        lat,
        lng,
        rwy,
        market: 50,
        hub_cost: 10_000,
    }
}

fn jet() -> Aircraft {
    Aircraft {
        id: 1,
        shortname: "j200".into(),
        manufacturer: "Test".into(),
        name: "Jet 200".into(),
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

/// Hub at the origin of the grid, one short-runway field next door and a
/// scatter of random airports, all with generous demand from the hub.
fn network(seed: u64) -> InMemoryDataset {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut airports = vec![
        airport(1, 0.0, 0.0, 10_000),
        airport(SHORT_FIELD, 0.0, 5.0, 3_000),
    ];
    for id in 3..=20 {
        airports.push(airport(
            id,
            rng.gen_range(-25.0..25.0),
            rng.gen_range(-25.0..25.0),
            rng.gen_range(5_000..12_000),
        ));
    }
    let demand = (2..=20)
        .map(|destination| DemandEntry {
            origin: 1,
            destination,
            y: rng.gen_range(500..900),
            j: rng.gen_range(150..250),
            f: rng.gen_range(40..80),
            l: None,
            h: None,
            distance: None,
        })
        .collect();
    InMemoryDataset::from_file(DatasetFile {
        airports,
        aircraft: vec![jet()],
        demand,
        bidirectional: true,
    })
    .unwrap()
}

#[test]
fn destinations_are_valid_and_sorted_by_profit() {
    for seed in [1_u64, 2, 3] {
        let ds = network(seed);
        let origin = ds.airport_by_id(1).unwrap();
        let ranked = find_routes(
            &ds,
            origin,
            &jet(),
            &RouteOptions::default(),
            &GameSettings::default(),
        );
        assert!(!ranked.is_empty());
        for dest in &ranked {
            assert!(dest.route.valid);
            assert_ne!(dest.airport.id, origin.id);
            assert_eq!(dest.route.route.destination, dest.airport.id);
            assert!(dest.route.profit().is_some());
        }
        for pair in ranked.windows(2) {
            assert!(pair[0].profit() >= pair[1].profit());
        }
    }
}

#[test]
fn realism_drops_airports_with_short_runways() {
    let ds = network(7);
    let origin = ds.airport_by_id(1).unwrap();
    let options = RouteOptions::default();

    let easy = find_routes(&ds, origin, &jet(), &options, &GameSettings::default());
    assert!(easy.iter().any(|d| d.airport.id == SHORT_FIELD));

    let realism = GameSettings::default_realism();
    let ranked = find_routes(&ds, origin, &jet(), &options, &realism);
    assert!(ranked.iter().all(|d| d.airport.rwy >= jet().rwy));
    assert!(ranked.iter().all(|d| d.airport.id != SHORT_FIELD));
}

#[test]
fn distance_cap_limits_candidates() {
    let ds = network(11);
    let origin = ds.airport_by_id(1).unwrap();
    let options = RouteOptions::default().with_max_distance(2_000.0);
    let ranked = find_routes(&ds, origin, &jet(), &options, &GameSettings::default());
    assert!(ranked.iter().any(|d| d.airport.id == SHORT_FIELD));
    for dest in &ranked {
        assert!(dest.route.route.direct_distance <= 2_000.0);
    }
}
