//! Property tests over random Euclidean instances.

use proptest::prelude::*;
use u_tsp::constructive::nearest_neighbor;
use u_tsp::distance::DistanceMatrix;
use u_tsp::evaluation::{improves, reversed_length};
use u_tsp::local_search::{two_opt_improve, TwoOptConfig};
use u_tsp::models::{City, Tour};
use u_tsp::sa::{SaConfig, SaRunner};
use u_tsp::tabu::{TabuConfig, TabuMemory, TabuRunner};

fn cities_strategy(max: usize) -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 2..max).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(k, (x, y))| City::new(k * 3 + 1, x, y))
            .collect()
    })
}

fn initial_tour(dm: &DistanceMatrix) -> Tour {
    nearest_neighbor(dm, dm.ids(), None)
        .expect("default start is always known")
        .0
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn distance_matrix_is_symmetric(cities in cities_strategy(20)) {
        let dm = DistanceMatrix::from_cities(&cities);
        for &a in dm.ids() {
            for &b in dm.ids() {
                prop_assert_eq!(dm.get(a, b), dm.get(b, a));
                prop_assert!(dm.get(a, b) >= 0.0);
            }
        }
    }

    #[test]
    fn nearest_neighbor_is_valid_and_deterministic(cities in cities_strategy(25)) {
        let dm = DistanceMatrix::from_cities(&cities);
        let (tour, length) = nearest_neighbor(&dm, dm.ids(), None).expect("known start");
        prop_assert!(tour.is_valid_for(dm.ids()));
        prop_assert!((tour.length(&dm) - length).abs() < 1e-6);
        let (again, _) = nearest_neighbor(&dm, dm.ids(), None).expect("known start");
        prop_assert_eq!(tour, again);
    }

    #[test]
    fn two_opt_converges_to_local_optimum(cities in cities_strategy(18)) {
        let dm = DistanceMatrix::from_cities(&cities);
        let initial = initial_tour(&dm);
        let result = two_opt_improve(&dm, &initial, &TwoOptConfig::default());

        prop_assert!(result.converged);
        prop_assert!(result.tour.is_valid_for(dm.ids()));
        prop_assert_eq!(result.tour.start(), initial.start());
        prop_assert!(result.length <= initial.length(&dm) + 1e-9);

        let stops = result.tour.stops();
        let last = stops.len().saturating_sub(2);
        let mut scratch = Vec::new();
        for i in 1..last {
            for j in (i + 1)..=last {
                let candidate = reversed_length(stops, result.length, &dm, i, j, &mut scratch);
                prop_assert!(!improves(candidate, result.length));
            }
        }

        let again = two_opt_improve(&dm, &initial, &TwoOptConfig::default());
        prop_assert_eq!(result.tour, again.tour);
    }

    #[test]
    fn tabu_best_never_regresses(cities in cities_strategy(14), tenure in 0usize..12) {
        let dm = DistanceMatrix::from_cities(&cities);
        let initial = initial_tour(&dm);
        let config = TabuConfig::default()
            .with_max_iterations(40)
            .with_tabu_tenure(tenure)
            .with_no_improvement_limit(10);
        let result = TabuRunner::run(&dm, &initial, &config);

        prop_assert!(result.best.is_valid_for(dm.ids()));
        prop_assert!(result.best_length <= initial.length(&dm));
        for window in result.cost_history.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn annealing_best_never_regresses(cities in cities_strategy(14), seed in any::<u64>()) {
        let dm = DistanceMatrix::from_cities(&cities);
        let initial = initial_tour(&dm);
        let config = SaConfig::default().with_max_iterations(500).with_seed(seed);
        let result = SaRunner::run(&dm, &initial, &config).expect("valid config");

        prop_assert!(result.best.is_valid_for(dm.ids()));
        prop_assert_eq!(result.best.start(), initial.start());
        prop_assert!(result.best_length <= initial.length(&dm));
        for window in result.cost_history.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn tabu_memory_is_bounded_fifo(
        capacity in 0usize..8,
        moves in prop::collection::vec((1usize..20, 1usize..20), 0..40),
    ) {
        let mut memory = TabuMemory::new(capacity);
        let mut pushed = Vec::new();
        for mv in moves {
            let evicted = memory.push(mv);
            pushed.push(mv);
            prop_assert!(memory.len() <= capacity);
            if capacity > 0 && pushed.len() > capacity {
                prop_assert_eq!(evicted, Some(pushed[pushed.len() - capacity - 1]));
            }
        }
        let held: Vec<_> = memory.iter().copied().collect();
        let start = pushed.len().saturating_sub(capacity);
        prop_assert_eq!(held, pushed[start..].to_vec());
    }
}

#[test]
fn two_opt_and_tabu_agree_at_any_scale() {
    for scale in [1e-11, 1e-3, 1.0, 1e6] {
        let dm = DistanceMatrix::from_cities(&[
            City::new(0, 0.0, 0.0),
            City::new(1, 0.0, scale),
            City::new(2, scale, scale),
            City::new(3, scale, 0.0),
        ]);
        let crossed = Tour::closed(&[0, 2, 1, 3]);
        let descent = two_opt_improve(&dm, &crossed, &TwoOptConfig::default());
        let tabu = TabuRunner::run(&dm, &crossed, &TabuConfig::default());
        assert_eq!(descent.tour.stops(), &[0, 1, 2, 3, 0], "scale {scale}");
        assert_eq!(descent.tour, tabu.best, "scale {scale}");
        assert_eq!(descent.length, tabu.best_length, "scale {scale}");
    }
}

#[test]
fn unit_square_nearest_neighbor_then_two_opt() {
    let dm = DistanceMatrix::from_cities(&[
        City::new(0, 0.0, 0.0),
        City::new(1, 0.0, 1.0),
        City::new(2, 1.0, 1.0),
        City::new(3, 1.0, 0.0),
    ]);
    let (tour, length) = nearest_neighbor(&dm, dm.ids(), Some(0)).expect("known start");
    assert!((length - 4.0).abs() < 1e-10);

    let result = two_opt_improve(&dm, &tour, &TwoOptConfig::default());
    assert_eq!(result.tour, tour);
    assert_eq!(result.moves, 0);
    assert!((result.length - 4.0).abs() < 1e-10);
}
