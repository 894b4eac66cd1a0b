//! Integration test: properties of the full generate, search, burn, escape
//! pipeline on random inputs.

use firemaze::prelude::*;
use firemaze_test_utils::{assert_valid_path, rng};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn searches_agree_on_generated_grids(
        dim in 1usize..16,
        p in 0.0f64..0.6,
        seed in any::<u64>(),
    ) {
        let grid = generate_obstacle_grid(dim, p, &mut rng(seed)).unwrap();
        let (start, goal) = (grid.start(), grid.goal());
        let can_reach = reachable(&grid, start, goal).unwrap();
        let shortest = shortest_path(&grid);
        let greedy = best_first_path(&grid);

        prop_assert_eq!(shortest.is_some(), can_reach);
        if greedy.is_some() {
            prop_assert!(can_reach);
        }
        if let (Some(s), Some(g)) = (&shortest, &greedy) {
            assert_valid_path(&grid, s, start, goal);
            assert_valid_path(&grid, g, start, goal);
            prop_assert!(s.hops() <= g.hops());
            prop_assert!(s.hops() >= start.manhattan(goal));
        }
    }

    #[test]
    fn burning_is_monotonic_over_many_steps(
        dim in 2usize..14,
        q in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut r = rng(seed);
        let mut grid = generate_fire_grid(dim, 0.25, &GenerationConfig::default(), &mut r).unwrap();
        let obstacles = grid.count(Cell::Obstacle);
        for _ in 0..dim {
            let next = advance_fire(&grid, q, &mut r).unwrap();
            for (coord, cell) in grid.iter() {
                match cell {
                    Cell::Fire => prop_assert_eq!(next[coord], Cell::Fire),
                    Cell::Obstacle => prop_assert_eq!(next[coord], Cell::Obstacle),
                    _ if grid.fire_neighbours(coord) == 0 => {
                        prop_assert_eq!(next[coord], cell)
                    }
                    _ => {}
                }
            }
            prop_assert_eq!(next.count(Cell::Obstacle), obstacles);
            grid = next;
        }
    }

    #[test]
    fn strategies_return_a_terminal_annotation(
        n in 1u8..=3,
        dim in 2usize..12,
        q in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let mut r = rng(seed);
        let grid = generate_fire_grid(dim, 0.2, &GenerationConfig::default(), &mut r).unwrap();
        let (result, outcome) = run_strategy_n(n, &grid, q, &mut r).unwrap();
        prop_assert!(matches!(result[grid.start()], Cell::ExitPath | Cell::BurnedOnExit));
        match outcome {
            Outcome::Success => prop_assert_eq!(result[grid.goal()], Cell::ExitPath),
            Outcome::Death => prop_assert_eq!(result.count(Cell::BurnedOnExit), 1),
            Outcome::Stuck => prop_assert_eq!(result.count(Cell::BurnedOnExit), 0),
        }
    }
}
