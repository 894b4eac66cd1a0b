//! Random grid generation.
//!
//! Every cell except the start and the goal is an independent Bernoulli
//! trial for becoming an obstacle. Fire grids additionally place a single
//! fire seed and are discarded and regenerated from scratch until they are
//! solvable and the fire is not sealed away from the agent.

use crate::config::GenerationConfig;
use firemaze_core::{check_probability, Cell, Coord, Grid, MazeError};
use firemaze_search::reachable;
use log::{debug, trace};
use rand::Rng;

/// Smallest dimension for which a fire grid has a cell to seed.
pub const MIN_FIRE_DIM: usize = 2;

/// Obstacle grid of side `dim` with obstacle density `p`.
///
/// No connectivity is guaranteed; the grid may be unsolvable.
///
/// # Errors
///
/// `InvalidDimension` if `dim` is 0, `InvalidProbability` if `p` is outside
/// `[0, 1]`.
pub fn generate_obstacle_grid<R: Rng + ?Sized>(
    dim: usize,
    p: f64,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    let p = check_probability("p", p)?;
    let mut grid = Grid::new(dim)?;
    let (start, goal) = (grid.start(), grid.goal());
    for x in 0..dim {
        for y in 0..dim {
            let c = Coord::new(x, y);
            if c == start || c == goal {
                continue;
            }
            if rng.gen::<f64>() < p {
                grid[c] = Cell::Obstacle;
            }
        }
    }
    Ok(grid)
}

/// One unfiltered fire-grid candidate and its fire seed.
///
/// The seed is drawn uniformly from the `dim * dim - 2` cells other than
/// start and goal, counted in row-major order. Every other non-endpoint
/// cell becomes an obstacle with probability `p`; the seed is never
/// overwritten by an obstacle.
pub fn sample_fire_grid<R: Rng + ?Sized>(
    dim: usize,
    p: f64,
    rng: &mut R,
) -> Result<(Grid, Coord), MazeError> {
    let p = check_probability("p", p)?;
    if dim < MIN_FIRE_DIM {
        return Err(MazeError::InvalidDimension {
            dim,
            min: MIN_FIRE_DIM,
        });
    }
    let mut grid = Grid::new(dim)?;
    let (start, goal) = (grid.start(), grid.goal());
    let pick = rng.gen_range(0..dim * dim - 2);

    let mut seed = start;
    let mut k = 0;
    for x in 0..dim {
        for y in 0..dim {
            let c = Coord::new(x, y);
            if c == start || c == goal {
                continue;
            }
            if k == pick {
                grid[c] = Cell::Fire;
                seed = c;
            } else if rng.gen::<f64>() < p {
                grid[c] = Cell::Obstacle;
            }
            k += 1;
        }
    }
    Ok((grid, seed))
}

/// Fire grid of side `dim` with obstacle density `p`.
///
/// Candidates from [`sample_fire_grid`] are rejected until, with fire
/// treated as impassable, the goal is reachable from the start and the
/// start is reachable from the fire seed.
///
/// # Errors
///
/// `InvalidDimension` if `dim < 2`, `InvalidProbability` if `p` is outside
/// `[0, 1]`, `InvalidConfig` for a bad `config`, and
/// `GenerationBudgetExceeded` if `config.max_attempts` candidates were all
/// rejected.
pub fn generate_fire_grid<R: Rng + ?Sized>(
    dim: usize,
    p: f64,
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    config.validate()?;
    for attempt in 1..=config.max_attempts {
        let (grid, seed) = sample_fire_grid(dim, p, rng)?;
        let (start, goal) = (grid.start(), grid.goal());
        if reachable(&grid, start, goal)? && reachable(&grid, seed, start)? {
            debug!(
                "[Generate] accepted {dim}x{dim} fire grid after {attempt} attempt(s), seed {seed}"
            );
            return Ok(grid);
        }
        trace!("[Generate] rejected candidate {attempt} (seed {seed})");
    }
    debug!(
        "[Generate] gave up after {} attempts (dim={dim}, p={p})",
        config.max_attempts
    );
    Err(MazeError::GenerationBudgetExceeded {
        attempts: config.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use firemaze_test_utils::rng;
    use proptest::prelude::*;

    // ── Obstacle grids ──────────────────────────────────────────

    #[test]
    fn zero_density_is_open() {
        let g = generate_obstacle_grid(8, 0.0, &mut rng(1)).unwrap();
        assert_eq!(g.count(Cell::Free), 64);
    }

    #[test]
    fn full_density_spares_only_endpoints() {
        let g = generate_obstacle_grid(6, 1.0, &mut rng(1)).unwrap();
        assert_eq!(g.count(Cell::Obstacle), 34);
        assert_eq!(g[g.start()], Cell::Free);
        assert_eq!(g[g.goal()], Cell::Free);
    }

    #[test]
    fn single_cell_obstacle_grid() {
        let g = generate_obstacle_grid(1, 1.0, &mut rng(3)).unwrap();
        assert_eq!(g.cells(), &[Cell::Free]);
    }

    #[test]
    fn obstacle_grid_rejects_bad_input() {
        assert!(matches!(
            generate_obstacle_grid(0, 0.2, &mut rng(0)),
            Err(MazeError::InvalidDimension { .. })
        ));
        assert!(matches!(
            generate_obstacle_grid(5, 1.2, &mut rng(0)),
            Err(MazeError::InvalidProbability { name: "p", .. })
        ));
    }

    #[test]
    fn same_seed_same_grid() {
        let a = generate_obstacle_grid(12, 0.3, &mut rng(42)).unwrap();
        let b = generate_obstacle_grid(12, 0.3, &mut rng(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn density_is_roughly_p() {
        let g = generate_obstacle_grid(100, 0.3, &mut rng(7)).unwrap();
        let frac = g.count(Cell::Obstacle) as f64 / (100.0 * 100.0 - 2.0);
        assert!((frac - 0.3).abs() < 0.03, "obstacle fraction {frac}");
    }

    // ── Fire grids ──────────────────────────────────────────────

    #[test]
    fn fire_grid_requires_interior() {
        assert!(matches!(
            generate_fire_grid(1, 0.1, &GenerationConfig::default(), &mut rng(0)),
            Err(MazeError::InvalidDimension { dim: 1, min: 2 })
        ));
    }

    #[test]
    fn sample_places_exactly_one_seed() {
        for seed in 0..20 {
            let (g, fire) = sample_fire_grid(5, 0.4, &mut rng(seed)).unwrap();
            assert_eq!(g.fire_cells(), vec![fire]);
            assert_ne!(fire, g.start());
            assert_ne!(fire, g.goal());
        }
    }

    #[test]
    fn impossible_grid_exhausts_budget() {
        // On a 2x2 grid the seed takes one of the two middle cells and the
        // other is always an obstacle, so the goal is never reachable.
        let cfg = GenerationConfig { max_attempts: 25 };
        assert_eq!(
            generate_fire_grid(2, 1.0, &cfg, &mut rng(9)),
            Err(MazeError::GenerationBudgetExceeded { attempts: 25 })
        );
    }

    #[test]
    fn invalid_config_is_reported() {
        let cfg = GenerationConfig { max_attempts: 0 };
        assert!(matches!(
            generate_fire_grid(5, 0.1, &cfg, &mut rng(0)),
            Err(MazeError::InvalidConfig { .. })
        ));
    }

    proptest! {
        #[test]
        fn fire_grid_postconditions(seed in any::<u64>(), dim in 2usize..12, p in 0.0f64..0.35) {
            let config = GenerationConfig::default();
            let g = generate_fire_grid(dim, p, &config, &mut rng(seed)).unwrap();
            let fires = g.fire_cells();
            prop_assert_eq!(fires.len(), 1);
            prop_assert_eq!(g[g.start()], Cell::Free);
            prop_assert_eq!(g[g.goal()], Cell::Free);
            prop_assert!(reachable(&g, g.start(), g.goal()).unwrap());
            prop_assert!(reachable(&g, fires[0], g.start()).unwrap());
        }
    }
}
