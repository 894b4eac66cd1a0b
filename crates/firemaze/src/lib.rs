//! Firemaze: grid mazes, graph search, and escape strategies under
//! stochastic fire spread.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all firemaze sub-crates. For most users, adding `firemaze` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use firemaze::prelude::*;
//!
//! let mut rng = seeded_rng(7);
//!
//! // A 12x12 maze with 20% obstacles and one fire seed, guaranteed to
//! // connect start to goal and the fire to the start.
//! let grid = generate_fire_grid(12, 0.2, &GenerationConfig::default(), &mut rng).unwrap();
//! assert!(reachable(&grid, grid.start(), grid.goal()).unwrap());
//!
//! let shortest = shortest_path(&grid).unwrap();
//! let greedy = best_first_path(&grid).unwrap();
//! assert!(shortest.hops() <= greedy.hops());
//!
//! // Let the agent try to escape while the fire spreads with q = 0.3.
//! let run = run_strategy(Strategy::Replan, &grid, 0.3, &StrategyConfig::default(), &mut rng)
//!     .unwrap();
//! assert_eq!(run.trace[0], grid.start());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `firemaze-core` | `Grid`, `Cell`, `Coord`, `Path`, `MazeError` |
//! | [`search`] | `firemaze-search` | DFS, BFS, best-first, explored counts, fire reach |
//! | [`fire`] | `firemaze-fire` | Obstacle and fire grid generation, fire spread |
//! | [`strategy`] | `firemaze-strategy` | The three escape strategies and their config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use rand::Rng;

/// Grid model and error type (`firemaze-core`).
///
/// Contains [`types::Grid`], [`types::Cell`], [`types::Coord`],
/// [`types::Path`], and [`types::MazeError`].
pub use firemaze_core as types;

/// Graph search (`firemaze-search`).
///
/// [`search::reachable`] for reachability, [`search::shortest_path`] for
/// minimum-hop paths, [`search::best_first_path`] for the heuristic search.
pub use firemaze_search as search;

/// Generation and fire spread (`firemaze-fire`).
///
/// [`fire::generate_fire_grid`] rejection-samples solvable fire grids;
/// [`fire::FireSpread`] advances the fire one step at a time.
pub use firemaze_fire as fire;

/// Escape strategies (`firemaze-strategy`).
///
/// [`strategy::run_strategy`] runs one of the three policies on a private
/// copy of a grid.
pub use firemaze_strategy as strategy;

/// Run strategy `n` (1, 2, or 3) with the default [`strategy::StrategyConfig`].
///
/// # Errors
///
/// `InvalidConfig` for any other `n`, `InvalidProbability` if `q` is outside
/// `[0, 1]`.
pub fn run_strategy_n<R: Rng + ?Sized>(
    n: u8,
    grid: &types::Grid,
    q: f64,
    rng: &mut R,
) -> Result<(types::Grid, strategy::Outcome), types::MazeError> {
    let config = strategy::StrategyConfig::default();
    let run = strategy::run_numbered_strategy(n, grid, q, &config, rng)?;
    Ok((run.grid, run.outcome))
}

/// Common imports for typical firemaze usage.
///
/// ```rust
/// use firemaze::prelude::*;
/// ```
///
/// This imports the grid model, every search entry point, generation and
/// fire spread, and the strategy runner with its configuration.
pub mod prelude {
    // Grid model
    pub use firemaze_core::{annotate_path, Cell, Coord, Direction, Grid, MazeError, Path};

    // Search
    pub use firemaze_search::{
        best_first_path, best_first_path_between, explored_count, explored_count_between,
        reachable, shortest_path, shortest_path_between, Algorithm,
    };

    // Generation and fire
    pub use firemaze_fire::{
        advance_fire, generate_fire_grid, generate_obstacle_grid, seeded_rng, FireSpread,
        GenerationConfig,
    };

    // Strategies
    pub use firemaze_strategy::{
        run_numbered_strategy, run_strategy, Outcome, Planner, Strategy, StrategyConfig,
        StrategyRun,
    };

    pub use crate::run_strategy_n;
}
