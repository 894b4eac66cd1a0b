//! Strategy configuration and validation.

use firemaze_core::{Coord, Grid, MazeError, Path};
use firemaze_search::{best_first_path_between, shortest_path_between};

/// The search used to compute and recompute the agent's plan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Planner {
    /// Heuristic best-first search (the default).
    #[default]
    BestFirst,
    /// Breadth-first shortest paths.
    BreadthFirst,
}

impl Planner {
    /// Plan a route from `from` to the goal of `grid`.
    pub fn plan(self, grid: &Grid, from: Coord) -> Result<Option<Path>, MazeError> {
        match self {
            Planner::BestFirst => best_first_path_between(grid, from, grid.goal()),
            Planner::BreadthFirst => shortest_path_between(grid, from, grid.goal()),
        }
    }
}

/// Tuning knobs shared by all strategies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyConfig {
    /// Search used for planning. Default: [`Planner::BestFirst`].
    pub planner: Planner,
    /// Maximum agent moves before the run is declared stuck. `None` =
    /// `4 * dim * dim`.
    pub max_rounds: Option<usize>,
    /// Manhattan radius within which a fire cell counts as a threat to a
    /// planned cell (risk-aware strategy). Default: 4.
    pub danger_radius: usize,
    /// Maximum cells the fire-travel search may expand per query
    /// (risk-aware strategy). Default: 4096.
    pub reach_budget: usize,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            planner: Planner::BestFirst,
            max_rounds: None,
            danger_radius: 4,
            reach_budget: 4096,
        }
    }
}

impl StrategyConfig {
    /// Resolve the round cap for a grid of side `dim`.
    pub fn resolved_max_rounds(&self, dim: usize) -> usize {
        self.max_rounds.unwrap_or(4 * dim * dim)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.max_rounds == Some(0) {
            return Err(MazeError::InvalidConfig {
                reason: "max_rounds must be at least 1".to_string(),
            });
        }
        if self.reach_budget == 0 {
            return Err(MazeError::InvalidConfig {
                reason: "reach_budget must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
