//! Algorithm selection and explored-cell counts for comparing searches.

use crate::best_first::ScoredFringe;
use crate::bfs::Queue;
use crate::dfs::Stack;
use crate::traversal::traverse;
use firemaze_core::{Coord, Grid, MazeError};
use std::fmt;

/// One of the three graph searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// LIFO stack traversal.
    DepthFirst,
    /// FIFO queue traversal.
    BreadthFirst,
    /// Heuristic priority traversal.
    BestFirst,
}

impl Algorithm {
    /// All algorithms, in the order analyses usually report them.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::BestFirst,
    ];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DepthFirst => "DFS",
            Self::BreadthFirst => "BFS",
            Self::BestFirst => "A*",
        };
        f.write_str(name)
    }
}

/// Number of distinct cells `algorithm` pushes to its fringe while
/// searching from the grid's start to its goal.
///
/// Each cell counts once no matter how many times it is pushed. The
/// traversal order is identical to the path-returning search.
pub fn explored_count(grid: &Grid, algorithm: Algorithm) -> usize {
    count(grid, algorithm, grid.start(), grid.goal())
}

/// [`explored_count`] between arbitrary endpoints.
pub fn explored_count_between(
    grid: &Grid,
    algorithm: Algorithm,
    start: Coord,
    goal: Coord,
) -> Result<usize, MazeError> {
    grid.check(start)?;
    grid.check(goal)?;
    Ok(count(grid, algorithm, start, goal))
}

fn count(grid: &Grid, algorithm: Algorithm, start: Coord, goal: Coord) -> usize {
    match algorithm {
        Algorithm::DepthFirst => traverse(grid, start, goal, Stack::default()).enqueued(),
        Algorithm::BreadthFirst => traverse(grid, start, goal, Queue::default()).enqueued(),
        Algorithm::BestFirst => traverse(grid, start, goal, ScoredFringe::new(grid)).enqueued(),
    }
}
