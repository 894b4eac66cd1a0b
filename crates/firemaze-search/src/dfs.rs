//! Depth-first reachability.

use crate::traversal::{traverse, Fringe, Node};
use firemaze_core::{Coord, Grid, MazeError};
use log::debug;

/// LIFO fringe.
#[derive(Debug, Default)]
pub struct Stack(Vec<Node>);

impl Fringe for Stack {
    fn push(&mut self, node: Node) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<Node> {
        self.0.pop()
    }
}

/// `true` if `goal` can be reached from `start` through cells that are
/// neither `Obstacle` nor `Fire`.
///
/// Diagonal moves are not allowed. Returns `Err(MazeError::UnreachableQuery)`
/// if either endpoint is outside the grid.
///
/// # Examples
///
/// ```
/// use firemaze_core::{Cell, Coord, Grid};
/// use firemaze_search::reachable;
///
/// let grid = Grid::new(2)
///     .unwrap()
///     .with_cell(Coord::new(0, 1), Cell::Obstacle)
///     .with_cell(Coord::new(1, 0), Cell::Obstacle);
/// assert!(!reachable(&grid, grid.start(), grid.goal()).unwrap());
/// ```
pub fn reachable(grid: &Grid, start: Coord, goal: Coord) -> Result<bool, MazeError> {
    grid.check(start)?;
    grid.check(goal)?;
    let reached = traverse(grid, start, goal, Stack::default()).reached();
    if !reached {
        debug!("[DFS] {goal} unreachable from {start}");
    }
    Ok(reached)
}
