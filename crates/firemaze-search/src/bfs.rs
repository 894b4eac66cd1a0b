//! Breadth-first shortest paths.
//!
//! The grid is unweighted, so the first time BFS pops the goal it has
//! found a minimum-hop path. This is the only ground-truth shortest path
//! in the system.

use crate::traversal::{traverse, Fringe, Node};
use firemaze_core::{Coord, Grid, MazeError, Path};
use log::debug;
use std::collections::VecDeque;

/// FIFO fringe.
#[derive(Debug, Default)]
pub struct Queue(VecDeque<Node>);

impl Fringe for Queue {
    fn push(&mut self, node: Node) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<Node> {
        self.0.pop_front()
    }
}

/// Minimum-hop path from the grid's start to its goal, if one exists.
pub fn shortest_path(grid: &Grid) -> Option<Path> {
    search(grid, grid.start(), grid.goal())
}

/// Minimum-hop path between arbitrary endpoints.
///
/// Returns `Ok(None)` when `goal` is unreachable and
/// `Err(MazeError::UnreachableQuery)` when an endpoint is outside the grid.
pub fn shortest_path_between(
    grid: &Grid,
    start: Coord,
    goal: Coord,
) -> Result<Option<Path>, MazeError> {
    grid.check(start)?;
    grid.check(goal)?;
    Ok(search(grid, start, goal))
}

pub(crate) fn search(grid: &Grid, start: Coord, goal: Coord) -> Option<Path> {
    if !grid.is_passable(start) {
        debug!("[BFS] start {start} is blocked");
        return None;
    }
    let path = traverse(grid, start, goal, Queue::default()).into_path();
    if path.is_none() {
        debug!("[BFS] no path {start} -> {goal}");
    }
    path
}
