//! Greedy best-first search with a hand-tuned heuristic.
//!
//! The fringe pops the point with the **highest** score first. The score
//! rewards forward progress towards `(N-1, N-1)`, punishes steps that move
//! away from it, and adds a bonus for open space straight ahead when moving
//! down or right. It is not an admissible cost estimate: on obstructed
//! grids the path found may be longer than the BFS shortest path. On open
//! grids and single-route corridors the two coincide.
//!
//! Ties are broken FIFO: among equal scores the earliest-pushed point is
//! expanded first.

use crate::traversal::{traverse, Fringe, Node};
use firemaze_core::{Coord, Direction, Grid, MazeError, Path};
use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Score of a point reached by moving in `dir` after `steps` moves.
///
/// ```text
/// to_goal     = 2 * (dim - 1)
/// remaining   = to_goal - (x + y)
/// open        = free cells straight ahead (down/right only)
/// back        = (to_goal - steps - remaining) * 10
/// longer      = max(0, (steps - remaining) / 2)
/// score       = to_goal                   if steps == to_goal
///             = back + open + longer      otherwise
/// ```
///
/// `to_goal` is always measured from `(0, 0)` to `(N-1, N-1)`, including
/// when the search itself starts elsewhere.
pub fn heuristic(grid: &Grid, dir: Direction, coord: Coord, steps: usize) -> i64 {
    let dim = grid.dim();
    let to_goal = 2 * (dim as i64 - 1);
    let steps = steps as i64;
    let remaining = to_goal - (coord.x + coord.y) as i64;

    let open = match dir {
        Direction::Down => ((coord.x + 1)..dim)
            .take_while(|&x| grid.is_passable(Coord::new(x, coord.y)))
            .count(),
        Direction::Right => ((coord.y + 1)..dim)
            .take_while(|&y| grid.is_passable(Coord::new(coord.x, y)))
            .count(),
        Direction::Up | Direction::Left => 0,
    } as i64;

    if steps == to_goal {
        return to_goal;
    }

    let back = (to_goal - steps - remaining) * 10;
    let longer = if steps >= remaining {
        (steps - remaining) / 2
    } else {
        0
    };
    back + open + longer
}

#[derive(Debug)]
struct Ranked {
    score: i64,
    seq: u64,
    node: Node,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // Max-heap on score; among equal scores the lower sequence wins.
        self.score
            .cmp(&other.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority fringe scoring each pushed point with [`heuristic`].
#[derive(Debug)]
pub struct ScoredFringe<'g> {
    grid: &'g Grid,
    heap: BinaryHeap<Ranked>,
    seq: u64,
}

impl<'g> ScoredFringe<'g> {
    /// An empty fringe scoring against `grid`.
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl Fringe for ScoredFringe<'_> {
    fn push(&mut self, node: Node) {
        let score = match node.dir {
            Some(dir) => heuristic(self.grid, dir, node.coord, node.steps),
            None => 0,
        };
        self.heap.push(Ranked {
            score,
            seq: self.seq,
            node,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|r| r.node)
    }
}

/// Best-first path from the grid's start to its goal, if one exists.
pub fn best_first_path(grid: &Grid) -> Option<Path> {
    search(grid, grid.start(), grid.goal())
}

/// Best-first path between arbitrary endpoints, used for replanning from
/// the agent's current position.
///
/// Returns `Ok(None)` when `goal` is unreachable and
/// `Err(MazeError::UnreachableQuery)` when an endpoint is outside the grid.
pub fn best_first_path_between(
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
        debug!("[BestFirst] start {start} is blocked");
        return None;
    }
    let path = traverse(grid, start, goal, ScoredFringe::new(grid)).into_path();
    if path.is_none() {
        debug!("[BestFirst] no path {start} -> {goal}");
    }
    path
}
