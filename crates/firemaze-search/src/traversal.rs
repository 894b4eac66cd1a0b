//! The fringe-driven traversal shared by all three searches.
//!
//! A point is closed the first time it is popped. Later copies of a closed
//! point still sitting in the fringe are discarded when popped, so each
//! cell is expanded at most once and predecessor links always follow the
//! first expansion.

use firemaze_core::{Coord, Direction, Grid, Path};

/// A fringe entry: a coordinate plus the transient search state that is
/// only meaningful inside one traversal.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    /// Position on the grid.
    pub coord: Coord,
    /// The expanded point this node was generated from (`None` for the root).
    pub parent: Option<Coord>,
    /// Direction of the move from `parent` (`None` for the root).
    pub dir: Option<Direction>,
    /// Cumulative step count from the search start.
    pub steps: usize,
}

impl Node {
    /// The root of a search.
    pub fn root(coord: Coord) -> Self {
        Self {
            coord,
            parent: None,
            dir: None,
            steps: 0,
        }
    }

    /// The node reached by moving from `self` in `dir` to `coord`.
    pub fn child(&self, dir: Direction, coord: Coord) -> Self {
        Self {
            coord,
            parent: Some(self.coord),
            dir: Some(dir),
            steps: self.steps + 1,
        }
    }
}

/// The frontier data structure that orders expansion.
pub trait Fringe {
    /// Add a node to the frontier.
    fn push(&mut self, node: Node);

    /// Remove the next node to expand, or `None` when exhausted.
    fn pop(&mut self) -> Option<Node>;
}

/// What a traversal learned about the grid.
#[derive(Debug)]
pub struct Traversal {
    dim: usize,
    goal: Coord,
    reached: bool,
    parents: Vec<Option<Coord>>,
    enqueued: usize,
}

impl Traversal {
    /// `true` if the goal was popped from the fringe.
    pub fn reached(&self) -> bool {
        self.reached
    }

    /// Number of distinct cells pushed to the fringe, start included.
    pub fn enqueued(&self) -> usize {
        self.enqueued
    }

    /// Walk predecessor links back from the goal and return the path in
    /// travel order, or `None` if the goal was never reached.
    pub fn into_path(self) -> Option<Path> {
        if !self.reached {
            return None;
        }
        let mut coords = vec![self.goal];
        let mut cur = self.goal;
        while let Some(prev) = self.parents[cur.x * self.dim + cur.y] {
            coords.push(prev);
            cur = prev;
        }
        coords.reverse();
        Path::new(coords)
    }
}

/// Run a traversal from `start` to `goal` driven by `fringe`.
///
/// Both coordinates must already be known to lie inside `grid`. The start
/// cell itself is not checked for passability; every other cell entered
/// must be neither `Obstacle` nor `Fire`.
pub fn traverse<F: Fringe>(grid: &Grid, start: Coord, goal: Coord, mut fringe: F) -> Traversal {
    let dim = grid.dim();
    let idx = |c: Coord| c.x * dim + c.y;

    let mut closed = vec![false; dim * dim];
    let mut pushed = vec![false; dim * dim];
    let mut parents: Vec<Option<Coord>> = vec![None; dim * dim];
    let mut enqueued = 1;
    let mut reached = false;

    pushed[idx(start)] = true;
    fringe.push(Node::root(start));

    while let Some(node) = fringe.pop() {
        let i = idx(node.coord);
        if closed[i] {
            continue;
        }
        closed[i] = true;
        parents[i] = node.parent;

        if node.coord == goal {
            reached = true;
            break;
        }

        for (dir, next) in grid.passable_neighbours(node.coord) {
            let j = idx(next);
            if closed[j] {
                continue;
            }
            if !pushed[j] {
                pushed[j] = true;
                enqueued += 1;
            }
            fringe.push(node.child(dir, next));
        }
    }

    Traversal {
        dim,
        goal,
        reached,
        parents,
        enqueued,
    }
}
