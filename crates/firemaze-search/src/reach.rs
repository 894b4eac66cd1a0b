//! Bounded breadth-first estimate of how far fire travels towards a cell.
//!
//! Fire spreads through every cell that is not an `Obstacle`, so unlike the
//! agent searches this walk crosses both `Free` and `Fire` cells. The
//! search gives up after `max_depth` hops or `budget` expanded cells,
//! whichever comes first, so its running time is bounded independently of
//! grid size.

use firemaze_core::{Cell, Coord, Grid, Path};
use log::trace;
use std::collections::VecDeque;

/// Shortest fire route from `from` to `to`, if one exists within
/// `max_depth` hops and `budget` cell expansions.
///
/// Returns `None` if either coordinate is outside the grid, the target is
/// an obstacle, or a limit is hit first.
pub fn fire_distance(
    grid: &Grid,
    from: Coord,
    to: Coord,
    max_depth: usize,
    budget: usize,
) -> Option<Path> {
    if !grid.contains(from) || !grid.contains(to) || grid[to] == Cell::Obstacle {
        return None;
    }
    let dim = grid.dim();
    let idx = |c: Coord| c.x * dim + c.y;

    let mut parents: Vec<Option<Coord>> = vec![None; dim * dim];
    let mut visited = vec![false; dim * dim];
    let mut queue = VecDeque::new();
    let mut expanded = 0usize;

    visited[idx(from)] = true;
    queue.push_back((from, 0usize));

    while let Some((cur, depth)) = queue.pop_front() {
        if cur == to {
            let mut coords = vec![cur];
            let mut c = cur;
            while let Some(prev) = parents[idx(c)] {
                coords.push(prev);
                c = prev;
            }
            coords.reverse();
            return Path::new(coords);
        }
        if depth >= max_depth {
            continue;
        }
        expanded += 1;
        if expanded > budget {
            trace!("[FireReach] budget {budget} exhausted between {from} -> {to}");
            return None;
        }
        for (_, next) in grid.neighbours(cur) {
            let j = idx(next);
            if visited[j] || grid[next] == Cell::Obstacle {
                continue;
            }
            visited[j] = true;
            parents[j] = Some(cur);
            queue.push_back((next, depth + 1));
        }
    }
    None
}
