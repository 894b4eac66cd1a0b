//! One probabilistic fire step.
//!
//! A `Free` cell with `k` burning 4-neighbours ignites with probability
//! `1 - (1 - q)^k`. All ignitions in a step are sampled against the same
//! pre-step snapshot, so fire never cascades within a single step.
//! `Obstacle` never ignites and `Fire` never goes out.

use firemaze_core::{check_probability, Cell, Grid, MazeError};
use rand::Rng;

/// Probability that a cell with `burning_neighbours` burning neighbours
/// ignites this step, given flammability `q`.
pub fn ignition_probability(q: f64, burning_neighbours: usize) -> f64 {
    if burning_neighbours == 0 {
        return 0.0;
    }
    1.0 - (1.0 - q).powi(burning_neighbours as i32)
}

/// A validated fire-spread rule with flammability `q`.
///
/// # Examples
///
/// ```
/// use firemaze_core::{Cell, Coord, Grid};
/// use firemaze_fire::{seeded_rng, FireSpread};
///
/// let grid = Grid::new(3).unwrap().with_cell(Coord::new(0, 0), Cell::Fire);
/// let spread = FireSpread::new(1.0).unwrap();
/// let next = spread.step(&grid, &mut seeded_rng(0));
///
/// assert_eq!(next[Coord::new(0, 1)], Cell::Fire);
/// assert_eq!(next[Coord::new(1, 0)], Cell::Fire);
/// assert_eq!(next[Coord::new(2, 2)], Cell::Free);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireSpread {
    q: f64,
}

impl FireSpread {
    /// Create a spread rule. `q` must lie in `[0, 1]`.
    pub fn new(q: f64) -> Result<Self, MazeError> {
        Ok(Self {
            q: check_probability("q", q)?,
        })
    }

    /// Flammability.
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Advance `grid` by one time step, returning the new grid.
    ///
    /// The input is read as a snapshot and left untouched. A random number
    /// is drawn only for `Free` cells that have at least one burning
    /// neighbour, in row-major order.
    pub fn step<R: Rng + ?Sized>(&self, grid: &Grid, rng: &mut R) -> Grid {
        let mut next = grid.clone();
        if self.q == 0.0 {
            return next;
        }
        for (coord, cell) in grid.iter() {
            if cell != Cell::Free {
                continue;
            }
            let k = grid.fire_neighbours(coord);
            if k == 0 {
                continue;
            }
            if rng.gen::<f64>() < ignition_probability(self.q, k) {
                next[coord] = Cell::Fire;
            }
        }
        next
    }
}

/// Advance `grid` one fire step with flammability `q`.
///
/// Convenience wrapper around [`FireSpread`] for one-off calls.
pub fn advance_fire<R: Rng + ?Sized>(grid: &Grid, q: f64, rng: &mut R) -> Result<Grid, MazeError> {
    Ok(FireSpread::new(q)?.step(grid, rng))
}
