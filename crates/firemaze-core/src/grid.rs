//! The square N×N cell matrix with a fixed 4-connected neighbourhood.

use crate::cell::Cell;
use crate::coord::{Coord, Direction};
use crate::error::MazeError;
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// An N×N matrix of [`Cell`]s stored row-major.
///
/// Grids are value objects. Operations that advance fire or annotate a
/// path take `&Grid` and return a fresh `Grid`, so successive time steps
/// never alias each other. The start is `(0, 0)` and the goal is
/// `(N-1, N-1)`.
///
/// Indexing with a [`Coord`] panics when the coordinate is out of bounds;
/// use [`get`](Self::get) for a checked lookup.
///
/// # Examples
///
/// ```
/// use firemaze_core::{Cell, Coord, Grid};
///
/// let grid = Grid::new(3).unwrap();
/// assert_eq!(grid.goal(), Coord::new(2, 2));
/// assert_eq!(grid[Coord::new(1, 1)], Cell::Free);
///
/// // Corner cells have two neighbours.
/// assert_eq!(grid.neighbours(grid.start()).len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    dim: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Smallest accepted dimension.
    pub const MIN_DIM: usize = 1;

    /// Create an all-`Free` grid of `dim * dim` cells.
    ///
    /// Returns `Err(MazeError::InvalidDimension)` if `dim` is 0.
    pub fn new(dim: usize) -> Result<Self, MazeError> {
        if dim < Self::MIN_DIM {
            return Err(MazeError::InvalidDimension {
                dim,
                min: Self::MIN_DIM,
            });
        }
        Ok(Self {
            dim,
            cells: vec![Cell::Free; dim * dim],
        })
    }

    /// Build a grid from row-major cells.
    ///
    /// Returns `Err(MazeError::InvalidDimension)` if `dim` is 0 or
    /// `InvalidConfig` if `cells.len() != dim * dim`.
    pub fn from_cells(dim: usize, cells: Vec<Cell>) -> Result<Self, MazeError> {
        if dim < Self::MIN_DIM {
            return Err(MazeError::InvalidDimension {
                dim,
                min: Self::MIN_DIM,
            });
        }
        if cells.len() != dim * dim {
            return Err(MazeError::InvalidConfig {
                reason: format!(
                    "expected {} cells for a {dim}x{dim} grid, got {}",
                    dim * dim,
                    cells.len()
                ),
            });
        }
        Ok(Self { dim, cells })
    }

    /// Side length N.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The agent's starting cell, `(0, 0)`.
    pub fn start(&self) -> Coord {
        Coord::new(0, 0)
    }

    /// The exit, `(N-1, N-1)`.
    pub fn goal(&self) -> Coord {
        Coord::new(self.dim - 1, self.dim - 1)
    }

    /// `true` if `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.dim && coord.y < self.dim
    }

    /// Check that `coord` lies inside the grid.
    pub fn check(&self, coord: Coord) -> Result<Coord, MazeError> {
        if self.contains(coord) {
            Ok(coord)
        } else {
            Err(MazeError::UnreachableQuery {
                coord,
                dim: self.dim,
            })
        }
    }

    /// Checked cell lookup.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.contains(coord)
            .then(|| self.cells[self.index_of(coord)])
    }

    /// `true` if `coord` is in bounds and neither `Obstacle` nor `Fire`.
    pub fn is_passable(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(|c| !c.is_blocked())
    }

    /// A copy of this grid with one cell replaced.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    pub fn with_cell(&self, coord: Coord, cell: Cell) -> Grid {
        let mut next = self.clone();
        next[coord] = cell;
        next
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::new(i / dim, i % dim), cell))
    }

    /// Coordinates of every burning cell, in row-major order.
    pub fn fire_cells(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, cell)| cell.is_fire())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// Number of cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// In-bounds 4-connected neighbours of `coord` in expansion order
    /// (up, down, left, right).
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[(Direction, Coord); 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| coord.step(dir, self.dim).map(|n| (dir, n)))
            .collect()
    }

    /// Neighbours of `coord` that the agent may enter.
    pub fn passable_neighbours(&self, coord: Coord) -> SmallVec<[(Direction, Coord); 4]> {
        self.neighbours(coord)
            .into_iter()
            .filter(|&(_, n)| !self[n].is_blocked())
            .collect()
    }

    /// Number of 4-connected neighbours of `coord` that are on fire.
    pub fn fire_neighbours(&self, coord: Coord) -> usize {
        self.neighbours(coord)
            .iter()
            .filter(|&&(_, n)| self[n].is_fire())
            .count()
    }

    /// The matrix of legacy cell codes (see [`Cell::code`]), one row per `x`.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.dim)
            .map(|row| row.iter().map(|c| c.code()).collect())
            .collect()
    }

    fn index_of(&self, coord: Coord) -> usize {
        coord.x * self.dim + coord.y
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coord) -> &Cell {
        assert!(
            self.contains(coord),
            "coordinate {coord} out of bounds for {0}x{0} grid",
            self.dim
        );
        &self.cells[self.index_of(coord)]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut Cell {
        assert!(
            self.contains(coord),
            "coordinate {coord} out of bounds for {0}x{0} grid",
            self.dim
        );
        let i = self.index_of(coord);
        &mut self.cells[i]
    }
}
