//! Search results: ordered, 4-connected coordinate sequences.

use crate::cell::Cell;
use crate::coord::Coord;
use crate::grid::Grid;

/// An ordered sequence of coordinates from a start to a goal.
///
/// Paths are only built by the search engine, which guarantees that
/// consecutive coordinates are adjacent and that no coordinate was blocked
/// in the grid the search ran on. A path always holds at least one
/// coordinate (start and goal coincide when it holds exactly one).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    coords: Vec<Coord>,
}

impl Path {
    /// Wrap a non-empty coordinate sequence.
    ///
    /// Returns `None` for an empty sequence.
    pub fn new(coords: Vec<Coord>) -> Option<Self> {
        (!coords.is_empty()).then_some(Self { coords })
    }

    /// First coordinate.
    pub fn start(&self) -> Coord {
        self.coords[0]
    }

    /// Last coordinate.
    pub fn goal(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    /// Number of moves, one less than the number of coordinates.
    pub fn hops(&self) -> usize {
        self.coords.len() - 1
    }

    /// Number of coordinates, including both endpoints.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always `false`: a path holds at least its start.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The coordinates in travel order.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Coordinate at position `i`, if any.
    pub fn get(&self, i: usize) -> Option<Coord> {
        self.coords.get(i).copied()
    }

    /// `true` if the path visits `coord`.
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    /// Iterate the coordinates in travel order.
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.coords.iter()
    }

    /// `true` if the path is 4-connected and avoids every blocked cell of
    /// `grid`.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        self.coords.windows(2).all(|w| w[0].is_adjacent(w[1]))
            && self.coords.iter().all(|&c| grid.is_passable(c))
    }

    /// Consume the path, returning its coordinates.
    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

/// A copy of `grid` with every cell of `path` marked [`Cell::ExitPath`].
///
/// Used by renderers to show a search result; the input grid is untouched.
pub fn annotate_path(grid: &Grid, path: &Path) -> Grid {
    let mut out = grid.clone();
    for &c in path {
        if out.contains(c) {
            out[c] = Cell::ExitPath;
        }
    }
    out
}
