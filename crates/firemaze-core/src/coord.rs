//! Lattice coordinates and the four cardinal move directions.

use std::fmt;

/// A grid position. `x` is the row index and `y` the column index.
///
/// Coordinates carry no search state: two coordinates are equal exactly
/// when their `(x, y)` pairs are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, growing downwards.
    pub x: usize,
    /// Column index, growing to the right.
    pub y: usize,
}

impl Coord {
    /// Create a coordinate from a row and a column.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan (L1) distance, the hop count on an empty 4-connected grid.
    pub fn manhattan(self, other: Coord) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` if `other` differs by exactly one unit along exactly one axis.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }

    /// The neighbouring coordinate in `dir`, or `None` if it would leave
    /// a `dim x dim` grid.
    pub fn step(self, dir: Direction, dim: usize) -> Option<Coord> {
        let (x, y) = match dir {
            Direction::Up => (self.x.checked_sub(1)?, self.y),
            Direction::Down => (self.x + 1, self.y),
            Direction::Left => (self.x, self.y.checked_sub(1)?),
            Direction::Right => (self.x, self.y + 1),
        };
        (x < dim && y < dim).then_some(Coord { x, y })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal moves on the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All directions in neighbour-expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}
