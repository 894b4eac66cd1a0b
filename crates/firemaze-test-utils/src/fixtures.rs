//! Hand-drawn grid fixtures.
//!
//! Rows are separated by newlines; surrounding whitespace is ignored.
//!
//! | Char | Cell |
//! |------|------|
//! | `.`  | Free |
//! | `#`  | Obstacle |
//! | `F`  | Fire |

use firemaze_core::{Cell, Coord, Grid};

/// Parse an ASCII drawing into a [`Grid`].
///
/// Panics on a non-square drawing or an unknown character.
pub fn parse_grid(drawing: &str) -> Grid {
    let rows: Vec<&str> = drawing
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let dim = rows.len();
    let mut cells = Vec::with_capacity(dim * dim);
    for row in &rows {
        assert_eq!(row.chars().count(), dim, "row {row:?} is not {dim} wide");
        for ch in row.chars() {
            cells.push(match ch {
                '.' => Cell::Free,
                '#' => Cell::Obstacle,
                'F' => Cell::Fire,
                other => panic!("unknown grid character {other:?}"),
            });
        }
    }
    Grid::from_cells(dim, cells).expect("drawing forms a valid grid")
}

/// An all-`Free` grid.
pub fn open_grid(dim: usize) -> Grid {
    Grid::new(dim).expect("dim >= 1")
}

/// A grid whose only open cells are row 0 and the last column, forming a
/// single L-shaped corridor from start to goal.
pub fn corridor(dim: usize) -> Grid {
    let mut g = open_grid(dim);
    for x in 1..dim {
        for y in 0..dim - 1 {
            g[Coord::new(x, y)] = Cell::Obstacle;
        }
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_symbols() {
        let g = parse_grid(
            "
            .#
            F.
            ",
        );
        assert_eq!(g.dim(), 2);
        assert_eq!(g[Coord::new(0, 1)], Cell::Obstacle);
        assert_eq!(g[Coord::new(1, 0)], Cell::Fire);
    }

    #[test]
    #[should_panic(expected = "not 3 wide")]
    fn parse_rejects_ragged_rows() {
        parse_grid("...\n..\n...");
    }

    #[test]
    fn corridor_has_expected_open_cells() {
        let g = corridor(4);
        assert_eq!(g.count(Cell::Free), 7);
        assert!(g.is_passable(g.goal()));
    }
}
