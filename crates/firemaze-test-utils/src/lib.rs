//! Test utilities for firemaze development.
//!
//! Provides ASCII grid fixtures ([`parse_grid`]), a seeded RNG helper
//! ([`rng`]), and path assertions shared by the unit and integration tests
//! of every crate.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{corridor, open_grid, parse_grid};

use firemaze_core::{Coord, Grid, Path};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for reproducible tests.
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Panic unless `path` runs from `start` to `goal`, moves one unit along
/// one axis per hop, and never touches a blocked cell of `grid`.
pub fn assert_valid_path(grid: &Grid, path: &Path, start: Coord, goal: Coord) {
    assert_eq!(path.start(), start, "path must begin at the requested start");
    assert_eq!(path.goal(), goal, "path must end at the requested goal");
    for w in path.coords().windows(2) {
        assert!(
            w[0].is_adjacent(w[1]),
            "non-adjacent hop {} -> {} in {:?}",
            w[0],
            w[1],
            path.coords()
        );
    }
    for &c in path {
        assert!(grid.is_passable(c), "path crosses blocked cell {c}");
    }
}
