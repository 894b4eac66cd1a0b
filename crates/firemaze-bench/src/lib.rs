//! Benchmark profiles for the firemaze crates.
//!
//! Provides pre-generated grids so the benches time search and strategy
//! work rather than rejection sampling:
//!
//! - [`reference_grid`]: 50x50 fire grid at obstacle density 0.3
//! - [`stress_grid`]: 200x200 fire grid at obstacle density 0.3
//! - [`grid_batch`]: a deterministic batch of fire grids for strategy
//!   comparisons

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use firemaze_core::{Grid, MazeError};
use firemaze_fire::{generate_fire_grid, seeded_rng, GenerationConfig};

/// Obstacle density shared by every profile.
pub const DENSITY: f64 = 0.3;

/// Build the reference profile: one 50x50 fire grid (2.5K cells).
pub fn reference_grid(seed: u64) -> Result<Grid, MazeError> {
    generate_fire_grid(50, DENSITY, &GenerationConfig::default(), &mut seeded_rng(seed))
}

/// Build the stress profile: one 200x200 fire grid (40K cells).
pub fn stress_grid(seed: u64) -> Result<Grid, MazeError> {
    generate_fire_grid(200, DENSITY, &GenerationConfig::default(), &mut seeded_rng(seed))
}

/// Generate `n` fire grids of side `dim` from a single seeded stream.
pub fn grid_batch(dim: usize, n: usize, seed: u64) -> Result<Vec<Grid>, MazeError> {
    let mut rng = seeded_rng(seed);
    let config = GenerationConfig::default();
    (0..n)
        .map(|_| generate_fire_grid(dim, DENSITY, &config, &mut rng))
        .collect()
}
