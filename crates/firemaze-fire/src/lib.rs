//! The two stochastic processes of a firemaze run.
//!
//! - [`generate`]: obstacle grids, and fire grids rejection-sampled until
//!   the agent can reach the exit and the fire can reach the agent
//! - [`spread`]: one simultaneous, probabilistic fire step
//!
//! Neither process owns a random source. Every call takes an explicit
//! `&mut R where R: Rng`, so a run seeded with [`seeded_rng`] is fully
//! reproducible.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod generate;
pub mod spread;

pub use config::GenerationConfig;
pub use generate::{generate_fire_grid, generate_obstacle_grid, sample_fire_grid};
pub use spread::{advance_fire, ignition_probability, FireSpread};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The canonical deterministic random source: ChaCha8 seeded from `seed`.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
