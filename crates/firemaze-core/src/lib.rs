//! Core types for the firemaze simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! square lattice every other crate works on: cell states, coordinates,
//! the value-semantics [`Grid`], search [`Path`]s, and the shared
//! [`MazeError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;
pub mod grid;
pub mod path;

pub use cell::Cell;
pub use coord::{Coord, Direction};
pub use error::MazeError;
pub use grid::Grid;
pub use path::{annotate_path, Path};

/// Returns `Ok(value)` if `value` is a probability in `[0, 1]`.
///
/// NaN and infinities are rejected. `name` identifies the parameter in the
/// resulting [`MazeError::InvalidProbability`].
pub fn check_probability(name: &'static str, value: f64) -> Result<f64, MazeError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(MazeError::InvalidProbability { name, value })
    }
}
