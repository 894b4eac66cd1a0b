//! Error types shared by every firemaze crate.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Errors reported synchronously to callers of the firemaze operations.
///
/// A search that finds nothing is not an error; it returns `Ok(None)`.
#[derive(Clone, Debug, PartialEq)]
pub enum MazeError {
    /// The requested grid dimension is too small.
    InvalidDimension {
        /// The dimension that was requested.
        dim: usize,
        /// Smallest dimension the operation accepts.
        min: usize,
    },
    /// A probability parameter lies outside `[0, 1]` or is NaN.
    InvalidProbability {
        /// Parameter name (`"p"` for obstacle density, `"q"` for flammability).
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A start or goal coordinate lies outside the grid.
    UnreachableQuery {
        /// The offending coordinate.
        coord: Coord,
        /// Dimension of the grid that was queried.
        dim: usize,
    },
    /// Rejection sampling did not produce a valid grid in time.
    GenerationBudgetExceeded {
        /// Number of candidate grids that were generated and discarded.
        attempts: u32,
    },
    /// A configuration struct failed validation.
    InvalidConfig {
        /// Description of which invariant was violated.
        reason: String,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { dim, min } => {
                write!(f, "grid dimension {dim} is below the minimum of {min}")
            }
            Self::InvalidProbability { name, value } => {
                write!(f, "{name} must be a probability in [0, 1], got {value}")
            }
            Self::UnreachableQuery { coord, dim } => {
                write!(f, "coordinate {coord} is outside the {dim}x{dim} grid")
            }
            Self::GenerationBudgetExceeded { attempts } => {
                write!(f, "no valid grid found after {attempts} attempts")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for MazeError {}
