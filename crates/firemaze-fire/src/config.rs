//! Generation limits.

use firemaze_core::MazeError;

/// Bounds for the rejection-sampling loop of
/// [`generate_fire_grid`](crate::generate_fire_grid).
///
/// For dense obstacle probabilities valid fire grids become rare, so the
/// loop is capped rather than left to run indefinitely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Maximum number of candidate grids to sample. Default: 10 000.
    pub max_attempts: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
        }
    }
}

impl GenerationConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.max_attempts == 0 {
            return Err(MazeError::InvalidConfig {
                reason: "max_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
