//! Per-position cell state.

/// State of one grid position.
///
/// `Obstacle` and `Fire` are absorbing: once set they never revert.
/// `ExitPath` and `BurnedOnExit` only appear in annotated result grids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Open, traversable, and flammable.
    #[default]
    Free,
    /// Permanent wall placed at generation time.
    Obstacle,
    /// Burning. Impassable for the agent.
    Fire,
    /// The agent died on this cell.
    BurnedOnExit,
    /// The agent passed through this cell safely.
    ExitPath,
}

impl Cell {
    /// `true` for cells the agent cannot enter (`Obstacle` or `Fire`).
    pub fn is_blocked(self) -> bool {
        matches!(self, Cell::Obstacle | Cell::Fire)
    }

    /// `true` for `Fire`.
    pub fn is_fire(self) -> bool {
        self == Cell::Fire
    }

    /// Legacy numeric code used by external renderers.
    ///
    /// `0` free, `1` obstacle, `2` fire, `7` exit path, `9` burned on exit.
    pub fn code(self) -> u8 {
        match self {
            Cell::Free => 0,
            Cell::Obstacle => 1,
            Cell::Fire => 2,
            Cell::ExitPath => 7,
            Cell::BurnedOnExit => 9,
        }
    }
}
