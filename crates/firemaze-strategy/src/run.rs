//! Strategy selection, outcomes, and the top-level entry point.

use crate::config::StrategyConfig;
use crate::strategies::{commit, replan, risk_aware};
use firemaze_core::{Coord, Grid, MazeError};
use rand::Rng;
use std::fmt;

/// A navigation policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Strategy 1: plan once and follow the plan regardless of the fire.
    CommitToPlan,
    /// Strategy 2: replan from the current cell after every fire step.
    Replan,
    /// Strategy 3: keep the plan, rerouting when fire threatens it.
    RiskAware,
}

impl Strategy {
    /// All strategies in numeric order.
    pub const ALL: [Strategy; 3] = [Strategy::CommitToPlan, Strategy::Replan, Strategy::RiskAware];

    /// The numeric selector (1, 2, or 3).
    pub fn number(self) -> u8 {
        match self {
            Strategy::CommitToPlan => 1,
            Strategy::Replan => 2,
            Strategy::RiskAware => 3,
        }
    }
}

impl TryFrom<u8> for Strategy {
    type Error = MazeError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Strategy::CommitToPlan),
            2 => Ok(Strategy::Replan),
            3 => Ok(Strategy::RiskAware),
            other => Err(MazeError::InvalidConfig {
                reason: format!("unknown strategy {other}, expected 1, 2, or 3"),
            }),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "strategy {}", self.number())
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The agent reached the goal.
    Success,
    /// The agent's cell caught fire.
    Death,
    /// No route to the goal remained, or the round cap was hit.
    Stuck,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Success => "success",
            Outcome::Death => "death",
            Outcome::Stuck => "stuck",
        };
        f.write_str(s)
    }
}

/// The result of one strategy run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StrategyRun {
    /// Final working grid with the traversed cells marked `ExitPath` and,
    /// on death, the final cell marked `BurnedOnExit`.
    pub grid: Grid,
    /// How the run ended.
    pub outcome: Outcome,
    /// Cells the agent occupied, in order, starting with the start cell.
    pub trace: Vec<Coord>,
    /// Number of fire steps performed.
    pub rounds: usize,
}

impl StrategyRun {
    /// The cell the agent ended on.
    pub fn final_position(&self) -> Coord {
        self.trace[self.trace.len() - 1]
    }
}

/// Run `strategy` on a private copy of `grid` with flammability `q`.
///
/// `grid` is left untouched. All fire steps draw from `rng`.
///
/// # Errors
///
/// `InvalidProbability` if `q` is outside `[0, 1]`; `InvalidConfig` if
/// `config` fails validation.
pub fn run_strategy<R: Rng + ?Sized>(
    strategy: Strategy,
    grid: &Grid,
    q: f64,
    config: &StrategyConfig,
    rng: &mut R,
) -> Result<StrategyRun, MazeError> {
    config.validate()?;
    match strategy {
        Strategy::CommitToPlan => commit::run(grid, q, config, rng),
        Strategy::Replan => replan::run(grid, q, config, rng),
        Strategy::RiskAware => risk_aware::run(grid, q, config, rng),
    }
}

/// [`run_strategy`] selected by its numeric label (1, 2, or 3).
///
/// # Errors
///
/// `InvalidConfig` for any other selector, plus the errors of
/// [`run_strategy`].
pub fn run_numbered_strategy<R: Rng + ?Sized>(
    n: u8,
    grid: &Grid,
    q: f64,
    config: &StrategyConfig,
    rng: &mut R,
) -> Result<StrategyRun, MazeError> {
    run_strategy(Strategy::try_from(n)?, grid, q, config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use firemaze_test_utils::{open_grid, rng};

    #[test]
    fn numeric_selector_round_trips() {
        for s in Strategy::ALL {
            assert_eq!(Strategy::try_from(s.number()).unwrap(), s);
        }
        assert!(Strategy::try_from(0).is_err());
        assert!(Strategy::try_from(4).is_err());
    }

    #[test]
    fn bad_flammability_is_rejected_for_every_strategy() {
        let g = open_grid(3);
        for s in Strategy::ALL {
            assert!(matches!(
                run_strategy(s, &g, 1.5, &StrategyConfig::default(), &mut rng(0)),
                Err(MazeError::InvalidProbability { name: "q", .. })
            ));
        }
    }

    #[test]
    fn bad_config_is_rejected() {
        let cfg = StrategyConfig {
            reach_budget: 0,
            ..Default::default()
        };
        assert!(run_strategy(Strategy::RiskAware, &open_grid(3), 0.1, &cfg, &mut rng(0)).is_err());
    }

    #[test]
    fn numbered_entry_point_matches_enum_entry_point() {
        let g = open_grid(4);
        let cfg = StrategyConfig::default();
        for s in Strategy::ALL {
            let a = run_numbered_strategy(s.number(), &g, 0.0, &cfg, &mut rng(5)).unwrap();
            let b = run_strategy(s, &g, 0.0, &cfg, &mut rng(5)).unwrap();
            assert_eq!(a, b);
        }
        assert!(matches!(
            run_numbered_strategy(7, &g, 0.0, &cfg, &mut rng(5)),
            Err(MazeError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn display() {
        assert_eq!(Strategy::Replan.to_string(), "strategy 2");
        assert_eq!(Outcome::Death.to_string(), "death");
    }
}
