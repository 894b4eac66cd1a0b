//! Strategy 1: plan once, then walk the plan regardless of the fire.

use crate::config::StrategyConfig;
use crate::episode::Episode;
use crate::run::{Outcome, StrategyRun};
use firemaze_core::{Grid, MazeError};
use rand::Rng;

/// Plan from the start and follow the plan hop by hop.
///
/// The fire is never consulted after planning. The run ends in death as
/// soon as the agent's cell is burning after a fire step.
pub fn run<R: Rng + ?Sized>(
    grid: &Grid,
    q: f64,
    config: &StrategyConfig,
    rng: &mut R,
) -> Result<StrategyRun, MazeError> {
    let mut ep = Episode::new("Commit", grid, q, config, rng)?;
    if ep.burning() {
        return Ok(ep.finish(Outcome::Death));
    }
    let Some(plan) = ep.plan()? else {
        return Ok(ep.finish(Outcome::Stuck));
    };

    for &next in &plan.coords()[1..] {
        if ep.out_of_rounds() {
            return Ok(ep.finish(Outcome::Stuck));
        }
        ep.step_to(next);
        if ep.burning() {
            return Ok(ep.finish(Outcome::Death));
        }
    }
    Ok(ep.finish(Outcome::Success))
}
