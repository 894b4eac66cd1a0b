//! Strategy 2: replan from the agent's cell after every fire step.

use crate::config::StrategyConfig;
use crate::episode::Episode;
use crate::run::{Outcome, StrategyRun};
use firemaze_core::{Grid, MazeError};
use rand::Rng;

/// Recompute a route against the current fire every round and take its
/// first hop. Stuck as soon as no route remains.
pub fn run<R: Rng + ?Sized>(
    grid: &Grid,
    q: f64,
    config: &StrategyConfig,
    rng: &mut R,
) -> Result<StrategyRun, MazeError> {
    let mut ep = Episode::new("Replan", grid, q, config, rng)?;
    if ep.burning() {
        return Ok(ep.finish(Outcome::Death));
    }

    loop {
        if ep.at_goal() {
            return Ok(ep.finish(Outcome::Success));
        }
        if ep.out_of_rounds() {
            return Ok(ep.finish(Outcome::Stuck));
        }
        let next = match ep.plan()?.and_then(|p| p.get(1)) {
            Some(next) => next,
            None => return Ok(ep.finish(Outcome::Stuck)),
        };
        ep.step_to(next);
        if ep.burning() {
            return Ok(ep.finish(Outcome::Death));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firemaze_core::{Cell, Coord};
    use firemaze_test_utils::{open_grid, parse_grid, rng};

    fn c(x: usize, y: usize) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn open_grid_without_fire_succeeds_in_minimum_rounds() {
        for dim in 1..8 {
            let g = open_grid(dim);
            let run = run(&g, 0.0, &StrategyConfig::default(), &mut rng(3)).unwrap();
            assert_eq!(run.outcome, Outcome::Success, "dim {dim}");
            assert_eq!(run.rounds, 2 * (dim - 1), "dim {dim}");
        }
    }

    #[test]
    fn stuck_when_fire_seals_the_agent_in() {
        // Round 1 moves to (1,0) and the fire takes (1,1). Round 2 reroutes
        // down to (2,0), after which (1,0) and (2,1) are burning.
        let g = parse_grid(
            "
            .F.
            ...
            ...
            ",
        );
        let run = run(&g, 1.0, &StrategyConfig::default(), &mut rng(0)).unwrap();
        assert_eq!(run.outcome, Outcome::Stuck);
        assert_eq!(run.trace, vec![c(0, 0), c(1, 0), c(2, 0)]);
        assert_eq!(run.rounds, 2);
        assert_eq!(run.grid[c(2, 0)], Cell::ExitPath);
    }

    #[test]
    fn stuck_when_the_goal_ignites() {
        let g = parse_grid(
            "
            .....
            .....
            .....
            .....
            ...F.
            ",
        );
        let run = run(&g, 1.0, &StrategyConfig::default(), &mut rng(0)).unwrap();
        assert_eq!(run.outcome, Outcome::Stuck);
        assert_eq!(run.rounds, 1);
    }

    #[test]
    fn breadth_first_planner_is_honoured() {
        let cfg = StrategyConfig {
            planner: crate::Planner::BreadthFirst,
            ..Default::default()
        };
        let g = open_grid(4);
        let run = run(&g, 0.0, &cfg, &mut rng(0)).unwrap();
        assert_eq!(run.outcome, Outcome::Success);
        assert_eq!(run.rounds, 6);
    }
}
