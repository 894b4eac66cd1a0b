//! Strategy 3: keep a committed plan and reroute around fire that could
//! reach a planned cell before the agent does.
//!
//! After every fire step the remaining plan is scanned:
//!
//! - a planned cell that is already burning forces an immediate reroute,
//!   and the run is stuck if none exists;
//! - a planned cell `j` hops ahead is threatened if some fire cell within
//!   `danger_radius` can reach it in at most `j` fire steps. The fire's
//!   route is blocked out on a scratch grid and a reroute is tried there.
//!   A reroute is adopted if found, otherwise the plan is kept.
//!
//! Fire routes behind adopted reroutes stay blocked in later scratch grids
//! for the rest of the run.

use crate::config::StrategyConfig;
use crate::episode::Episode;
use crate::run::{Outcome, StrategyRun};
use firemaze_core::{Cell, Coord, Grid, MazeError, Path};
use firemaze_search::fire_distance;
use indexmap::IndexSet;
use log::trace;
use rand::Rng;

/// Follow a committed plan, rerouting when fire threatens it.
pub fn run<R: Rng + ?Sized>(
    grid: &Grid,
    q: f64,
    config: &StrategyConfig,
    rng: &mut R,
) -> Result<StrategyRun, MazeError> {
    let mut ep = Episode::new("RiskAware", grid, q, config, rng)?;
    if ep.burning() {
        return Ok(ep.finish(Outcome::Death));
    }
    let Some(mut plan) = ep.plan()? else {
        return Ok(ep.finish(Outcome::Stuck));
    };
    // Index of the agent's cell within `plan`.
    let mut at = 0;
    let mut avoid: IndexSet<Coord> = IndexSet::new();

    loop {
        if ep.at_goal() {
            return Ok(ep.finish(Outcome::Success));
        }
        if ep.out_of_rounds() {
            return Ok(ep.finish(Outcome::Stuck));
        }
        let Some(next) = plan.get(at + 1) else {
            return Ok(ep.finish(Outcome::Stuck));
        };
        ep.step_to(next);
        at += 1;
        if ep.burning() {
            return Ok(ep.finish(Outcome::Death));
        }
        if ep.at_goal() {
            return Ok(ep.finish(Outcome::Success));
        }

        let ahead = &plan.coords()[at + 1..];
        if ahead.iter().any(|&c| ep.grid()[c].is_fire()) {
            trace!("[RiskAware] plan ahead of {} is burning", ep.pos());
            match ep.plan()? {
                Some(p) => {
                    plan = p;
                    at = 0;
                    continue;
                }
                None => return Ok(ep.finish(Outcome::Stuck)),
            }
        }

        if let Some((p, route)) = reroute_around_threats(&ep, ahead, &avoid, config)? {
            avoid.extend(route.into_coords());
            plan = p;
            at = 0;
        }
    }
}

/// Walk the cells ahead in order. For the first threatened cell that admits
/// a detour, return the detour and the fire route it avoids.
fn reroute_around_threats<R: Rng + ?Sized>(
    ep: &Episode<'_, R>,
    ahead: &[Coord],
    avoid: &IndexSet<Coord>,
    config: &StrategyConfig,
) -> Result<Option<(Path, Path)>, MazeError> {
    let grid = ep.grid();
    let fires = grid.fire_cells();
    if fires.is_empty() {
        return Ok(None);
    }

    for (j, &cell) in ahead.iter().enumerate() {
        let eta = j + 1;
        let route = fires
            .iter()
            .filter(|f| f.manhattan(cell) <= config.danger_radius)
            .find_map(|&f| fire_distance(grid, f, cell, eta, config.reach_budget));
        let Some(route) = route else {
            continue;
        };

        let mut scratch = grid.clone();
        let mut blocked = 0;
        for &c in avoid.iter().chain(route.iter()) {
            if c != ep.pos() && c != grid.goal() && scratch[c] == Cell::Free {
                scratch[c] = Cell::Fire;
                blocked += 1;
            }
        }
        trace!(
            "[RiskAware] {cell} threatened within {eta} step(s), blocking {blocked} cell(s)"
        );
        if let Some(p) = ep.plan_on(&scratch)? {
            return Ok(Some((p, route)));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::commit;
    use firemaze_test_utils::{open_grid, parse_grid, rng};
    use rand::rngs::mock::StepRng;

    fn c(x: usize, y: usize) -> Coord {
        Coord::new(x, y)
    }

    // ── Scenarios ───────────────────────────────────────────────

    #[test]
    fn follows_the_plan_on_a_fire_free_grid() {
        let g = open_grid(5);
        let run = run(&g, 0.3, &StrategyConfig::default(), &mut rng(9)).unwrap();
        assert_eq!(run.outcome, Outcome::Success);
        assert_eq!(run.rounds, 8);
    }

    #[test]
    fn detours_around_a_static_threat() {
        // q = 0 so the fire never moves, but (2,2) on the planned route
        // lies within reach of (4,3) and the agent steers along row 1.
        let g = parse_grid(
            "
            .....
            .....
            .....
            .....
            ...F.
            ",
        );
        let run = run(&g, 0.0, &StrategyConfig::default(), &mut rng(0)).unwrap();
        assert_eq!(run.outcome, Outcome::Success);
        assert_eq!(
            run.trace,
            vec![
                c(0, 0),
                c(1, 0),
                c(1, 1),
                c(1, 2),
                c(1, 3),
                c(1, 4),
                c(2, 4),
                c(3, 4),
                c(4, 4)
            ]
        );
        assert!(!run.trace.contains(&c(2, 2)));
    }

    #[test]
    fn does_not_flip_between_two_threatened_detours() {
        // Both ways around the fire are threatened. Without remembering
        // the first detour the agent bounces between (1,0) and (2,0).
        let g = parse_grid(
            "
            ..#.
            ....
            .F..
            ....
            ",
        );
        let run = run(&g, 0.0, &StrategyConfig::default(), &mut rng(0)).unwrap();
        assert_eq!(run.outcome, Outcome::Success);
        assert!(run.rounds <= 8, "took {} rounds", run.rounds);
    }

    #[test]
    fn keeps_the_plan_when_no_detour_exists() {
        // (0,3) and (1,4) are both within reach of the fire, but row 0 and
        // column 4 are the only way out, so the agent accepts the risk.
        let g = parse_grid(
            "
            .....
            ###F.
            ####.
            ####.
            ####.
            ",
        );
        let run = run(&g, 0.0, &StrategyConfig::default(), &mut rng(0)).unwrap();
        assert_eq!(run.outcome, Outcome::Success);
        assert_eq!(
            run.trace,
            vec![
                c(0, 0),
                c(0, 1),
                c(0, 2),
                c(0, 3),
                c(0, 4),
                c(1, 4),
                c(2, 4),
                c(3, 4),
                c(4, 4)
            ]
        );
    }

    #[test]
    fn reroutes_when_a_planned_cell_ignites() {
        // Every draw is 0.6 and q = 0.5, so only cells with two burning
        // neighbours ignite. (2,2) sits between the two fires and catches
        // on the first step; the committed agent walks into it.
        let g = parse_grid(
            "
            .....
            ..F..
            .....
            ..F..
            .....
            ",
        );
        let cfg = StrategyConfig {
            danger_radius: 0,
            ..Default::default()
        };
        let always = || StepRng::new(u64::MAX / 5 * 3, 0);

        let committed = commit::run(&g, 0.5, &cfg, &mut always()).unwrap();
        assert_eq!(committed.outcome, Outcome::Death);
        assert_eq!(committed.final_position(), c(2, 2));

        let run = run(&g, 0.5, &cfg, &mut always()).unwrap();
        assert_eq!(run.outcome, Outcome::Success);
        assert_eq!(
            run.trace,
            vec![
                c(0, 0),
                c(1, 0),
                c(2, 0),
                c(3, 0),
                c(4, 0),
                c(4, 1),
                c(4, 2),
                c(4, 3),
                c(4, 4)
            ]
        );
        assert!(!run.trace.contains(&c(2, 2)));
    }

    #[test]
    fn zero_danger_radius_keeps_the_original_plan() {
        let g = parse_grid(
            "
            .....
            .....
            .....
            .....
            ...F.
            ",
        );
        let cfg = StrategyConfig {
            danger_radius: 0,
            ..Default::default()
        };
        let run = run(&g, 0.0, &cfg, &mut rng(0)).unwrap();
        assert_eq!(run.outcome, Outcome::Success);
        assert!(run.trace.contains(&c(2, 2)));
    }

    #[test]
    fn stuck_when_burning_plan_has_no_detour() {
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
    }

    #[test]
    fn burning_start_is_immediate_death() {
        let g = parse_grid(
            "
            F..
            ...
            ...
            ",
        );
        let run = run(&g, 0.5, &StrategyConfig::default(), &mut rng(0)).unwrap();
        assert_eq!(run.outcome, Outcome::Death);
        assert_eq!(run.rounds, 0);
        assert_eq!(run.grid[c(0, 0)], Cell::BurnedOnExit);
    }
}
