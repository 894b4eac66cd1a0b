//! Per-run agent state shared by the strategies.

use crate::config::{Planner, StrategyConfig};
use crate::run::{Outcome, StrategyRun};
use firemaze_core::{Cell, Coord, Grid, MazeError, Path};
use firemaze_fire::FireSpread;
use log::{debug, trace};
use rand::Rng;

/// The agent plus the working grid it owns for the duration of one run.
pub(crate) struct Episode<'r, R: Rng + ?Sized> {
    name: &'static str,
    grid: Grid,
    spread: FireSpread,
    planner: Planner,
    rng: &'r mut R,
    pos: Coord,
    trace: Vec<Coord>,
    rounds: usize,
    max_rounds: usize,
}

impl<'r, R: Rng + ?Sized> Episode<'r, R> {
    pub(crate) fn new(
        name: &'static str,
        grid: &Grid,
        q: f64,
        config: &StrategyConfig,
        rng: &'r mut R,
    ) -> Result<Self, MazeError> {
        let spread = FireSpread::new(q)?;
        let start = grid.start();
        Ok(Self {
            name,
            grid: grid.clone(),
            spread,
            planner: config.planner,
            rng,
            pos: start,
            trace: vec![start],
            rounds: 0,
            max_rounds: config.resolved_max_rounds(grid.dim()),
        })
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn pos(&self) -> Coord {
        self.pos
    }

    pub(crate) fn at_goal(&self) -> bool {
        self.pos == self.grid.goal()
    }

    pub(crate) fn burning(&self) -> bool {
        self.grid[self.pos].is_fire()
    }

    pub(crate) fn out_of_rounds(&self) -> bool {
        self.rounds >= self.max_rounds
    }

    /// Plan from the agent's cell on the working grid.
    pub(crate) fn plan(&self) -> Result<Option<Path>, MazeError> {
        self.plan_on(&self.grid)
    }

    /// Plan from the agent's cell on an arbitrary (scratch) grid.
    pub(crate) fn plan_on(&self, grid: &Grid) -> Result<Option<Path>, MazeError> {
        self.planner.plan(grid, self.pos)
    }

    /// Move one hop to `next`, then advance the fire one step.
    pub(crate) fn step_to(&mut self, next: Coord) {
        debug_assert!(
            self.pos.is_adjacent(next),
            "{} -> {next} is not one hop",
            self.pos
        );
        self.pos = next;
        self.trace.push(next);
        self.grid = self.spread.step(&self.grid, &mut *self.rng);
        self.rounds += 1;
        trace!("[{}] round {} at {}", self.name, self.rounds, self.pos);
    }

    /// End the run, annotating the traversed cells on the working grid.
    pub(crate) fn finish(self, outcome: Outcome) -> StrategyRun {
        let mut grid = self.grid;
        for &c in &self.trace {
            grid[c] = Cell::ExitPath;
        }
        if outcome == Outcome::Death {
            grid[self.pos] = Cell::BurnedOnExit;
        }
        debug!(
            "[{}] {outcome} at {} after {} round(s)",
            self.name, self.pos, self.rounds
        );
        StrategyRun {
            grid,
            outcome,
            trace: self.trace,
            rounds: self.rounds,
        }
    }
}
