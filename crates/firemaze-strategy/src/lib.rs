//! Agent navigation strategies for escaping a burning grid.
//!
//! Every strategy runs the same round protocol on a private working copy
//! of the grid:
//!
//! 1. the agent moves one hop along its current plan,
//! 2. the fire advances one step,
//! 3. the agent dies if its cell is now burning, and escapes if it is on
//!    the goal.
//!
//! The strategies differ only in how they plan:
//!
//! | Strategy | Plans |
//! |----------|-------|
//! | [`Strategy::CommitToPlan`] | once, then ignores the fire |
//! | [`Strategy::Replan`] | from scratch after every fire step |
//! | [`Strategy::RiskAware`] | keeps its plan until fire threatens a cell ahead |

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
mod episode;
pub mod run;
pub mod strategies;

pub use config::{Planner, StrategyConfig};
pub use run::{run_numbered_strategy, run_strategy, Outcome, Strategy, StrategyRun};
