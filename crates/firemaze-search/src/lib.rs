//! Graph search over firemaze grids.
//!
//! Three searches share one traversal skeleton ([`traversal`]) and differ
//! only in their fringe:
//!
//! - [`dfs`]: LIFO stack, reachability only
//! - [`bfs`]: FIFO queue, minimum-hop shortest paths
//! - [`best_first`]: priority fringe ordered by a hand-tuned heuristic;
//!   not cost-admissible and not guaranteed to be shortest
//!
//! Every search treats `Obstacle` and `Fire` as impassable. Closed-set
//! membership and predecessor links live in per-call arrays indexed by
//! coordinate, so nothing leaks between calls.
//!
//! [`reach`] adds the bounded breadth-first search used to estimate how far
//! fire has to travel to reach a cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod best_first;
pub mod bfs;
pub mod dfs;
pub mod reach;
pub mod traversal;

pub use algorithm::{explored_count, explored_count_between, Algorithm};
pub use best_first::{best_first_path, best_first_path_between, heuristic};
pub use bfs::{shortest_path, shortest_path_between};
pub use dfs::reachable;
pub use reach::fire_distance;
