//! Dijkstra's algorithm.
//!
//! Greedy single-pair shortest-path search over non-negative edge
//! weights, with per-iteration state tracking. The search stops the
//! moment the target is finalized rather than computing a full
//! single-source tree.
//!
//! Negative weights are not rejected, but the greedy invariant breaks
//! down on them: the returned distance may be suboptimal and the
//! result message says so. Use [`crate::bellman_ford`] when negative
//! weights are possible.
//!
//! # References
//!
//! - Dijkstra (1959), "A note on two problems in connexion with graphs"

mod runner;
mod types;

pub use runner::shortest_path;
pub use types::{DijkstraResult, DijkstraStep};
