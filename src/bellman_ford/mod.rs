//! Bellman-Ford algorithm.
//!
//! Relaxation-based single-pair shortest-path search with
//! per-pass state tracking. Handles negative edge weights correctly
//! and detects negative cycles reachable from the source, making it
//! the authoritative engine when weights may be negative.
//!
//! Runs at most `V - 1` relaxation passes plus one verification pass,
//! stopping early once a pass makes no update.
//!
//! # References
//!
//! - Bellman (1958), "On a routing problem"
//! - Ford (1956), "Network Flow Theory"

mod runner;
mod types;

pub use runner::shortest_path;
pub use types::{BellmanFordPass, BellmanFordResult};
