//! Result and trace types for the Bellman-Ford engine.

use std::collections::BTreeMap;

/// State snapshot taken after each relaxation pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BellmanFordPass {
    /// 1-based pass index.
    pub pass: usize,

    /// Tentative distance of every node after this pass.
    pub distances: BTreeMap<usize, f64>,

    /// Number of relaxations performed during this pass.
    pub relaxations: usize,

    /// The updates applied, as `(u, v, new_distance)` in application order.
    pub updates: Vec<(usize, usize, f64)>,
}

/// Outcome of a Bellman-Ford run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BellmanFordResult {
    /// Shortest path from source to target, if one exists and no
    /// reachable negative cycle was found.
    pub path: Option<Vec<usize>>,

    /// Total weight of `path`, or `f64::INFINITY` on failure.
    pub distance: f64,

    /// Number of relaxation passes executed (equals `history.len()`).
    pub iterations: usize,

    /// Whether a shortest path was established.
    pub success: bool,

    /// Whether a negative-total cycle reachable from the source was
    /// detected. When true, shortest-path distance is undefined and
    /// the run reports failure.
    pub has_negative_cycle: bool,

    /// Human-readable diagnostic.
    pub message: String,

    /// One snapshot per executed pass, in pass order.
    pub history: Vec<BellmanFordPass>,
}
