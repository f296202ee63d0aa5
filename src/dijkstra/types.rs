//! Result and trace types for the Dijkstra engine.

use std::collections::{BTreeMap, BTreeSet};

/// State snapshot taken each time a node is finalized.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DijkstraStep {
    /// 1-based finalization index.
    pub iteration: usize,

    /// The node finalized at this step.
    pub current: usize,

    /// Tentative distance of every node at this point.
    pub distances: BTreeMap<usize, f64>,

    /// Nodes finalized so far, including `current`.
    pub visited: BTreeSet<usize>,

    /// For each node currently reachable through the predecessor map,
    /// the tentative path from the source to it.
    pub tentative_paths: BTreeMap<usize, Vec<usize>>,
}

/// Outcome of a Dijkstra run.
///
/// Every outcome is encoded here; the engine never fails for
/// graph-domain conditions such as a missing path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DijkstraResult {
    /// Shortest path from source to target, if one was found.
    pub path: Option<Vec<usize>>,

    /// Total weight of `path`, or `f64::INFINITY` when no path exists.
    pub distance: f64,

    /// Number of nodes finalized (equals `history.len()`).
    pub iterations: usize,

    /// Whether the target was reached.
    pub success: bool,

    /// Human-readable diagnostic, including the negative-weight
    /// warning when applicable.
    pub message: String,

    /// One snapshot per finalized node, in finalization order.
    pub history: Vec<DijkstraStep>,
}
