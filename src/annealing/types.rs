//! Result and trace types for the annealing engine.

/// State snapshot taken at every optimization iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingStep {
    /// 1-based iteration index.
    pub iteration: usize,

    /// The current candidate path after this iteration's
    /// accept/reject decision.
    pub path: Vec<usize>,

    /// Energy of the current candidate.
    pub energy: f64,

    /// Temperature at which the decision was made (before cooling).
    pub temperature: f64,

    /// Whether the mutated candidate was accepted.
    pub accepted: bool,

    /// Whether the current candidate is a fully valid source-to-target
    /// path in the graph.
    pub valid: bool,
}

/// Outcome of an annealing run.
///
/// The search is probabilistic: `success` means the best candidate
/// found is a valid path, not that its distance is optimal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingResult {
    /// Best valid path found, if any.
    pub path: Option<Vec<usize>>,

    /// Exact summed edge weight of `path`, or `f64::INFINITY` when no
    /// valid path was found.
    pub distance: f64,

    /// Energy of the best candidate found, valid or not.
    pub energy: f64,

    /// Number of iterations executed (equals `history.len()`).
    pub iterations: usize,

    /// Whether the best candidate is a valid path.
    pub success: bool,

    /// 1-based iteration at which the best candidate last improved;
    /// 0 when the initial solution was never improved upon.
    pub convergence_iteration: usize,

    /// Human-readable diagnostic.
    pub message: String,

    /// One snapshot per iteration, in iteration order.
    pub history: Vec<AnnealingStep>,
}
