//! Dijkstra execution loop.

use super::types::{DijkstraResult, DijkstraStep};
use crate::graph::Graph;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

/// Priority-queue entry ordered for a min-heap on distance.
///
/// Distances are finite reals (sums of finite edge weights), so the
/// `partial_cmp` fallback to `Equal` is never exercised by NaN. Node
/// id is the secondary key only to make the ordering total; callers
/// must not rely on any particular pop order among equal distances.
#[derive(Debug, Clone, PartialEq)]
struct QueueEntry {
    distance: f64,
    node: usize,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs Dijkstra's algorithm from `source` to `target`.
///
/// Stops as soon as the target is finalized (early exit). If the
/// queue empties first, the result reports failure with an infinite
/// distance. Negative edge weights are tolerated but flagged in the
/// result message, since the greedy finalization order is only
/// correct for non-negative weights.
///
/// # Examples
///
/// ```
/// use pathlab::dijkstra;
/// use pathlab::graph::Graph;
///
/// let mut g = Graph::new(true);
/// g.add_edge(0, 1, 1.0);
/// g.add_edge(1, 2, 2.0);
/// g.add_edge(0, 2, 5.0);
///
/// let result = dijkstra::shortest_path(&g, 0, 2);
/// assert_eq!(result.path, Some(vec![0, 1, 2]));
/// assert_eq!(result.distance, 3.0);
/// ```
pub fn shortest_path(graph: &Graph, source: usize, target: usize) -> DijkstraResult {
    let has_negative = graph.has_negative_weight();

    let mut distances: BTreeMap<usize, f64> =
        graph.nodes().into_iter().map(|n| (n, f64::INFINITY)).collect();
    distances.insert(source, 0.0);

    let mut predecessors: BTreeMap<usize, Option<usize>> =
        graph.nodes().into_iter().map(|n| (n, None)).collect();

    let mut queue = BinaryHeap::new();
    queue.push(QueueEntry {
        distance: 0.0,
        node: source,
    });

    let mut visited: BTreeSet<usize> = BTreeSet::new();
    let mut history: Vec<DijkstraStep> = Vec::new();
    let mut iteration = 0;

    while let Some(QueueEntry { distance, node }) = queue.pop() {
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node);
        iteration += 1;

        // Tentative path to every node the predecessor map can reach.
        let mut tentative_paths = BTreeMap::new();
        for n in graph.nodes() {
            if n == source || predecessors.get(&n).copied().flatten().is_some() {
                tentative_paths.insert(n, reconstruct_path(&predecessors, source, n));
            }
        }

        history.push(DijkstraStep {
            iteration,
            current: node,
            distances: distances.clone(),
            visited: visited.clone(),
            tentative_paths,
        });

        if node == target {
            let path = reconstruct_path(&predecessors, source, target);
            let mut message = String::from("Path found successfully");
            if has_negative {
                message.push_str(
                    " (warning: graph has negative weights, Dijkstra's result may be suboptimal)",
                );
            }
            return DijkstraResult {
                path: Some(path),
                distance: distances.get(&target).copied().unwrap_or(f64::INFINITY),
                iterations: iteration,
                success: true,
                message,
                history,
            };
        }

        for neighbor in graph.neighbors(node) {
            if visited.contains(&neighbor) {
                continue;
            }
            if let Some(weight) = graph.weight(node, neighbor) {
                let candidate = distance + weight;
                let known = distances.get(&neighbor).copied().unwrap_or(f64::INFINITY);
                if candidate < known {
                    distances.insert(neighbor, candidate);
                    predecessors.insert(neighbor, Some(node));
                    queue.push(QueueEntry {
                        distance: candidate,
                        node: neighbor,
                    });
                }
            }
        }
    }

    DijkstraResult {
        path: None,
        distance: f64::INFINITY,
        iterations: iteration,
        success: false,
        message: format!("No path exists from {source} to {target}"),
        history,
    }
}

/// Walks the predecessor map backward from `target` and reverses.
///
/// The walk is bounded by `node count + 1` steps so a corrupted or
/// cyclic predecessor chain degrades to an empty path instead of
/// looping forever. Returns an empty path when the chain does not
/// reach the source.
fn reconstruct_path(
    predecessors: &BTreeMap<usize, Option<usize>>,
    source: usize,
    target: usize,
) -> Vec<usize> {
    let max_steps = predecessors.len() + 1;
    let mut path = Vec::new();
    let mut current = Some(target);
    let mut steps = 0;

    while let Some(node) = current {
        if steps >= max_steps {
            break;
        }
        path.push(node);
        if node == source {
            break;
        }
        current = predecessors.get(&node).copied().flatten();
        steps += 1;
    }

    path.reverse();
    if path.first() == Some(&source) {
        path
    } else {
        Vec::new()
    }
}
