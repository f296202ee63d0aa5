//! Bellman-Ford execution loop.

use super::types::{BellmanFordPass, BellmanFordResult};
use crate::graph::Graph;
use std::collections::BTreeMap;

/// Runs Bellman-Ford from `source` to `target`.
///
/// Performs up to `V - 1` passes over every arc, relaxing any arc
/// whose source distance is finite, and stops early once a pass makes
/// zero relaxations. A final verification scan then checks whether any
/// arc still relaxes; if so, a negative cycle reachable from the
/// source exists and the run reports failure with
/// [`has_negative_cycle`](BellmanFordResult::has_negative_cycle) set.
///
/// # Examples
///
/// ```
/// use pathlab::bellman_ford;
/// use pathlab::graph::Graph;
///
/// let mut g = Graph::new(true);
/// g.add_edge(0, 1, 4.0);
/// g.add_edge(1, 2, -2.0);
///
/// let result = bellman_ford::shortest_path(&g, 0, 2);
/// assert_eq!(result.path, Some(vec![0, 1, 2]));
/// assert_eq!(result.distance, 2.0);
/// ```
pub fn shortest_path(graph: &Graph, source: usize, target: usize) -> BellmanFordResult {
    let arcs = graph.arcs();
    let n = graph.node_count();

    let mut distances: BTreeMap<usize, f64> =
        graph.nodes().into_iter().map(|node| (node, f64::INFINITY)).collect();
    distances.insert(source, 0.0);

    let mut predecessors: BTreeMap<usize, Option<usize>> =
        graph.nodes().into_iter().map(|node| (node, None)).collect();

    let mut history: Vec<BellmanFordPass> = Vec::new();

    for pass in 1..n {
        let mut relaxations = 0;
        let mut updates = Vec::new();

        for &(u, v, weight) in &arcs {
            let dist_u = distances.get(&u).copied().unwrap_or(f64::INFINITY);
            if dist_u.is_infinite() {
                continue;
            }
            let candidate = dist_u + weight;
            let dist_v = distances.get(&v).copied().unwrap_or(f64::INFINITY);
            if candidate < dist_v {
                distances.insert(v, candidate);
                predecessors.insert(v, Some(u));
                relaxations += 1;
                updates.push((u, v, candidate));
            }
        }

        history.push(BellmanFordPass {
            pass,
            distances: distances.clone(),
            relaxations,
            updates,
        });

        // Stable fixed point: no pass after this one can change anything.
        if relaxations == 0 {
            break;
        }
    }

    // Verification pass: any arc that still relaxes proves a negative
    // cycle reachable from the source.
    let has_negative_cycle = arcs.iter().any(|&(u, v, weight)| {
        let dist_u = distances.get(&u).copied().unwrap_or(f64::INFINITY);
        let dist_v = distances.get(&v).copied().unwrap_or(f64::INFINITY);
        dist_u.is_finite() && dist_u + weight < dist_v
    });

    if has_negative_cycle {
        return BellmanFordResult {
            path: None,
            distance: f64::INFINITY,
            iterations: history.len(),
            success: false,
            has_negative_cycle: true,
            message: String::from("Negative cycle detected, no valid shortest path exists"),
            history,
        };
    }

    let target_distance = distances.get(&target).copied().unwrap_or(f64::INFINITY);
    if target_distance.is_infinite() {
        return BellmanFordResult {
            path: None,
            distance: f64::INFINITY,
            iterations: history.len(),
            success: false,
            has_negative_cycle: false,
            message: format!("No path exists from {source} to {target}"),
            history,
        };
    }

    let path = reconstruct_path(&predecessors, source, target);
    BellmanFordResult {
        path: Some(path),
        distance: target_distance,
        iterations: history.len(),
        success: true,
        has_negative_cycle: false,
        message: String::from("Path found successfully"),
        history,
    }
}

/// Walks the predecessor map backward from `target` and reverses.
///
/// Bounded by `node count + 1` steps so a corrupted or cyclic chain
/// degrades to an empty path instead of looping forever.
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
