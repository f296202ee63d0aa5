//! Annealing execution loop.

use super::config::AnnealingConfig;
use super::types::{AnnealingResult, AnnealingStep};
use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Below this temperature no worsening move is ever accepted; the
/// search is effectively pure descent from here on.
const FROZEN_TEMPERATURE: f64 = 0.01;

/// Executes the simulated-annealing path search.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Runs the search from `source` to `target`.
    ///
    /// Each invocation owns its own seeded random generator, so
    /// concurrent or repeated runs never interfere: the same
    /// `(graph, source, target, config)` with a fixed seed reproduces
    /// the same result bit for bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathlab::annealing::{AnnealingConfig, AnnealingRunner};
    /// use pathlab::graph::Graph;
    ///
    /// let mut g = Graph::new(true);
    /// g.add_edge(0, 1, 1.0);
    /// g.add_edge(1, 2, 2.0);
    /// g.add_edge(0, 2, 5.0);
    ///
    /// let config = AnnealingConfig::default().with_seed(42);
    /// let result = AnnealingRunner::run(&g, 0, 2, &config);
    /// assert!(result.success);
    /// ```
    pub fn run(
        graph: &Graph,
        source: usize,
        target: usize,
        config: &AnnealingConfig,
    ) -> AnnealingResult {
        config.validate().expect("invalid AnnealingConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = initial_path(graph, source, target, &mut rng);
        let mut current_energy = energy(graph, &current, source, target, config.constraint_penalty);

        let mut best = current.clone();
        let mut best_energy = current_energy;
        let mut best_valid = is_valid_path(graph, &current, source, target);

        let mut temperature = config.initial_temperature;
        let mut stable_count = 0;
        let mut convergence_iteration = 0;
        let mut history: Vec<AnnealingStep> = Vec::new();

        for iteration in 1..=config.max_iterations {
            let candidate = mutate(graph, &current, source, target, &mut rng);
            let candidate_energy =
                energy(graph, &candidate, source, target, config.constraint_penalty);

            let delta = candidate_energy - current_energy;
            let accepted = if delta < 0.0 {
                true
            } else if temperature > FROZEN_TEMPERATURE {
                rng.random::<f64>() < (-delta / temperature).exp()
            } else {
                false
            };

            if accepted {
                current = candidate;
                current_energy = candidate_energy;

                let current_valid = is_valid_path(graph, &current, source, target);
                if current_energy < best_energy || (current_valid && !best_valid) {
                    best = current.clone();
                    best_energy = current_energy;
                    best_valid = current_valid;
                    convergence_iteration = iteration;
                    stable_count = 0;
                } else {
                    stable_count += 1;
                }
            } else {
                stable_count += 1;
            }

            history.push(AnnealingStep {
                iteration,
                path: current.clone(),
                energy: current_energy,
                temperature,
                accepted,
                valid: is_valid_path(graph, &current, source, target),
            });

            temperature *= config.cooling_rate;

            if stable_count >= config.stability_threshold && best_valid {
                break;
            }
        }

        let iterations = history.len();
        if best_valid {
            AnnealingResult {
                distance: path_distance(graph, &best),
                path: Some(best),
                energy: best_energy,
                iterations,
                success: true,
                convergence_iteration,
                message: String::from("Valid path found via energy minimization"),
                history,
            }
        } else {
            AnnealingResult {
                path: None,
                distance: f64::INFINITY,
                energy: best_energy,
                iterations,
                success: false,
                convergence_iteration,
                message: String::from(
                    "No valid path found, search did not converge to a valid solution",
                ),
                history,
            }
        }
    }
}

/// Builds the starting candidate: a greedy/random walk from the source.
///
/// At each step, with 70% probability, takes the unvisited neighbor
/// whose id is numerically closest to the target (a crude heuristic,
/// kept as-is), otherwise a uniform random unvisited neighbor. A dead
/// end jumps to a random unvisited non-source node. The walk stops on
/// reaching the target or after `2 * node_count` steps; the target is
/// force-appended when still missing.
fn initial_path(graph: &Graph, source: usize, target: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut path = vec![source];
    let mut visited = BTreeSet::from([source]);
    let mut current = source;
    let max_steps = graph.node_count() * 2;

    for _ in 0..max_steps {
        if current == target {
            break;
        }

        let unvisited: Vec<usize> = graph
            .neighbors(current)
            .into_iter()
            .filter(|n| !visited.contains(n))
            .collect();

        let next = if unvisited.is_empty() {
            let candidates: Vec<usize> = graph
                .nodes()
                .into_iter()
                .filter(|n| !visited.contains(n) && *n != source)
                .collect();
            candidates.choose(rng).copied()
        } else if rng.random_bool(0.7) {
            unvisited.iter().copied().min_by_key(|n| n.abs_diff(target))
        } else {
            unvisited.choose(rng).copied()
        };

        match next {
            Some(node) => {
                path.push(node);
                visited.insert(node);
                current = node;
            }
            None => break,
        }
    }

    if path.last() != Some(&target) && !path.contains(&target) {
        path.push(target);
    }
    path
}

/// Produces a neighboring candidate by one random path mutation:
/// swap two interior positions, insert an unused node, remove an
/// interior node, or replace an interior node with an unused one.
/// Endpoints are forced back to source/target afterwards. Paths of
/// length 2 or less are returned unchanged.
fn mutate(
    graph: &Graph,
    path: &[usize],
    source: usize,
    target: usize,
    rng: &mut StdRng,
) -> Vec<usize> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut next = path.to_vec();
    match rng.random_range(0..4) {
        0 => {
            // Swap two interior nodes.
            if next.len() > 3 {
                let i = rng.random_range(1..next.len() - 1);
                let j = rng.random_range(1..next.len() - 1);
                if i != j {
                    next.swap(i, j);
                }
            }
        }
        1 => {
            // Insert an unused node at a random interior position.
            let unused: Vec<usize> = graph
                .nodes()
                .into_iter()
                .filter(|n| !next.contains(n))
                .collect();
            if let Some(&node) = unused.choose(rng) {
                let pos = rng.random_range(1..next.len());
                next.insert(pos, node);
            }
        }
        2 => {
            // Remove an interior node.
            let pos = rng.random_range(1..next.len() - 1);
            next.remove(pos);
        }
        _ => {
            // Replace an interior node with an unused one.
            let unused: Vec<usize> = graph
                .nodes()
                .into_iter()
                .filter(|n| !next.contains(n))
                .collect();
            if let Some(&node) = unused.choose(rng) {
                let pos = rng.random_range(1..next.len() - 1);
                next[pos] = node;
            }
        }
    }

    if next[0] != source {
        next[0] = source;
    }
    if let Some(last) = next.last_mut() {
        if *last != target {
            *last = target;
        }
    }
    next
}

/// Scores a candidate: summed weight of traversed real edges plus
/// `penalty` per violation. Violations: wrong start (1), wrong end
/// (1), each traversed pair that is not a real edge (2). An empty
/// candidate scores `10 * penalty`.
fn energy(graph: &Graph, path: &[usize], source: usize, target: usize, penalty: f64) -> f64 {
    if path.is_empty() {
        return penalty * 10.0;
    }

    let mut total = 0.0;
    let mut violations = 0u32;

    if path[0] != source {
        violations += 1;
    }
    if path[path.len() - 1] != target {
        violations += 1;
    }

    for pair in path.windows(2) {
        match graph.weight(pair[0], pair[1]) {
            Some(weight) => total += weight,
            None => violations += 2,
        }
    }

    total + penalty * f64::from(violations)
}

/// Whether the candidate is a real source-to-target path: at least
/// two nodes, correct endpoints, every consecutive pair an edge.
fn is_valid_path(graph: &Graph, path: &[usize], source: usize, target: usize) -> bool {
    if path.len() < 2 {
        return false;
    }
    if path[0] != source || path[path.len() - 1] != target {
        return false;
    }
    path.windows(2).all(|pair| graph.has_edge(pair[0], pair[1]))
}

/// Exact summed weight of a path; infinite if any pair is not an edge.
fn path_distance(graph: &Graph, path: &[usize]) -> f64 {
    let mut total = 0.0;
    for pair in path.windows(2) {
        match graph.weight(pair[0], pair[1]) {
            Some(weight) => total += weight,
            None => return f64::INFINITY,
        }
    }
    total
}
