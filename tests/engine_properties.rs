//! Cross-engine properties and comparison scenarios.
//!
//! The unit tests inside each module cover engine-local behavior;
//! these tests pin down the relationships between the engines on the
//! same graph.

use pathlab::annealing::{AnnealingConfig, AnnealingRunner};
use pathlab::graph::Graph;
use pathlab::{bellman_ford, dijkstra};
use proptest::prelude::*;

/// 0 -> 1 -> 2 -> 5 costs 12; 0 -> 3 -> 4 -> 5 costs 8 thanks to the
/// negative final edge.
fn negative_shortcut() -> Graph {
    let mut g = Graph::new(true);
    g.add_edge(0, 1, 3.0);
    g.add_edge(1, 2, 4.0);
    g.add_edge(2, 5, 5.0);
    g.add_edge(0, 3, 6.0);
    g.add_edge(3, 4, 8.0);
    g.add_edge(4, 5, -6.0);
    g
}

fn assert_valid_path(g: &Graph, path: &[usize], source: usize, target: usize) {
    assert!(!path.is_empty());
    assert_eq!(path[0], source);
    assert_eq!(*path.last().unwrap(), target);
    for pair in path.windows(2) {
        assert!(
            g.has_edge(pair[0], pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn all_engines_agree_on_simple_graph() {
    let mut g = Graph::new(true);
    g.add_edge(0, 1, 2.0);
    g.add_edge(1, 2, 3.0);
    g.add_edge(0, 2, 10.0);

    let d = dijkstra::shortest_path(&g, 0, 2);
    let b = bellman_ford::shortest_path(&g, 0, 2);
    let a = AnnealingRunner::run(&g, 0, 2, &AnnealingConfig::default().with_seed(42));

    assert!(d.success && b.success && a.success);
    assert_eq!(d.distance, 5.0);
    assert_eq!(b.distance, 5.0);
    assert_valid_path(&g, a.path.as_ref().unwrap(), 0, 2);
}

#[test]
fn disconnected_pair_fails_in_every_engine() {
    let mut g = Graph::new(true);
    g.add_node(0);
    g.add_node(1);

    let d = dijkstra::shortest_path(&g, 0, 1);
    let b = bellman_ford::shortest_path(&g, 0, 1);
    let a = AnnealingRunner::run(&g, 0, 1, &AnnealingConfig::default().with_seed(42));

    for (success, path, distance) in [
        (d.success, d.path, d.distance),
        (b.success, b.path, b.distance),
        (a.success, a.path, a.distance),
    ] {
        assert!(!success);
        assert_eq!(path, None);
        assert!(distance.is_infinite());
    }
}

#[test]
fn dijkstra_may_miss_the_negative_shortcut() {
    let g = negative_shortcut();

    let b = bellman_ford::shortest_path(&g, 0, 5);
    assert_eq!(b.distance, 8.0);
    assert_eq!(b.path, Some(vec![0, 3, 4, 5]));

    // Dijkstra is not authoritative here; it must only never beat the
    // true shortest distance.
    let d = dijkstra::shortest_path(&g, 0, 5);
    if d.success {
        assert!(d.distance >= b.distance);
        assert!(d.message.contains("negative"));
    }
}

#[test]
fn annealing_is_reproducible_per_seed() {
    let g = negative_shortcut();
    let config = AnnealingConfig::default().with_seed(42);

    let first = AnnealingRunner::run(&g, 0, 5, &config);
    let second = AnnealingRunner::run(&g, 0, 5, &config);

    assert_eq!(first.history.len(), second.history.len());
    assert_eq!(first.path, second.path);
    assert_eq!(first.distance, second.distance);
}

#[test]
fn exact_engines_are_idempotent() {
    let g = negative_shortcut();

    assert_eq!(
        dijkstra::shortest_path(&g, 0, 5),
        dijkstra::shortest_path(&g, 0, 5)
    );
    assert_eq!(
        bellman_ford::shortest_path(&g, 0, 5),
        bellman_ford::shortest_path(&g, 0, 5)
    );
}

/// Arbitrary directed graphs with non-negative integer weights.
///
/// Integer-valued weights keep distance sums exact, so the two exact
/// engines can be compared with `==` instead of an epsilon.
fn non_negative_graph() -> impl Strategy<Value = (Graph, usize, usize)> {
    (2usize..8, prop::collection::vec((0usize..8, 0usize..8, 0u32..50), 1..24)).prop_map(
        |(n, raw_edges)| {
            let mut g = Graph::new(true);
            for node in 0..n {
                g.add_node(node);
            }
            for (u, v, w) in raw_edges {
                if u < n && v < n && u != v {
                    g.add_edge(u, v, f64::from(w));
                }
            }
            (g, 0, n - 1)
        },
    )
}

proptest! {
    #[test]
    fn dijkstra_matches_bellman_ford_on_non_negative_weights(
        (g, source, target) in non_negative_graph()
    ) {
        let d = dijkstra::shortest_path(&g, source, target);
        let b = bellman_ford::shortest_path(&g, source, target);

        prop_assert_eq!(d.success, b.success);
        if d.success {
            prop_assert_eq!(d.distance, b.distance);
        } else {
            prop_assert!(d.distance.is_infinite());
            prop_assert!(b.distance.is_infinite());
        }
    }

    #[test]
    fn no_false_negative_cycles(
        (g, source, target) in non_negative_graph()
    ) {
        let b = bellman_ford::shortest_path(&g, source, target);
        prop_assert!(!b.has_negative_cycle);
    }

    #[test]
    fn returned_paths_are_walks_in_the_graph(
        (g, source, target) in non_negative_graph()
    ) {
        let d = dijkstra::shortest_path(&g, source, target);
        if let Some(path) = &d.path {
            assert_valid_path(&g, path, source, target);
        }

        let b = bellman_ford::shortest_path(&g, source, target);
        if let Some(path) = &b.path {
            assert_valid_path(&g, path, source, target);
        }

        let config = AnnealingConfig::default()
            .with_max_iterations(120)
            .with_seed(42);
        let a = AnnealingRunner::run(&g, source, target, &config);
        if let Some(path) = &a.path {
            assert_valid_path(&g, path, source, target);
        }
    }

    #[test]
    fn path_weight_matches_reported_distance(
        (g, source, target) in non_negative_graph()
    ) {
        let b = bellman_ford::shortest_path(&g, source, target);
        if let Some(path) = &b.path {
            let total: f64 = path
                .windows(2)
                .map(|pair| g.weight(pair[0], pair[1]).unwrap_or(f64::INFINITY))
                .sum();
            prop_assert_eq!(total, b.distance);
        }
    }

    #[test]
    fn annealing_seed_determinism(
        (g, source, target) in non_negative_graph(),
        seed in 0u64..1000
    ) {
        let config = AnnealingConfig::default()
            .with_max_iterations(60)
            .with_seed(seed);
        let first = AnnealingRunner::run(&g, source, target, &config);
        let second = AnnealingRunner::run(&g, source, target, &config);
        prop_assert_eq!(first, second);
    }
}
