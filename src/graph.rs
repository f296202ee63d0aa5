//! Weighted graph supporting directed and undirected edges.
//!
//! Adjacency-list representation over ordered maps, so node and edge
//! iteration order is stable across runs. Search engines require that
//! stability: repeated runs on the same graph must produce identical
//! traces and results.
//!
//! Edge weights may be negative; it is up to each search engine to
//! decide what that means for correctness.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Weighted graph over integer node ids.
///
/// No operation fails: querying a missing node or edge reports absence
/// (empty neighbor list, `None` weight) rather than an error.
///
/// # Examples
///
/// ```
/// use pathlab::graph::Graph;
///
/// let mut g = Graph::new(true);
/// g.add_edge(0, 1, 2.5);
/// g.add_edge(1, 2, -1.0);
///
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.weight(0, 1), Some(2.5));
/// assert!(g.has_negative_weight());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    directed: bool,
    nodes: BTreeSet<usize>,
    adj: BTreeMap<usize, BTreeMap<usize, f64>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: BTreeSet::new(),
            adj: BTreeMap::new(),
        }
    }

    /// Whether edges are one-way.
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Registers a node. Idempotent.
    pub fn add_node(&mut self, node: usize) {
        self.nodes.insert(node);
    }

    /// Adds an edge from `u` to `v`, registering both endpoints as nodes.
    ///
    /// For an undirected graph the mirrored edge `(v, u)` is stored as
    /// well. Adding an edge between an existing pair overwrites the
    /// prior weight; there are no parallel edges.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: f64) {
        self.nodes.insert(u);
        self.nodes.insert(v);
        self.adj.entry(u).or_default().insert(v, weight);
        if !self.directed {
            self.adj.entry(v).or_default().insert(u, weight);
        }
    }

    /// Neighbors of `node`, in ascending id order. Empty for unknown nodes.
    pub fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adj
            .get(&node)
            .map(|edges| edges.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Weight of edge `(u, v)`, or `None` if the edge does not exist.
    pub fn weight(&self, u: usize, v: usize) -> Option<f64> {
        self.adj.get(&u).and_then(|edges| edges.get(&v)).copied()
    }

    /// Whether edge `(u, v)` exists.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj.get(&u).is_some_and(|edges| edges.contains_key(&v))
    }

    /// All nodes, sorted ascending.
    pub fn nodes(&self) -> Vec<usize> {
        self.nodes.iter().copied().collect()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All edges as `(u, v, weight)` triples.
    ///
    /// For an undirected graph each edge is reported once, in the
    /// orientation with the smaller source id.
    pub fn edges(&self) -> Vec<(usize, usize, f64)> {
        let mut list = Vec::new();
        for (&u, edges) in &self.adj {
            for (&v, &w) in edges {
                if self.directed || u <= v {
                    list.push((u, v, w));
                }
            }
        }
        list
    }

    /// Every stored arc as `(u, v, weight)`.
    ///
    /// For a directed graph this equals [`edges`](Self::edges); for an
    /// undirected graph each edge appears in both orientations. Edge
    /// relaxation iterates arcs, not edges: an undirected edge can be
    /// relaxed in either direction.
    pub fn arcs(&self) -> Vec<(usize, usize, f64)> {
        let mut list = Vec::new();
        for (&u, edges) in &self.adj {
            for (&v, &w) in edges {
                list.push((u, v, w));
            }
        }
        list
    }

    /// Number of edges (undirected edges counted once).
    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Ratio of actual edges to the maximum possible for this node
    /// count and directedness. Zero for graphs with at most one node.
    pub fn density(&self) -> f64 {
        let n = self.node_count();
        if n <= 1 {
            return 0.0;
        }
        let max_edges = if self.directed {
            n * (n - 1)
        } else {
            n * (n - 1) / 2
        };
        self.edge_count() as f64 / max_edges as f64
    }

    /// Whether any edge has a negative weight.
    pub fn has_negative_weight(&self) -> bool {
        self.adj
            .values()
            .flat_map(|edges| edges.values())
            .any(|&w| w < 0.0)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.directed {
            "Directed"
        } else {
            "Undirected"
        };
        write!(
            f,
            "{kind}Graph(nodes={}, edges={})",
            self.node_count(),
            self.edge_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directed_graph() {
        let mut g = Graph::new(true);
        g.add_edge(0, 1, 5.0);
        g.add_edge(1, 2, 3.0);

        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert!(g.directed());
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
    }

    #[test]
    fn test_undirected_graph_mirrors_edges() {
        let mut g = Graph::new(false);
        g.add_edge(0, 1, 5.0);

        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(1, 0));
        assert_eq!(g.weight(0, 1), Some(5.0));
        assert_eq!(g.weight(1, 0), Some(5.0));
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.arcs().len(), 2);
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut g = Graph::new(true);
        g.add_edge(0, 1, 5.0);
        g.add_edge(0, 1, 2.0);

        assert_eq!(g.weight(0, 1), Some(2.0));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_neighbors_sorted() {
        let mut g = Graph::new(true);
        g.add_edge(0, 3, 3.0);
        g.add_edge(0, 1, 1.0);
        g.add_edge(0, 2, 2.0);

        assert_eq!(g.neighbors(0), vec![1, 2, 3]);
        assert_eq!(g.neighbors(7), Vec::<usize>::new());
    }

    #[test]
    fn test_missing_queries_report_absence() {
        let g = Graph::new(true);
        assert_eq!(g.weight(0, 1), None);
        assert!(!g.has_edge(0, 1));
        assert!(g.nodes().is_empty());
    }

    #[test]
    fn test_negative_weights() {
        let mut g = Graph::new(true);
        g.add_edge(0, 1, 5.0);
        assert!(!g.has_negative_weight());
        g.add_edge(1, 2, -3.0);
        assert!(g.has_negative_weight());
        assert_eq!(g.weight(1, 2), Some(-3.0));
    }

    #[test]
    fn test_density_complete_directed() {
        let mut g = Graph::new(true);
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    g.add_edge(i, j, 1.0);
                }
            }
        }
        assert!((g.density() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_density_degenerate() {
        let mut g = Graph::new(true);
        assert_eq!(g.density(), 0.0);
        g.add_node(0);
        assert_eq!(g.density(), 0.0);
    }

    #[test]
    fn test_density_undirected() {
        let mut g = Graph::new(false);
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 1.0);
        g.add_edge(0, 2, 1.0);
        // Complete on 3 nodes.
        assert!((g.density() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let mut g = Graph::new(false);
        g.add_edge(0, 1, 1.0);
        assert_eq!(g.to_string(), "UndirectedGraph(nodes=2, edges=1)");
    }
}
