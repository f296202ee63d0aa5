//! Shortest-path algorithm comparison lab.
//!
//! Provides a weighted graph representation and three independently
//! instrumented shortest-path engines:
//!
//! - **Dijkstra**: Greedy priority-queue search. Fast, but only
//!   correct for non-negative edge weights; negative weights are
//!   tolerated and flagged rather than rejected.
//! - **Bellman-Ford**: Iterative edge relaxation. Handles negative
//!   weights and detects negative cycles reachable from the source;
//!   the authoritative engine for correctness.
//! - **Annealing**: Metropolis-criterion simulated annealing over the
//!   space of node sequences, with an energy function combining real
//!   path weight and constraint penalties. Probabilistic; success is
//!   bounded by an iteration budget, not guaranteed.
//!
//! Every engine records a step-by-step trace of its internal state
//! (distances, finalized sets, energy, temperature) in its result, so
//! the runs can be compared and rendered by an external reporting
//! layer. Engines share nothing but read access to the same
//! [`graph::Graph`]; each invocation returns a self-contained result
//! and the stochastic engine owns its own seeded random generator,
//! so repeated and concurrent runs are reproducible.
//!
//! # Examples
//!
//! ```
//! use pathlab::graph::Graph;
//! use pathlab::{bellman_ford, dijkstra};
//!
//! let mut g = Graph::new(true);
//! g.add_edge(0, 1, 1.0);
//! g.add_edge(1, 2, 2.0);
//! g.add_edge(0, 2, 5.0);
//!
//! let d = dijkstra::shortest_path(&g, 0, 2);
//! let b = bellman_ford::shortest_path(&g, 0, 2);
//!
//! assert_eq!(d.path, Some(vec![0, 1, 2]));
//! assert_eq!(d.distance, b.distance);
//! ```

pub mod annealing;
pub mod bellman_ford;
pub mod dijkstra;
pub mod graph;
