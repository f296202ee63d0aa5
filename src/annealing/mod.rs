//! Simulated-annealing path search.
//!
//! A stochastic local search over the space of node sequences,
//! described as "quantum-inspired" in some of the literature this
//! engine reproduces. There is nothing quantum about it: candidate
//! paths are scored by an energy function (real path weight plus
//! penalties for structural violations) and mutated step by step,
//! with worsening moves accepted under the Metropolis criterion at a
//! geometrically cooling temperature.
//!
//! Unlike [`crate::dijkstra`] and [`crate::bellman_ford`], success is
//! not guaranteed even when a path exists; the search is bounded by
//! `max_iterations` and an early-stability rule.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;
mod types;

pub use config::AnnealingConfig;
pub use runner::AnnealingRunner;
pub use types::{AnnealingResult, AnnealingStep};
