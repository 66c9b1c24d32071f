//! A Rust library for balanced group assignment: partition a population
//! into k labeled groups so that label distributions stay uniform inside
//! overlapping membership classes, with sibling clusters forced onto one
//! shared label.
//!
//! Two solving paths are provided. The heuristic path runs a greedy local
//! search directly over an assignment. The exact path builds a symbolic
//! objective/constraint model and hands it to a backend behind the
//! [`solver::ExactSolver`] trait; the bundled backend reuses the greedy
//! search.

pub mod algorithm;
pub mod error;
pub mod export;
pub mod models;
pub mod registry;
pub mod solver;
pub mod utils;

// Re-export the most common types for easier use
// Core entities
pub use models::{Assignment, Class, Gender, Group, Individual, Roster, SiblingCluster};

// Errors
pub use error::{Error, Result};

// Heuristic path
pub use algorithm::balance::BalanceWeights;
pub use algorithm::partition::{
    GreedyPartitioner, MovePolicy, PartitionConfig, PartitionResult,
};
pub use algorithm::siblings::{SiblingGrouper, group_pairs};

// Exact path
pub use solver::{
    BalanceModel, ExactSolver, HeuristicSolver, SolverOptions, SolverOutcome, SolverStatus,
};
