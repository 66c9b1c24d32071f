//! Exact-path interface: symbolic model, backend trait, result ingestion
//!
//! The exact formulation is handed to an assignment backend behind the
//! [`ExactSolver`] trait. The crate ships one backend, the greedy
//! heuristic; an integer-programming solver would slot in behind the same
//! trait without touching the callers.

pub mod heuristic;
pub mod model;
pub mod outcome;

// Re-export key types
pub use heuristic::HeuristicSolver;
pub use model::{
    AuxId, BalanceModel, BalanceModelBuilder, ClassBalanceTerm, DecisionVariable,
    SameGroupConstraint, SubpopulationBalanceTerm, VarId, VariableDomain,
};
pub use outcome::{SolverOutcome, SolverStatus};

use crate::error::Result;
use std::time::Duration;

/// Tuning options forwarded to an assignment backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    /// Worker threads the backend may use
    pub threads: usize,
    /// Wall-clock budget for the solve call
    pub time_limit: Duration,
    /// Seed for any randomized backend behavior
    pub random_seed: Option<u64>,
}

impl SolverOptions {
    /// Default options: 4 threads, 60 second budget, unseeded
    #[must_use]
    pub const fn new() -> Self {
        Self {
            threads: 4,
            time_limit: Duration::from_secs(60),
            random_seed: None,
        }
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Backend that turns a balance model into an assignment
pub trait ExactSolver {
    /// Solve the model within the options' budget
    ///
    /// Infeasibility, timeouts, and backend failures are reported through
    /// the outcome status rather than the error channel; `Err` is reserved
    /// for misuse of the interface itself.
    fn solve(&mut self, model: &BalanceModel, options: &SolverOptions) -> Result<SolverOutcome>;

    /// Backend name for logs
    fn name(&self) -> &'static str;
}
