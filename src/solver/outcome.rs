//! Solver result ingestion
//!
//! The exact path hands a balance model to an assignment backend and gets
//! back a terminal status plus, when usable, one label per individual. The
//! outcome type enforces that an assignment is present exactly for the
//! usable statuses.

use crate::error::{Error, Result};
use crate::models::Assignment;
use std::fmt;

/// Terminal status reported by an assignment backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverStatus {
    /// Proven optimal solution
    Optimal,
    /// Feasible solution without an optimality proof
    Suboptimal,
    /// No assignment satisfies the constraints
    Infeasible,
    /// Budget exhausted with no usable solution
    Timeout,
    /// Backend failure
    Error,
}

impl SolverStatus {
    /// Canonical uppercase token for logs and reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optimal => "OPTIMAL",
            Self::Suboptimal => "SUBOPTIMAL",
            Self::Infeasible => "INFEASIBLE",
            Self::Timeout => "TIMEOUT",
            Self::Error => "ERROR",
        }
    }

    /// Whether this status carries an assignment
    #[must_use]
    pub const fn has_assignment(self) -> bool {
        matches!(self, Self::Optimal | Self::Suboptimal)
    }
}

impl fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result received from an assignment backend
#[derive(Debug, Clone)]
pub struct SolverOutcome {
    status: SolverStatus,
    assignment: Option<Assignment>,
    objective: Option<f64>,
}

impl SolverOutcome {
    /// Build an outcome carrying a usable assignment
    ///
    /// Fails when `status` is not one of the assignment-carrying statuses.
    pub fn solved(status: SolverStatus, assignment: Assignment, objective: f64) -> Result<Self> {
        if !status.has_assignment() {
            return Err(Error::Solver(format!(
                "status {status} cannot carry an assignment"
            )));
        }
        Ok(Self {
            status,
            assignment: Some(assignment),
            objective: Some(objective),
        })
    }

    /// Build an outcome for a run that produced no usable assignment
    pub fn failed(status: SolverStatus) -> Result<Self> {
        if status.has_assignment() {
            return Err(Error::Solver(format!(
                "status {status} requires an assignment"
            )));
        }
        Ok(Self {
            status,
            assignment: None,
            objective: None,
        })
    }

    /// Terminal status of the run
    #[must_use]
    pub const fn status(&self) -> SolverStatus {
        self.status
    }

    /// Assignment, present for `OPTIMAL` and `SUBOPTIMAL` only
    #[must_use]
    pub const fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }

    /// Objective value of the assignment, when one is present
    #[must_use]
    pub const fn objective(&self) -> Option<f64> {
        self.objective
    }

    /// Consume the outcome, yielding the assignment when usable
    #[must_use]
    pub fn into_assignment(self) -> Option<Assignment> {
        self.assignment
    }
}
