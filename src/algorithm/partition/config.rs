//! Configuration for the greedy partitioner

use crate::algorithm::balance::BalanceWeights;
use crate::error::{Error, Result};
use std::str::FromStr;
use std::time::Duration;

/// Policy for accepting proposed relabeling moves
///
/// The reference behavior applies every proposed move; true hill-climbing
/// reverts moves that do not lower the total imbalance. The two disagree in
/// the presence of overlapping classes, so the choice is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovePolicy {
    /// Apply every proposed move
    #[default]
    Unconditional,
    /// Revert moves that do not strictly lower the total imbalance
    Improving,
}

impl FromStr for MovePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unconditional" => Ok(Self::Unconditional),
            "improving" => Ok(Self::Improving),
            other => Err(format!(
                "unknown move policy `{other}`, expected `unconditional` or `improving`"
            )),
        }
    }
}

/// Configuration for a partitioning run
#[derive(Debug, Clone)]
pub struct PartitionConfig {
    /// Number of groups to assign (k)
    pub num_groups: u8,

    /// Iteration budget for the local search
    pub iterations: usize,

    /// Policy for accepting proposed moves
    pub move_policy: MovePolicy,

    /// Imbalance at or below which a class is considered balanced
    pub tolerance: f64,

    /// Whether a move relabels the chosen member's whole sibling cluster
    pub respect_siblings: bool,

    /// Weights for the total imbalance
    pub weights: BalanceWeights,

    /// Optional random seed for reproducible runs
    pub random_seed: Option<u64>,

    /// Optional wall-clock budget; the search stops once it is exceeded
    pub time_budget: Option<Duration>,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            num_groups: 3,
            iterations: 100,
            move_policy: MovePolicy::Unconditional,
            tolerance: 0.0,
            respect_siblings: false,
            weights: BalanceWeights::default(),
            random_seed: None,
            time_budget: None,
        }
    }
}

impl PartitionConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a configuration
    #[must_use]
    pub fn builder() -> PartitionConfigBuilder {
        PartitionConfigBuilder::new()
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.num_groups < 2 {
            return Err(Error::InvalidConfig(format!(
                "at least 2 groups are required, got {}",
                self.num_groups
            )));
        }
        if self.tolerance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

/// Builder for constructing a partition configuration
#[derive(Debug, Clone)]
pub struct PartitionConfigBuilder {
    config: PartitionConfig,
}

impl Default for PartitionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PartitionConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: PartitionConfig::default(),
        }
    }

    /// Set the number of groups
    #[must_use]
    pub const fn num_groups(mut self, num_groups: u8) -> Self {
        self.config.num_groups = num_groups;
        self
    }

    /// Set the iteration budget
    #[must_use]
    pub const fn iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Set the move policy
    #[must_use]
    pub const fn move_policy(mut self, policy: MovePolicy) -> Self {
        self.config.move_policy = policy;
        self
    }

    /// Set the balance tolerance
    #[must_use]
    pub const fn tolerance(mut self, tolerance: f64) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set whether moves propagate to whole sibling clusters
    #[must_use]
    pub const fn respect_siblings(mut self, respect: bool) -> Self {
        self.config.respect_siblings = respect;
        self
    }

    /// Set the imbalance weights
    #[must_use]
    pub const fn weights(mut self, weights: BalanceWeights) -> Self {
        self.config.weights = weights;
        self
    }

    /// Set the random seed
    #[must_use]
    pub const fn random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = Some(seed);
        self
    }

    /// Set the wall-clock budget
    #[must_use]
    pub const fn time_budget(mut self, budget: Duration) -> Self {
        self.config.time_budget = Some(budget);
        self
    }

    /// Build the configuration
    #[must_use]
    pub const fn build(self) -> PartitionConfig {
        self.config
    }
}
