//! Algorithm implementations for balanced group assignment
//!
//! This module contains the algorithmic core of the crate: imbalance
//! metrics over class memberships, sibling-pair clustering, and the
//! greedy partitioning search.

pub mod balance;
pub mod partition;
pub mod siblings;

// Re-export key types
pub use balance::BalanceWeights;
pub use partition::{GreedyPartitioner, MovePolicy, PartitionConfig, PartitionResult};
pub use siblings::SiblingGrouper;
