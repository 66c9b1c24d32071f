//! Heuristic partitioning of a population into balanced groups
//!
//! This module implements the greedy local search described in the top-level
//! crate docs. It includes:
//!
//! 1. Partitioning configuration with a builder
//! 2. The greedy partitioner with a propose/apply move cycle
//! 3. Run summaries for reporting and logging
//!
//! The search supports unconditional and improving move policies, optional
//! sibling-cluster alignment, and deterministic runs under a fixed seed.

pub mod config;
pub mod greedy;

// Re-export key types
pub use config::{MovePolicy, PartitionConfig, PartitionConfigBuilder};
pub use greedy::{GreedyPartitioner, Move, PartitionResult, PartitionState, PartitionSummary};
