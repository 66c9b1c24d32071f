//! Export adapters for finished assignments
//!
//! Formatting is deliberately thin: every adapter consumes the read-only
//! assignment plus the entity sets and writes one artifact.

pub mod assignments;
pub mod graphviz;
pub mod statistics;

// Re-export key entry points
pub use assignments::{write_assignments_json, write_assignments_tsv};
pub use graphviz::write_graphviz;
pub use statistics::{ContingencyTable, write_statistics};
