//! Domain entities for balanced group assignment

pub mod assignment;
pub mod class;
pub mod individual;
pub mod roster;
pub mod siblings;
pub mod types;

pub use assignment::{Assignment, DEFAULT_GROUP_NAMES, Group};
pub use class::Class;
pub use individual::Individual;
pub use roster::Roster;
pub use siblings::SiblingCluster;
pub use types::Gender;
