//! Class (membership collection) entity definition

use serde::Serialize;

/// A named collection of individuals whose label distribution should be balanced
///
/// Membership order is irrelevant; duplicate members are collapsed at
/// construction and the member list is kept sorted.
#[derive(Debug, Clone, Serialize)]
pub struct Class {
    /// Identifier, unique within a run
    pub id: String,
    /// Display name
    pub name: String,
    members: Vec<String>,
}

impl Class {
    /// Create a class, deduplicating and sorting its members
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, mut members: Vec<String>) -> Self {
        members.sort_unstable();
        members.dedup();
        Self {
            id: id.into(),
            name: name.into(),
            members,
        }
    }

    /// Member identifiers, sorted
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Number of members
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the class has no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Drop members rejected by the predicate
    pub fn retain_members(&mut self, keep: impl FnMut(&String) -> bool) {
        self.members.retain(keep);
    }
}
