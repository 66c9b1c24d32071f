//! Sibling cluster entity definition

/// A set of individuals required to share one group label
///
/// Clusters are pairwise disjoint by construction: they are the equivalence
/// classes of the sibling relation. Members are kept sorted so equal clusters
/// compare equal regardless of how their relation pairs were ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingCluster {
    members: Vec<String>,
}

impl SiblingCluster {
    /// Create a cluster, deduplicating and sorting its members
    #[must_use]
    pub fn new(mut members: Vec<String>) -> Self {
        members.sort_unstable();
        members.dedup();
        Self { members }
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

    /// Whether the cluster has no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the identifier belongs to this cluster
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|member| member == id)
    }
}
