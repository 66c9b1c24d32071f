//! Group labels and the individual-to-group assignment

use crate::error::{Error, Result};
use crate::models::siblings::SiblingCluster;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::fmt;

/// Display names for the first few groups; later groups fall back to "Group N"
pub const DEFAULT_GROUP_NAMES: [&str; 6] = ["Blue", "Gold", "Green", "Red", "Purple", "Orange"];

/// Label identifying one of the k groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Group(pub u8);

impl Group {
    /// Label value as an index into count vectors
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Human-readable group name
    #[must_use]
    pub fn display_name(self) -> String {
        DEFAULT_GROUP_NAMES
            .get(self.index())
            .map_or_else(|| format!("Group {}", self.0 + 1), |name| (*name).to_string())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Mapping from individual identifiers to group labels
///
/// Mutable only inside the solving components; read-only once a run has
/// finished.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    num_groups: u8,
    labels: FxHashMap<String, Group>,
}

impl Assignment {
    /// Create an empty assignment over `num_groups` groups
    #[must_use]
    pub fn new(num_groups: u8) -> Self {
        Self {
            num_groups,
            labels: FxHashMap::default(),
        }
    }

    /// Build an assignment from labeled identifiers, validating label range
    pub fn from_labels(
        num_groups: u8,
        labels: impl IntoIterator<Item = (String, Group)>,
    ) -> Result<Self> {
        let mut assignment = Self::new(num_groups);
        for (id, group) in labels {
            if group.0 >= num_groups {
                return Err(Error::InvalidConfig(format!(
                    "label {} for `{id}` is out of range for {num_groups} groups",
                    group.0
                )));
            }
            assignment.labels.insert(id, group);
        }
        Ok(assignment)
    }

    /// Number of groups (k)
    #[must_use]
    pub const fn num_groups(&self) -> u8 {
        self.num_groups
    }

    /// Set the label for an individual
    ///
    /// The label must be in range for this assignment's group count.
    pub fn set(&mut self, id: impl Into<String>, group: Group) {
        debug_assert!(group.0 < self.num_groups);
        self.labels.insert(id.into(), group);
    }

    /// Label of an individual, if assigned
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Group> {
        self.labels.get(id).copied()
    }

    /// Number of assigned individuals
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no individual is assigned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over (identifier, label) pairs in sorted identifier order
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, Group)> + '_ {
        self.labels
            .iter()
            .map(|(id, &group)| (id.as_str(), group))
            .sorted_by(|a, b| a.0.cmp(b.0))
    }

    /// Whether every assigned member of the cluster holds the same label
    #[must_use]
    pub fn cluster_is_monochromatic(&self, cluster: &SiblingCluster) -> bool {
        let mut shared: Option<Group> = None;
        for member in cluster.members() {
            let Some(group) = self.get(member) else {
                continue;
            };
            match shared {
                Some(existing) if existing != group => return false,
                Some(_) => {}
                None => shared = Some(group),
            }
        }
        true
    }
}
