//! Authoritative individual roster

use crate::models::individual::Individual;
use crate::models::types::Gender;
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

/// The authoritative collection of individuals eligible for assignment
///
/// References to identifiers outside the roster (class memberships, sibling
/// relations) are dropped by the loaders rather than erroring.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    individuals: FxHashMap<String, Individual>,
}

impl Roster {
    /// Create an empty roster
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an individual, returning the previous entry for the same identifier
    pub fn insert(&mut self, individual: Individual) -> Option<Individual> {
        self.individuals.insert(individual.id.clone(), individual)
    }

    /// Look up an individual by identifier
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Whether the roster contains the identifier
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.individuals.contains_key(id)
    }

    /// Number of individuals
    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the roster is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Iterate over individuals in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values()
    }

    /// Identifiers in sorted order, for deterministic iteration
    #[must_use]
    pub fn ids_sorted(&self) -> Vec<&str> {
        self.individuals.keys().map(String::as_str).sorted().collect()
    }

    /// All identifiers as a set
    #[must_use]
    pub fn id_set(&self) -> FxHashSet<String> {
        self.individuals.keys().cloned().collect()
    }

    /// Identifiers of individuals with the given gender
    #[must_use]
    pub fn subpopulation(&self, gender: Gender) -> FxHashSet<String> {
        self.individuals
            .values()
            .filter(|individual| individual.gender == gender)
            .map(|individual| individual.id.clone())
            .collect()
    }
}

impl FromIterator<Individual> for Roster {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        let mut roster = Self::new();
        for individual in iter {
            roster.insert(individual);
        }
        roster
    }
}
