//! Equivalence grouping of pairwise sibling relations
//!
//! This module turns "a and b must share a label" pairs into disjoint
//! sibling clusters using a union-find forest with path compression.

use crate::models::SiblingCluster;
use itertools::Itertools;
use log::warn;
use rustc_hash::{FxHashMap, FxHashSet};
use std::mem::swap;

/// Disjoint-set forest over individual identifiers
///
/// Identifiers are interned into slots; unions use rank, finds compress
/// paths. The extracted partition does not depend on the order in which
/// pairs were recorded, or on duplicate pairs.
#[derive(Debug, Default)]
pub struct SiblingGrouper {
    slots: FxHashMap<String, usize>,
    names: Vec<String>,
    parents: Vec<(usize, u8)>,
}

impl SiblingGrouper {
    /// Create an empty grouper
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that two individuals must share a group
    pub fn add_pair(&mut self, a: &str, b: &str) {
        let a = self.intern(a);
        let b = self.intern(b);
        self.union(a, b);
    }

    /// Extract the sibling clusters
    ///
    /// Only groups of size >= 2 are clusters of interest; identifiers that
    /// never merged with another are not emitted. Cluster members are
    /// sorted, and clusters are ordered by their first member.
    #[must_use]
    pub fn clusters(&mut self) -> Vec<SiblingCluster> {
        let mut groups: FxHashMap<usize, Vec<String>> = FxHashMap::default();
        for slot in 0..self.parents.len() {
            let root = self.find(slot);
            groups.entry(root).or_default().push(self.names[slot].clone());
        }

        groups
            .into_values()
            .map(SiblingCluster::new)
            .filter(|cluster| cluster.len() >= 2)
            .sorted_by(|a, b| a.members()[0].cmp(&b.members()[0]))
            .collect()
    }

    fn intern(&mut self, id: &str) -> usize {
        if let Some(&slot) = self.slots.get(id) {
            return slot;
        }
        let slot = self.parents.len();
        self.slots.insert(id.to_string(), slot);
        self.names.push(id.to_string());
        self.parents.push((slot, 0));
        slot
    }

    fn find(&mut self, slot: usize) -> usize {
        self.find_rank(slot).0
    }

    fn find_rank(&mut self, mut slot: usize) -> (usize, u8) {
        let mut parent = self.parents[slot];
        while slot != parent.0 {
            let grandparent = self.parents[parent.0];
            self.parents[slot] = grandparent;
            slot = parent.0;
            parent = grandparent;
        }
        parent
    }

    fn union(&mut self, a: usize, b: usize) {
        let mut a = self.find_rank(a);
        let mut b = self.find_rank(b);

        if a.0 == b.0 {
            return;
        }

        if a.1 < b.1 {
            swap(&mut a, &mut b);
        }

        self.parents[b.0] = a;

        if a.1 == b.1 {
            a.1 += 1;
            self.parents[a.0] = a;
        }
    }
}

/// Build sibling clusters from pairwise relations
///
/// When `known` is given, pairs naming an identifier outside it are dropped
/// before merging. This is the documented policy for relations that point
/// outside the authoritative roster, not an error.
#[must_use]
pub fn group_pairs(
    pairs: &[(String, String)],
    known: Option<&FxHashSet<String>>,
) -> Vec<SiblingCluster> {
    let mut grouper = SiblingGrouper::new();
    let mut dropped = 0usize;

    for (a, b) in pairs {
        if let Some(known) = known {
            if !known.contains(a) || !known.contains(b) {
                dropped += 1;
                continue;
            }
        }
        grouper.add_pair(a, b);
    }

    if dropped > 0 {
        warn!("Dropped {dropped} sibling pair(s) referencing unknown individuals");
    }

    grouper.clusters()
}
