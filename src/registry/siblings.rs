//! Sibling relation loading

use crate::algorithm::siblings;
use crate::error::Result;
use crate::models::{Roster, SiblingCluster};
use crate::registry::{TableRecord, load_table};
use log::info;
use std::path::Path;

/// One sibling relation row: an identifier pair with display names
///
/// Expected columns: identifier, first name, last name, related
/// identifier, related first name, related last name. The names are
/// carried for readability of the input file and are not used here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingPairRecord {
    /// First identifier of the pair
    pub first: String,
    /// Second identifier of the pair
    pub second: String,
}

impl TableRecord for SiblingPairRecord {
    const TABLE: &'static str = "siblings";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "first_name",
        "last_name",
        "related_id",
        "related_first_name",
        "related_last_name",
    ];
    const MIN_COLUMNS: usize = 4;

    fn from_row(fields: &[&str]) -> Option<Self> {
        let first = fields[0];
        let second = fields[3];
        if first.is_empty() || second.is_empty() {
            return None;
        }
        Some(Self {
            first: first.to_owned(),
            second: second.to_owned(),
        })
    }
}

/// Load sibling pairs from a comma-delimited table and group them
///
/// When a roster is supplied, pairs referencing identifiers outside it are
/// dropped before grouping. Returns the resulting clusters, each of size
/// two or more.
pub fn load_sibling_pairs(path: &Path, roster: Option<&Roster>) -> Result<Vec<SiblingCluster>> {
    let load = load_table::<SiblingPairRecord>(path, ',', true)?;

    let pairs: Vec<(String, String)> = load
        .records
        .into_iter()
        .map(|record| (record.first, record.second))
        .collect();
    let pair_count = pairs.len();

    let known = roster.map(Roster::id_set);
    let clusters = siblings::group_pairs(&pairs, known.as_ref());

    info!(
        "Grouped {pair_count} sibling pair(s) into {} cluster(s)",
        clusters.len()
    );

    Ok(clusters)
}
