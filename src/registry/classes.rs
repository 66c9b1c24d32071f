//! Class membership loading
//!
//! Memberships arrive in one of two shapes: a JSON object mapping class
//! name to member list, or a denormalized schedule table with one row per
//! individual listing the classes it belongs to. Both loaders return
//! classes in sorted identifier order, which fixes the tie-break order of
//! the partitioning search.

use crate::error::{Error, Result};
use crate::error::util::safe_read_to_string;
use crate::models::{Class, Roster};
use itertools::Itertools;
use log::{info, warn};
use rustc_hash::FxHashMap;
use std::path::Path;

/// Load class rosters from a JSON object mapping class name to member list
///
/// Each key becomes both the class identifier and its display name.
/// Non-string entries inside a member list are skipped; a non-list value
/// for any class is a schema error.
pub fn load_class_map(path: &Path) -> Result<Vec<Class>> {
    let content = safe_read_to_string(path, "the class membership map")?;
    let map: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&content).map_err(|e| Error::json(path, e))?;

    let mut skipped = 0usize;
    let mut classes = Vec::with_capacity(map.len());
    for (key, value) in &map {
        let Some(items) = value.as_array() else {
            return Err(Error::schema(
                "class map",
                format!("value for class {key} is not a list"),
            ));
        };
        let members: Vec<String> = items
            .iter()
            .filter_map(|item| {
                let member = item.as_str();
                if member.is_none() {
                    skipped += 1;
                }
                member.map(str::to_owned)
            })
            .collect();
        classes.push(Class::new(key.clone(), key.clone(), members));
    }

    if skipped > 0 {
        warn!("Skipped {skipped} non-string member(s) in the class map");
    }
    info!("Loaded {} classes from {}", classes.len(), path.display());

    Ok(classes)
}

/// Load class memberships from a denormalized schedule table
///
/// Each comma-delimited row holds an individual identifier followed by up
/// to N (class id, class name) pairs; a pair with a blank id is ignored.
/// The first row is a header. For each class id, the first name seen wins.
pub fn load_schedule(path: &Path) -> Result<Vec<Class>> {
    let content = safe_read_to_string(path, "the schedule table")?;

    let mut names: FxHashMap<String, String> = FxHashMap::default();
    let mut members: FxHashMap<String, Vec<String>> = FxHashMap::default();
    let mut skipped = 0usize;

    for (idx, line) in content.lines().enumerate() {
        if idx == 0 || line.trim().is_empty() {
            continue;
        }
        let fields = super::split_delimited(line, ',');
        let Some((id, pairs)) = fields.split_first() else {
            continue;
        };
        if id.is_empty() {
            skipped += 1;
            continue;
        }
        for pair in pairs.chunks(2) {
            let class_id = pair[0].as_str();
            if class_id.is_empty() {
                continue;
            }
            let class_name = pair.get(1).map(String::as_str).filter(|name| !name.is_empty());
            names
                .entry(class_id.to_owned())
                .or_insert_with(|| class_name.unwrap_or(class_id).to_owned());
            members
                .entry(class_id.to_owned())
                .or_default()
                .push(id.clone());
        }
    }

    if skipped > 0 {
        warn!("Skipped {skipped} schedule row(s) without an identifier");
    }

    let classes: Vec<Class> = members
        .into_iter()
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .map(|(id, class_members)| {
            let name = names.remove(&id).unwrap_or_else(|| id.clone());
            Class::new(id, name, class_members)
        })
        .collect();

    info!("Loaded {} classes from {}", classes.len(), path.display());

    Ok(classes)
}

/// Drop class members missing from the roster
///
/// Returns the number of dropped memberships. Unknown members are a known
/// lossy case and are logged, not errored.
pub fn retain_known_members(classes: &mut [Class], roster: &Roster) -> usize {
    let mut dropped = 0usize;
    for class in classes.iter_mut() {
        let before = class.len();
        class.retain_members(|member| roster.contains(member));
        dropped += before - class.len();
    }
    if dropped > 0 {
        warn!("Dropped {dropped} class membership(s) referencing unknown individuals");
    }
    dropped
}
