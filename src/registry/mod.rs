//! Input loaders for rosters, class memberships, and sibling relations
//!
//! All tabular inputs share one loading path: a record type declares its
//! table's named column schema and parses one row at a time, and
//! [`load_table`] applies it line by line, skipping malformed rows instead
//! of failing the batch. A header too short for the schema is fatal;
//! header names are advisory and only logged when they differ. Fatal
//! errors are otherwise reserved for unreadable files and undecodable
//! JSON.

pub mod classes;
pub mod siblings;
pub mod students;

// Re-export key loader entry points
pub use classes::{load_class_map, load_schedule, retain_known_members};
pub use siblings::load_sibling_pairs;
pub use students::load_students;

use crate::error::{Error, Result};
use crate::error::util::safe_read_to_string;
use log::{debug, warn};
use std::path::Path;

/// A record type parsed from one delimited table row
pub trait TableRecord: Sized {
    /// Table name used in diagnostics
    const TABLE: &'static str;

    /// Canonical column names, in order
    const COLUMNS: &'static [&'static str];

    /// Minimum number of columns a row must carry
    const MIN_COLUMNS: usize;

    /// Parse one row; `None` skips the row as malformed
    fn from_row(fields: &[&str]) -> Option<Self>;
}

/// Outcome of a batch table load
#[derive(Debug, Clone)]
pub struct TableLoad<T> {
    /// Successfully parsed records, in file order
    pub records: Vec<T>,
    /// Rows skipped as malformed
    pub skipped: usize,
}

/// Load a delimited table, skipping malformed rows
///
/// The first line is treated as a header when `has_header` is set and is
/// checked against the record's schema: fewer columns than the schema
/// requires is a schema error, mismatched names are logged and accepted
/// positionally. Blank lines are ignored. Rows with fewer than the
/// record's minimum column count, and rows the record type rejects, are
/// counted as skipped.
pub fn load_table<T: TableRecord>(
    path: &Path,
    delimiter: char,
    has_header: bool,
) -> Result<TableLoad<T>> {
    let content = safe_read_to_string(path, &format!("the {} table", T::TABLE))?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (idx, line) in content.lines().enumerate() {
        if has_header && idx == 0 {
            check_header::<T>(&split_delimited(line, delimiter))?;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_delimited(line, delimiter);
        if fields.len() < T::MIN_COLUMNS {
            skipped += 1;
            continue;
        }
        let refs: Vec<&str> = fields.iter().map(String::as_str).collect();
        match T::from_row(&refs) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {skipped} malformed row(s) in the {} table", T::TABLE);
    }

    Ok(TableLoad { records, skipped })
}

fn check_header<T: TableRecord>(header: &[String]) -> Result<()> {
    if header.len() < T::MIN_COLUMNS {
        return Err(Error::schema(
            T::TABLE,
            format!(
                "header has {} column(s), schema requires at least {}",
                header.len(),
                T::MIN_COLUMNS
            ),
        ));
    }
    for (name, expected) in header.iter().zip(T::COLUMNS) {
        if normalize_column(name) != normalize_column(expected) {
            debug!(
                "Reading {} column {name:?} as {expected:?}",
                T::TABLE
            );
        }
    }
    Ok(())
}

fn normalize_column(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Split one delimited line into trimmed fields
///
/// Double quotes enclose fields that contain the delimiter; a doubled
/// quote inside a quoted field is an escaped quote.
fn split_delimited(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == delimiter {
            fields.push(current.trim().to_owned());
            current.clear();
        } else {
            current.push(c);
        }
    }
    fields.push(current.trim().to_owned());

    fields
}
