//! Assignment export

use crate::error::{Error, Result};
use crate::models::{Assignment, Roster};
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write one tab-separated row per individual with its assigned group
///
/// Columns: identifier, external identifier, first name, last name,
/// gender, grade, group name. Rows are sorted by identifier. Individuals
/// missing from the roster get blank attribute columns.
pub fn write_assignments_tsv(
    path: &Path,
    assignment: &Assignment,
    roster: &Roster,
) -> Result<()> {
    let mut file = File::create(path)
        .map_err(|e| Error::io("Failed to create assignment export", path, e))?;

    writeln!(file, "ID\tExternal ID\tFirst\tLast\tGender\tGrade\tAssignment")
        .map_err(|e| Error::io("Failed to write assignment export", path, e))?;

    for (id, group) in assignment.iter_sorted() {
        let row = match roster.get(id) {
            Some(individual) => format!(
                "{id}\t{}\t{}\t{}\t{}\t{}\t{}",
                individual.external_id.as_deref().unwrap_or(""),
                individual.first_name,
                individual.last_name,
                individual.gender,
                individual.grade.as_deref().unwrap_or(""),
                group.display_name()
            ),
            None => format!("{id}\t\t\t\t\t\t{}", group.display_name()),
        };
        writeln!(file, "{row}")
            .map_err(|e| Error::io("Failed to write assignment export", path, e))?;
    }

    info!(
        "Wrote {} assignment(s) to {}",
        assignment.len(),
        path.display()
    );

    Ok(())
}

/// Write assignments as a JSON object mapping identifier to group name
pub fn write_assignments_json(path: &Path, assignment: &Assignment) -> Result<()> {
    let mut map = serde_json::Map::new();
    for (id, group) in assignment.iter_sorted() {
        map.insert(
            id.to_owned(),
            serde_json::Value::String(group.display_name()),
        );
    }

    let content =
        serde_json::to_string_pretty(&map).map_err(|e| Error::json(path, e))?;
    std::fs::write(path, content)
        .map_err(|e| Error::io("Failed to write assignment export", path, e))?;

    info!(
        "Wrote {} assignment(s) to {}",
        assignment.len(),
        path.display()
    );

    Ok(())
}
