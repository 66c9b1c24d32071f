//! Individual roster loading

use crate::error::Result;
use crate::models::{Gender, Individual, Roster};
use crate::registry::{TableRecord, load_table};
use log::info;
use std::path::Path;

/// One row of the individual roster table
#[derive(Debug, Clone)]
struct StudentRecord {
    id: String,
    external_id: Option<String>,
    first_name: String,
    last_name: String,
    gender: Gender,
    grade: Option<String>,
}

impl TableRecord for StudentRecord {
    const TABLE: &'static str = "students";
    const COLUMNS: &'static [&'static str] =
        &["id", "external_id", "first_name", "last_name", "gender", "grade"];
    const MIN_COLUMNS: usize = 5;

    fn from_row(fields: &[&str]) -> Option<Self> {
        let id = fields[0];
        if id.is_empty() {
            return None;
        }
        let external_id = match fields[1] {
            "" => None,
            value => Some(value.to_owned()),
        };
        let grade = match fields.get(5) {
            Some(&"") | None => None,
            Some(value) => Some((*value).to_owned()),
        };
        Some(Self {
            id: id.to_owned(),
            external_id,
            first_name: fields[2].to_owned(),
            last_name: fields[3].to_owned(),
            gender: Gender::from(fields[4]),
            grade,
        })
    }
}

impl StudentRecord {
    fn into_individual(self) -> Individual {
        Individual {
            id: self.id,
            external_id: self.external_id,
            first_name: self.first_name,
            last_name: self.last_name,
            gender: self.gender,
            grade: self.grade,
        }
    }
}

/// Load the individual roster from a comma-delimited table
///
/// Expected columns: identifier, external identifier, first name, last
/// name, gender, grade. When `accepted_grades` is supplied, rows whose
/// grade falls outside the set are filtered out.
pub fn load_students(path: &Path, accepted_grades: Option<&[&str]>) -> Result<Roster> {
    let load = load_table::<StudentRecord>(path, ',', true)?;

    let mut roster = Roster::new();
    let mut filtered = 0usize;
    for record in load.records {
        if let Some(accepted) = accepted_grades {
            match record.grade.as_deref() {
                Some(grade) if accepted.contains(&grade) => {}
                _ => {
                    filtered += 1;
                    continue;
                }
            }
        }
        roster.insert(record.into_individual());
    }

    if filtered > 0 {
        info!("Filtered {filtered} roster row(s) outside the accepted grades");
    }
    info!("Loaded {} individuals from {}", roster.len(), path.display());

    Ok(roster)
}
