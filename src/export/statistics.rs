//! Balance statistics reporting
//!
//! Emits contingency tables of sub-population by group counts: one table
//! per class, one aggregate over all class memberships (an individual in
//! three classes is counted three times), and one over distinct
//! individuals.

use crate::error::{Error, Result};
use crate::models::{Assignment, Class, Gender, Group, Roster};
use chrono::Local;
use log::info;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Contingency table of sub-population by group counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContingencyTable {
    /// Table caption
    pub title: String,
    /// Group display names, one column per group
    pub group_names: Vec<String>,
    /// Counts for the sub-population, one per group
    pub sub_counts: Vec<usize>,
    /// Counts for the remainder, one per group
    pub rest_counts: Vec<usize>,
}

impl ContingencyTable {
    /// Tally a table over the given members
    ///
    /// Members without a label are not counted. `subpopulation` decides
    /// which of the two rows a member lands in.
    pub fn tally<'a>(
        title: impl Into<String>,
        assignment: &Assignment,
        members: impl IntoIterator<Item = &'a String>,
        subpopulation: &FxHashSet<String>,
    ) -> Self {
        let k = assignment.num_groups() as usize;
        let mut sub_counts = vec![0usize; k];
        let mut rest_counts = vec![0usize; k];

        for member in members {
            let Some(group) = assignment.get(member) else {
                continue;
            };
            if subpopulation.contains(member) {
                sub_counts[group.index()] += 1;
            } else {
                rest_counts[group.index()] += 1;
            }
        }

        let group_names = (0..assignment.num_groups())
            .map(|label| Group(label).display_name())
            .collect();

        Self {
            title: title.into(),
            group_names,
            sub_counts,
            rest_counts,
        }
    }

    /// Total count of the sub-population row
    #[must_use]
    pub fn sub_total(&self) -> usize {
        self.sub_counts.iter().sum()
    }

    /// Total count of the remainder row
    #[must_use]
    pub fn rest_total(&self) -> usize {
        self.rest_counts.iter().sum()
    }

    fn render(&self, out: &mut String) {
        out.push_str(&self.title);
        out.push('\n');

        let header = self
            .group_names
            .iter()
            .cloned()
            .chain(std::iter::once("Sum".to_owned()));
        render_row(out, "___", header);
        render_row(
            out,
            &format!("  {}", Gender::Male.letter()),
            row_cells(&self.sub_counts),
        );
        render_row(
            out,
            &format!("  {}", Gender::Female.letter()),
            row_cells(&self.rest_counts),
        );

        let column_sums: Vec<usize> = self
            .sub_counts
            .iter()
            .zip(&self.rest_counts)
            .map(|(sub, rest)| sub + rest)
            .collect();
        render_row(out, "Sum", row_cells(&column_sums));
    }
}

/// Write the balance statistics report
///
/// The report carries a generation timestamp, a table per class, and the
/// two aggregate tables. The sub-population row counts males; the
/// remainder row counts everyone else.
pub fn write_statistics(
    path: &Path,
    assignment: &Assignment,
    classes: &[Class],
    roster: &Roster,
) -> Result<()> {
    let subpopulation = roster.subpopulation(Gender::Male);
    let mut out = String::new();

    out.push_str(&format!(
        "Balance statistics generated {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    for class in classes {
        let table = ContingencyTable::tally(
            format!("Class {}", class.name),
            assignment,
            class.members(),
            &subpopulation,
        );
        table.render(&mut out);
        out.push('\n');
    }

    let all_memberships = classes.iter().flat_map(Class::members);
    ContingencyTable::tally(
        "Overall (assignments)",
        assignment,
        all_memberships,
        &subpopulation,
    )
    .render(&mut out);
    out.push('\n');

    let distinct: Vec<String> = assignment.iter_sorted().map(|(id, _)| id.to_owned()).collect();
    ContingencyTable::tally(
        "Overall (individuals)",
        assignment,
        distinct.iter(),
        &subpopulation,
    )
    .render(&mut out);

    fs::write(path, out)
        .map_err(|e| Error::io("Failed to write statistics report", path, e))?;

    info!("Wrote balance statistics to {}", path.display());

    Ok(())
}

fn row_cells(counts: &[usize]) -> impl Iterator<Item = String> + '_ {
    let total: usize = counts.iter().sum();
    counts
        .iter()
        .map(ToString::to_string)
        .chain(std::iter::once(total.to_string()))
}

fn render_row(out: &mut String, label: &str, cells: impl Iterator<Item = String>) {
    out.push_str(label);
    for cell in cells {
        out.push('|');
        out.push_str(&cell);
        out.push('\t');
    }
    out.push('\n');
}
