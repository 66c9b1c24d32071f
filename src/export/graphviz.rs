//! Graphviz export of the membership graph
//!
//! Emits an undirected DOT graph for an external renderer: one circle
//! node per individual filled with an HSV hue derived from its group, and
//! one edge per (individual, class) membership. Class nodes keep the
//! default styling.

use crate::error::{Error, Result};
use crate::models::{Assignment, Class};
use log::info;
use std::fs;
use std::path::Path;

/// Write a DOT description of the assignment
///
/// Nodes are emitted in sorted identifier order, edges in class order, so
/// equal inputs produce identical files.
pub fn write_graphviz(path: &Path, assignment: &Assignment, classes: &[Class]) -> Result<()> {
    let mut out = String::new();
    out.push_str("graph assignments {\n");
    out.push_str("  overlap=false\n");
    out.push_str("  edge [style=\"\", weight=1, len=1]\n");

    let k = f64::from(assignment.num_groups());
    for (id, group) in assignment.iter_sorted() {
        let hue = group.index() as f64 / k;
        out.push_str(&format!(
            "  \"{}\" [shape=circle, style=filled, fillcolor=\"{hue:.3} 1.000 1.000\"]\n",
            escape_dot(id)
        ));
    }

    for class in classes {
        for member in class.members() {
            out.push_str(&format!(
                "  \"{}\" -- \"{}\"\n",
                escape_dot(member),
                escape_dot(&class.name)
            ));
        }
    }

    out.push_str("}\n");

    fs::write(path, out).map_err(|e| Error::io("Failed to write graph export", path, e))?;

    info!("Wrote membership graph to {}", path.display());

    Ok(())
}

fn escape_dot(value: &str) -> String {
    value.replace('"', "\\\"")
}
