//! Progress reporting for the partition search loop
//!
//! Wraps the indicatif crate so every search run renders the same bar
//! over its iteration budget.

use indicatif::{ProgressBar, ProgressStyle};

/// Bar template shared by every search run
const SEARCH_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

/// Create the progress bar for a search over `iterations` proposals
#[must_use]
pub fn search_progress_bar(iterations: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(iterations);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(SEARCH_TEMPLATE)
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(label.to_string());
    pb
}

/// Finish the bar, replacing its label with a completion message
pub fn finish_progress_bar(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(message.to_string());
}
