//! Imbalance metrics for group assignments
//!
//! This module provides the functions for scoring how evenly an assignment
//! spreads group labels inside each class, plus the secondary sub-population
//! term and the weighted total that both solving paths minimize.

use crate::models::{Assignment, Class};
use rustc_hash::FxHashSet;
use smallvec::{SmallVec, smallvec};

/// Weights combining the per-class and sub-population imbalance terms
#[derive(Debug, Clone, Copy)]
pub struct BalanceWeights {
    /// Weight of the summed per-class variance term
    pub class_weight: f64,
    /// Weight of the summed sub-population term
    pub secondary_weight: f64,
}

impl Default for BalanceWeights {
    fn default() -> Self {
        Self {
            class_weight: 1.0,
            secondary_weight: 0.5,
        }
    }
}

/// Count assignment labels over a set of members
///
/// Members without a label are not counted.
#[must_use]
pub fn group_counts(assignment: &Assignment, members: &[String]) -> SmallVec<[usize; 8]> {
    let mut counts: SmallVec<[usize; 8]> = smallvec![0; assignment.num_groups() as usize];
    for id in members {
        if let Some(group) = assignment.get(id) {
            counts[group.index()] += 1;
        }
    }
    counts
}

/// Sample variance of a count vector (divides by k - 1)
#[must_use]
pub fn sample_variance(counts: &[usize]) -> f64 {
    if counts.len() < 2 {
        return 0.0;
    }

    let n = counts.len() as f64;
    let mean = counts.iter().sum::<usize>() as f64 / n;

    counts
        .iter()
        .map(|&count| (count as f64 - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0)
}

/// Squared deviation of sub-population counts from half of each label total
///
/// For each label, the sub-population's share under perfect balance is half
/// the label's total membership; the deviations are squared and summed.
#[must_use]
pub fn subpopulation_deviation(totals: &[usize], sub_counts: &[usize]) -> f64 {
    totals
        .iter()
        .zip(sub_counts)
        .map(|(&total, &sub)| (sub as f64 - total as f64 / 2.0).powi(2))
        .sum()
}

/// Imbalance of a single class under an assignment
#[must_use]
pub fn class_imbalance(assignment: &Assignment, class: &Class) -> f64 {
    sample_variance(&group_counts(assignment, class.members()))
}

/// Sub-population imbalance of a single class under an assignment
#[must_use]
pub fn secondary_imbalance(
    assignment: &Assignment,
    class: &Class,
    subpopulation: &FxHashSet<String>,
) -> f64 {
    let k = assignment.num_groups() as usize;
    let mut totals: SmallVec<[usize; 8]> = smallvec![0; k];
    let mut sub_counts: SmallVec<[usize; 8]> = smallvec![0; k];

    for id in class.members() {
        if let Some(group) = assignment.get(id) {
            totals[group.index()] += 1;
            if subpopulation.contains(id) {
                sub_counts[group.index()] += 1;
            }
        }
    }

    subpopulation_deviation(&totals, &sub_counts)
}

/// Weighted total imbalance across all classes
///
/// `subpopulation` of `None` disables the secondary term entirely (no
/// sub-population data); `Some` of an empty set still scores every class
/// against a zero-member sub-population.
#[must_use]
pub fn total_imbalance(
    assignment: &Assignment,
    classes: &[Class],
    subpopulation: Option<&FxHashSet<String>>,
    weights: BalanceWeights,
) -> f64 {
    let class_term: f64 = classes
        .iter()
        .map(|class| class_imbalance(assignment, class))
        .sum();

    let secondary_term: f64 = match subpopulation {
        Some(subpopulation) => classes
            .iter()
            .map(|class| secondary_imbalance(assignment, class, subpopulation))
            .sum(),
        None => 0.0,
    };

    weights.class_weight * class_term + weights.secondary_weight * secondary_term
}
