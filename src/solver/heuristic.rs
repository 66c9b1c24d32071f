//! Greedy backend for the exact-solver interface
//!
//! Wraps the greedy partitioner behind [`ExactSolver`] so the exact path
//! can run without an integer-programming dependency. The backend is
//! single-threaded (the thread option is ignored) and never proves
//! optimality, so every successful solve reports `SUBOPTIMAL`.

use crate::algorithm::partition::{GreedyPartitioner, PartitionConfig};
use crate::error::Result;
use crate::models::{Class, SiblingCluster};
use crate::solver::model::BalanceModel;
use crate::solver::outcome::{SolverOutcome, SolverStatus};
use crate::solver::{ExactSolver, SolverOptions};
use log::info;
use rustc_hash::FxHashSet;

/// Greedy local-search backend
#[derive(Debug, Clone)]
pub struct HeuristicSolver {
    config: PartitionConfig,
}

impl HeuristicSolver {
    /// Backend with the given search configuration
    ///
    /// The group count, constraint handling, time budget, and seed are
    /// overridden per solve call from the model and options.
    #[must_use]
    pub const fn new(config: PartitionConfig) -> Self {
        Self { config }
    }
}

impl Default for HeuristicSolver {
    fn default() -> Self {
        Self::new(PartitionConfig::default())
    }
}

impl ExactSolver for HeuristicSolver {
    fn solve(&mut self, model: &BalanceModel, options: &SolverOptions) -> Result<SolverOutcome> {
        let classes = reconstruct_classes(model);
        let clusters = reconstruct_clusters(model);
        let subpopulation = reconstruct_subpopulation(model);

        let mut config = self.config.clone();
        config.num_groups = model.num_groups();
        config.respect_siblings = !model.constraints().is_empty();
        config.time_budget = Some(options.time_limit);
        if let Some(seed) = options.random_seed {
            config.random_seed = Some(seed);
        }
        if let Some(term) = model.class_terms().first() {
            config.weights.class_weight = term.weight;
        }
        if let Some(term) = model.subpopulation_terms().first() {
            config.weights.secondary_weight = term.weight;
        }

        let population: Vec<String> = model
            .variables()
            .iter()
            .map(|variable| variable.individual_id.clone())
            .collect();

        let mut partitioner = GreedyPartitioner::new(classes, config)?
            .with_clusters(clusters)
            .with_population(population);
        if let Some(subpopulation) = subpopulation {
            partitioner = partitioner.with_subpopulation(subpopulation);
        }

        let result = partitioner.run();
        let objective = model.evaluate(&result.assignment);

        info!(
            "Greedy backend finished: objective {objective:.4} after {} iterations",
            result.summary.iterations_run
        );

        SolverOutcome::solved(SolverStatus::Suboptimal, result.assignment, objective)
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

fn reconstruct_classes(model: &BalanceModel) -> Vec<Class> {
    model
        .class_terms()
        .iter()
        .map(|term| {
            let members: Vec<String> = term
                .variables
                .iter()
                .filter_map(|&var| model.individual_for(var))
                .map(str::to_owned)
                .collect();
            Class::new(term.class_id.clone(), term.class_id.clone(), members)
        })
        .collect()
}

fn reconstruct_clusters(model: &BalanceModel) -> Vec<SiblingCluster> {
    model
        .constraints()
        .iter()
        .map(|constraint| {
            let members: Vec<String> = constraint
                .members
                .iter()
                .filter_map(|&var| model.individual_for(var))
                .map(str::to_owned)
                .collect();
            SiblingCluster::new(members)
        })
        .collect()
}

fn reconstruct_subpopulation(model: &BalanceModel) -> Option<FxHashSet<String>> {
    if model.subpopulation_terms().is_empty() {
        return None;
    }
    let mut ids = FxHashSet::default();
    for term in model.subpopulation_terms() {
        for &var in &term.subpopulation {
            if let Some(id) = model.individual_for(var) {
                ids.insert(id.to_owned());
            }
        }
    }
    Some(ids)
}
