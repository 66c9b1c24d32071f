//! Greedy local search for balanced group assignment
//!
//! The partitioner repeatedly finds the class with the largest imbalance and
//! relabels one of its majority-label members to the minority label. Each
//! iteration is split into a proposal (the only consumer of randomness) and a
//! pure application step, composed under the configured move policy.

use crate::algorithm::balance;
use crate::algorithm::partition::config::{MovePolicy, PartitionConfig};
use crate::error::Result;
use crate::models::{Assignment, Class, Group, SiblingCluster};
use crate::utils::progress;
use itertools::Itertools;
use log::{debug, info};
use rand::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::{SmallVec, smallvec};
use std::time::{Duration, Instant};

/// Mutable assignment state owned by a partitioning run
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionState {
    assignment: Assignment,
}

impl PartitionState {
    /// Wrap an existing assignment as search state
    #[must_use]
    pub const fn new(assignment: Assignment) -> Self {
        Self { assignment }
    }

    /// Read-only view of the current assignment
    #[must_use]
    pub const fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Consume the state, yielding the final assignment
    #[must_use]
    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }
}

/// A proposed relabeling of one member, or of its whole sibling cluster
#[derive(Debug, Clone)]
pub struct Move {
    /// Identifiers to relabel together
    pub members: SmallVec<[String; 4]>,
    /// Class that motivated the move
    pub class_id: String,
    /// Label the members hold before the move
    pub from: Group,
    /// Label the members receive
    pub to: Group,
}

/// Summary of a completed partitioning run
#[derive(Debug, Clone)]
pub struct PartitionSummary {
    /// Iterations executed before stopping
    pub iterations_run: usize,
    /// Moves applied and kept
    pub moves_applied: usize,
    /// Moves reverted under the improving policy
    pub moves_reverted: usize,
    /// Total imbalance of the initial assignment
    pub initial_imbalance: f64,
    /// Total imbalance of the final assignment
    pub final_imbalance: f64,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

/// Result of a partitioning run
#[derive(Debug, Clone)]
pub struct PartitionResult {
    /// Final assignment
    pub assignment: Assignment,
    /// Run summary
    pub summary: PartitionSummary,
}

/// Greedy partitioner assigning individuals to balanced groups
#[derive(Debug)]
pub struct GreedyPartitioner {
    classes: Vec<Class>,
    clusters: Vec<SiblingCluster>,
    cluster_of: FxHashMap<String, usize>,
    subpopulation: Option<FxHashSet<String>>,
    extra_members: Vec<String>,
    config: PartitionConfig,
    rng: StdRng,
}

impl GreedyPartitioner {
    /// Create a partitioner over the given classes
    pub fn new(classes: Vec<Class>, config: PartitionConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            classes,
            clusters: Vec::new(),
            cluster_of: FxHashMap::default(),
            subpopulation: None,
            extra_members: Vec::new(),
            config,
            rng,
        })
    }

    /// Attach sibling clusters for cluster-wide moves
    #[must_use]
    pub fn with_clusters(mut self, clusters: Vec<SiblingCluster>) -> Self {
        self.cluster_of.clear();
        for (idx, cluster) in clusters.iter().enumerate() {
            for member in cluster.members() {
                self.cluster_of.insert(member.clone(), idx);
            }
        }
        self.clusters = clusters;
        self
    }

    /// Attach the sub-population scored by the secondary imbalance term
    #[must_use]
    pub fn with_subpopulation(mut self, subpopulation: FxHashSet<String>) -> Self {
        self.subpopulation = Some(subpopulation);
        self
    }

    /// Extend the assignable population beyond class membership
    ///
    /// Individuals outside every class do not affect the imbalance but still
    /// receive a label.
    #[must_use]
    pub fn with_population(mut self, ids: impl IntoIterator<Item = String>) -> Self {
        self.extra_members.extend(ids);
        self
    }

    /// Assign every member a uniformly random label
    ///
    /// Members are visited in sorted identifier order, so a fixed seed yields
    /// the same initial assignment regardless of input ordering. When sibling
    /// clusters are respected, each cluster is aligned to its first assigned
    /// member's label.
    pub fn initialize(&mut self) -> PartitionState {
        let mut assignment = Assignment::new(self.config.num_groups);

        for id in self.member_ids_sorted() {
            let group = Group(self.rng.random_range(0..self.config.num_groups));
            assignment.set(id, group);
        }

        if self.config.respect_siblings {
            for cluster in &self.clusters {
                let Some(shared) = cluster
                    .members()
                    .iter()
                    .find_map(|member| assignment.get(member))
                else {
                    continue;
                };
                for member in cluster.members() {
                    if assignment.get(member).is_some() {
                        assignment.set(member.clone(), shared);
                    }
                }
            }
        }

        PartitionState::new(assignment)
    }

    /// Propose the next relabeling move
    ///
    /// Selects the class with the strictly largest imbalance (ties keep the
    /// first class encountered), then relabels a uniformly random member of
    /// its majority label to its minority label. Returns `None` when no
    /// class's imbalance exceeds the tolerance.
    pub fn propose(&mut self, state: &PartitionState) -> Option<Move> {
        let assignment = state.assignment();

        let mut worst: Option<(usize, f64)> = None;
        for (idx, class) in self.classes.iter().enumerate() {
            let imbalance = balance::class_imbalance(assignment, class);
            if imbalance <= self.config.tolerance {
                continue;
            }
            let better = match worst {
                Some((_, best)) => imbalance > best,
                None => true,
            };
            if better {
                worst = Some((idx, imbalance));
            }
        }
        let (class_idx, _) = worst?;

        let class = &self.classes[class_idx];
        let counts = balance::group_counts(assignment, class.members());
        let majority = first_argmax(&counts)?;
        let minority = first_argmin(&counts)?;
        if majority == minority {
            return None;
        }

        let from = Group(majority as u8);
        let to = Group(minority as u8);
        let candidates: Vec<String> = class
            .members()
            .iter()
            .filter(|id| assignment.get(id) == Some(from))
            .cloned()
            .collect();
        let class_id = class.id.clone();

        let chosen = candidates.choose(&mut self.rng)?.clone();

        let members: SmallVec<[String; 4]> = if self.config.respect_siblings {
            match self.cluster_of.get(chosen.as_str()) {
                Some(&idx) => self.clusters[idx].members().iter().cloned().collect(),
                None => smallvec![chosen],
            }
        } else {
            smallvec![chosen]
        };

        Some(Move {
            members,
            class_id,
            from,
            to,
        })
    }

    /// Apply a move to the state
    pub fn apply(state: &mut PartitionState, proposed: &Move) {
        for id in &proposed.members {
            state.assignment.set(id.clone(), proposed.to);
        }
    }

    /// Undo a move, restoring the members' previous label
    fn revert(state: &mut PartitionState, proposed: &Move) {
        for id in &proposed.members {
            state.assignment.set(id.clone(), proposed.from);
        }
    }

    /// Run the local search and return the final assignment with a summary
    pub fn run(&mut self) -> PartitionResult {
        let start = Instant::now();
        let deadline = self.config.time_budget.map(|budget| start + budget);

        let mut state = self.initialize();
        let initial_imbalance = self.total_imbalance(state.assignment());

        info!(
            "Partitioning {} members into {} groups across {} classes ({} iterations, {:?} policy)",
            state.assignment().len(),
            self.config.num_groups,
            self.classes.len(),
            self.config.iterations,
            self.config.move_policy
        );

        let pb = progress::search_progress_bar(self.config.iterations as u64, "Balancing groups");

        let mut iterations_run = 0usize;
        let mut moves_applied = 0usize;
        let mut moves_reverted = 0usize;

        for _ in 0..self.config.iterations {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    info!("Time budget exhausted after {iterations_run} iterations");
                    break;
                }
            }

            let Some(proposed) = self.propose(&state) else {
                info!("Converged after {iterations_run} iterations, stopping early");
                break;
            };
            iterations_run += 1;

            debug!(
                "Relabeling {} member(s) {} -> {} for class {}",
                proposed.members.len(),
                proposed.from.index(),
                proposed.to.index(),
                proposed.class_id
            );

            match self.config.move_policy {
                MovePolicy::Unconditional => {
                    Self::apply(&mut state, &proposed);
                    moves_applied += 1;
                }
                MovePolicy::Improving => {
                    let before = self.total_imbalance(state.assignment());
                    Self::apply(&mut state, &proposed);
                    let after = self.total_imbalance(state.assignment());
                    if after < before {
                        moves_applied += 1;
                    } else {
                        Self::revert(&mut state, &proposed);
                        moves_reverted += 1;
                    }
                }
            }

            pb.inc(1);
        }

        progress::finish_progress_bar(&pb, "Partitioning complete");

        let final_imbalance = self.total_imbalance(state.assignment());
        let elapsed = start.elapsed();

        info!(
            "Partitioning complete: {iterations_run} iterations, {moves_applied} moves applied, \
             {moves_reverted} reverted, imbalance {initial_imbalance:.4} -> {final_imbalance:.4} in {elapsed:.2?}"
        );

        PartitionResult {
            assignment: state.into_assignment(),
            summary: PartitionSummary {
                iterations_run,
                moves_applied,
                moves_reverted,
                initial_imbalance,
                final_imbalance,
                elapsed,
            },
        }
    }

    /// Total imbalance of an assignment under this partitioner's inputs
    #[must_use]
    pub fn total_imbalance(&self, assignment: &Assignment) -> f64 {
        balance::total_imbalance(
            assignment,
            &self.classes,
            self.subpopulation.as_ref(),
            self.config.weights,
        )
    }

    fn member_ids_sorted(&self) -> Vec<String> {
        self.classes
            .iter()
            .flat_map(|class| class.members().iter().cloned())
            .chain(self.extra_members.iter().cloned())
            .sorted()
            .dedup()
            .collect()
    }
}

fn first_argmax(counts: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (idx, &count) in counts.iter().enumerate() {
        let better = match best {
            Some((_, max)) => count > max,
            None => true,
        };
        if better {
            best = Some((idx, count));
        }
    }
    best.map(|(idx, _)| idx)
}

fn first_argmin(counts: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (idx, &count) in counts.iter().enumerate() {
        let better = match best {
            Some((_, min)) => count < min,
            None => true,
        };
        if better {
            best = Some((idx, count));
        }
    }
    best.map(|(idx, _)| idx)
}
