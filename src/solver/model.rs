//! Symbolic balance model for exact assignment backends
//!
//! The model captures what an exact solver receives: one decision variable
//! per individual, one variance term per class, optional sub-population
//! deviation terms, and one equality constraint per sibling cluster.
//! Solving happens behind the [`ExactSolver`](crate::solver::ExactSolver)
//! trait; the model itself can evaluate its objective for any concrete
//! assignment, which keeps the reported objective and the search metric
//! identical.

use crate::algorithm::balance::{self, BalanceWeights};
use crate::models::{Assignment, Class, SiblingCluster};
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::{SmallVec, smallvec};

/// Index of a decision variable within a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(pub usize);

/// Index of an auxiliary shared-label variable within a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuxId(pub usize);

/// Value range of a decision variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableDomain {
    /// Two labels, variable is 0 or 1
    Binary,
    /// Labels in `[0, upper)`
    Integer {
        /// Exclusive upper bound
        upper: u8,
    },
}

/// One decision variable: the label chosen for one individual
#[derive(Debug, Clone)]
pub struct DecisionVariable {
    /// Variable index
    pub id: VarId,
    /// Individual the variable labels
    pub individual_id: String,
    /// Value range
    pub domain: VariableDomain,
}

/// Variance term over one class's members
#[derive(Debug, Clone)]
pub struct ClassBalanceTerm {
    /// Class the term scores
    pub class_id: String,
    /// Variables of the class members
    pub variables: Vec<VarId>,
    /// Objective weight
    pub weight: f64,
}

/// Sub-population deviation term over one class's members
#[derive(Debug, Clone)]
pub struct SubpopulationBalanceTerm {
    /// Class the term scores
    pub class_id: String,
    /// Variables of all class members
    pub variables: Vec<VarId>,
    /// Variables of the class members inside the sub-population
    pub subpopulation: Vec<VarId>,
    /// Objective weight
    pub weight: f64,
}

/// Equality constraint binding all members of a sibling cluster
///
/// Each member variable is bound to the cluster's auxiliary variable, so a
/// backend encodes the constraint as `member = auxiliary` for every member.
#[derive(Debug, Clone)]
pub struct SameGroupConstraint {
    /// Shared label variable of the cluster
    pub auxiliary: AuxId,
    /// Member variables forced to the auxiliary's label
    pub members: Vec<VarId>,
}

/// Objective and constraint set handed to an assignment backend
#[derive(Debug, Clone)]
pub struct BalanceModel {
    num_groups: u8,
    variables: Vec<DecisionVariable>,
    index: FxHashMap<String, VarId>,
    class_terms: Vec<ClassBalanceTerm>,
    subpopulation_terms: Vec<SubpopulationBalanceTerm>,
    constraints: Vec<SameGroupConstraint>,
}

impl BalanceModel {
    /// Start building a model for `num_groups` labels
    #[must_use]
    pub fn builder(num_groups: u8) -> BalanceModelBuilder {
        BalanceModelBuilder::new(num_groups)
    }

    /// Number of labels
    #[must_use]
    pub const fn num_groups(&self) -> u8 {
        self.num_groups
    }

    /// Decision variables in index order
    #[must_use]
    pub fn variables(&self) -> &[DecisionVariable] {
        &self.variables
    }

    /// Per-class variance terms of the objective
    #[must_use]
    pub fn class_terms(&self) -> &[ClassBalanceTerm] {
        &self.class_terms
    }

    /// Per-class sub-population deviation terms of the objective
    #[must_use]
    pub fn subpopulation_terms(&self) -> &[SubpopulationBalanceTerm] {
        &self.subpopulation_terms
    }

    /// Sibling equality constraints
    #[must_use]
    pub fn constraints(&self) -> &[SameGroupConstraint] {
        &self.constraints
    }

    /// Variable labeling the given individual
    #[must_use]
    pub fn var_for(&self, individual_id: &str) -> Option<VarId> {
        self.index.get(individual_id).copied()
    }

    /// Individual labeled by the given variable
    #[must_use]
    pub fn individual_for(&self, var: VarId) -> Option<&str> {
        self.variables.get(var.0).map(|v| v.individual_id.as_str())
    }

    /// Number of decision variables
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the model has no variables
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Objective value of the model under a concrete assignment
    #[must_use]
    pub fn evaluate(&self, assignment: &Assignment) -> f64 {
        let mut total = 0.0;
        for term in &self.class_terms {
            let counts = self.label_counts(assignment, &term.variables);
            total += term.weight * balance::sample_variance(&counts);
        }
        for term in &self.subpopulation_terms {
            let totals = self.label_counts(assignment, &term.variables);
            let subs = self.label_counts(assignment, &term.subpopulation);
            total += term.weight * balance::subpopulation_deviation(&totals, &subs);
        }
        total
    }

    /// Whether every equality constraint holds under an assignment
    #[must_use]
    pub fn satisfies_constraints(&self, assignment: &Assignment) -> bool {
        self.constraints.iter().all(|constraint| {
            let mut labels = constraint.members.iter().filter_map(|&var| {
                self.individual_for(var)
                    .and_then(|id| assignment.get(id))
            });
            match labels.next() {
                Some(first) => labels.all(|label| label == first),
                None => true,
            }
        })
    }

    fn label_counts(&self, assignment: &Assignment, vars: &[VarId]) -> SmallVec<[usize; 8]> {
        let mut counts: SmallVec<[usize; 8]> = smallvec![0; self.num_groups as usize];
        for &var in vars {
            let Some(id) = self.individual_for(var) else {
                continue;
            };
            if let Some(group) = assignment.get(id) {
                counts[group.index()] += 1;
            }
        }
        counts
    }
}

/// Builder assembling a [`BalanceModel`] from entity sets
#[derive(Debug)]
pub struct BalanceModelBuilder {
    num_groups: u8,
    weights: BalanceWeights,
    classes: Vec<Class>,
    clusters: Vec<SiblingCluster>,
    subpopulation: Option<FxHashSet<String>>,
    individuals: Vec<String>,
}

impl BalanceModelBuilder {
    fn new(num_groups: u8) -> Self {
        Self {
            num_groups,
            weights: BalanceWeights::default(),
            classes: Vec::new(),
            clusters: Vec::new(),
            subpopulation: None,
            individuals: Vec::new(),
        }
    }

    /// Set the objective weights
    #[must_use]
    pub fn weights(mut self, weights: BalanceWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Add classes whose label distribution the objective scores
    #[must_use]
    pub fn classes(mut self, classes: &[Class]) -> Self {
        self.classes.extend_from_slice(classes);
        self
    }

    /// Add sibling clusters enforced as equality constraints
    #[must_use]
    pub fn clusters(mut self, clusters: &[SiblingCluster]) -> Self {
        self.clusters.extend_from_slice(clusters);
        self
    }

    /// Set the sub-population scored by the deviation terms
    #[must_use]
    pub fn subpopulation(mut self, ids: FxHashSet<String>) -> Self {
        self.subpopulation = Some(ids);
        self
    }

    /// Add individuals that need a variable even without class membership
    #[must_use]
    pub fn individuals(mut self, ids: impl IntoIterator<Item = String>) -> Self {
        self.individuals.extend(ids);
        self
    }

    /// Assemble the model
    ///
    /// Variables are numbered in sorted identifier order, so equal inputs
    /// produce identical models. Cluster members without a variable are
    /// dropped from their constraint; constraints left with fewer than two
    /// variables are omitted.
    #[must_use]
    pub fn build(self) -> BalanceModel {
        let domain = if self.num_groups == 2 {
            VariableDomain::Binary
        } else {
            VariableDomain::Integer {
                upper: self.num_groups,
            }
        };

        let ids: Vec<String> = self
            .classes
            .iter()
            .flat_map(|class| class.members().iter().cloned())
            .chain(self.individuals.iter().cloned())
            .sorted()
            .dedup()
            .collect();

        let mut variables = Vec::with_capacity(ids.len());
        let mut index = FxHashMap::default();
        for (i, id) in ids.into_iter().enumerate() {
            let var = VarId(i);
            index.insert(id.clone(), var);
            variables.push(DecisionVariable {
                id: var,
                individual_id: id,
                domain,
            });
        }

        let mut class_terms = Vec::with_capacity(self.classes.len());
        let mut subpopulation_terms = Vec::new();
        for class in &self.classes {
            let vars: Vec<VarId> = class
                .members()
                .iter()
                .filter_map(|member| index.get(member).copied())
                .collect();
            if let Some(subpopulation) = &self.subpopulation {
                let sub_vars: Vec<VarId> = class
                    .members()
                    .iter()
                    .filter(|member| subpopulation.contains(*member))
                    .filter_map(|member| index.get(member).copied())
                    .collect();
                subpopulation_terms.push(SubpopulationBalanceTerm {
                    class_id: class.id.clone(),
                    variables: vars.clone(),
                    subpopulation: sub_vars,
                    weight: self.weights.secondary_weight,
                });
            }
            class_terms.push(ClassBalanceTerm {
                class_id: class.id.clone(),
                variables: vars,
                weight: self.weights.class_weight,
            });
        }

        let mut constraints = Vec::new();
        for cluster in &self.clusters {
            let vars: Vec<VarId> = cluster
                .members()
                .iter()
                .filter_map(|member| index.get(member).copied())
                .collect();
            if vars.len() >= 2 {
                constraints.push(SameGroupConstraint {
                    auxiliary: AuxId(constraints.len()),
                    members: vars,
                });
            }
        }

        BalanceModel {
            num_groups: self.num_groups,
            variables,
            index,
            class_terms,
            subpopulation_terms,
            constraints,
        }
    }
}
