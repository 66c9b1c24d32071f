//! Exact-path group assignment over student, sibling, and schedule tables
//!
//! Builds the symbolic balance model (one variable per student, variance
//! terms per class, sibling equality constraints) and hands it to the
//! bundled greedy backend, then writes the assignment table and balance
//! statistics.

use anyhow::bail;
use clap::Parser;
use group_balancer::solver::ExactSolver;
use group_balancer::{
    BalanceModel, Gender, HeuristicSolver, SolverOptions, export, registry,
};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Duration;

/// Exact-path group assignment
#[derive(Parser, Debug)]
#[clap(name = "assign")]
#[clap(about = "Assign individuals to balanced groups from roster tables")]
struct Args {
    /// Student roster table (CSV)
    students: PathBuf,

    /// Sibling relation table (CSV)
    siblings: PathBuf,

    /// Schedule table (CSV)
    schedule: PathBuf,

    /// Number of groups to partition into
    #[clap(long, default_value = "2")]
    groups: u8,

    /// Worker threads for the backend
    #[clap(long, default_value_t = num_cpus::get())]
    threads: usize,

    /// Time limit for the solve call, in seconds
    #[clap(long, default_value = "60")]
    time_limit: u64,

    /// Seed for reproducible runs
    #[clap(long)]
    seed: Option<u64>,

    /// Only keep roster rows with one of these grades (repeatable)
    #[clap(long = "grades", value_name = "GRADE")]
    grades: Vec<String>,

    /// Assignment export path (TSV)
    #[clap(long, value_name = "FILE", default_value = "assignments.tsv")]
    assignments: PathBuf,

    /// Statistics export path
    #[clap(long, value_name = "FILE", default_value = "balance_stats.txt")]
    stats: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let grades: Vec<&str> = args.grades.iter().map(String::as_str).collect();
    let accepted = if grades.is_empty() {
        None
    } else {
        Some(grades.as_slice())
    };

    let roster = registry::load_students(&args.students, accepted)?;
    let clusters = registry::load_sibling_pairs(&args.siblings, Some(&roster))?;
    let mut classes = registry::load_schedule(&args.schedule)?;
    registry::retain_known_members(&mut classes, &roster);

    let model = BalanceModel::builder(args.groups)
        .classes(&classes)
        .clusters(&clusters)
        .subpopulation(roster.subpopulation(Gender::Female))
        .individuals(roster.ids_sorted().into_iter().map(str::to_owned))
        .build();
    info!(
        "Model: {} variable(s), {} class term(s), {} sub-population term(s), {} constraint(s)",
        model.len(),
        model.class_terms().len(),
        model.subpopulation_terms().len(),
        model.constraints().len()
    );

    let threads = args.threads.min(num_cpus::get());
    if threads < args.threads {
        debug!("Capping backend threads at the {threads} available CPUs");
    }
    let options = SolverOptions {
        threads,
        time_limit: Duration::from_secs(args.time_limit),
        random_seed: args.seed,
    };

    let mut backend = HeuristicSolver::default();
    info!("Solving with the {} backend", backend.name());
    let outcome = backend.solve(&model, &options)?;

    info!("Solver status: {}", outcome.status());
    let Some(assignment) = outcome.assignment() else {
        bail!("no usable assignment (status {})", outcome.status());
    };

    if let Some(objective) = outcome.objective() {
        info!("Objective value: {objective:.4}");
    }
    if !model.satisfies_constraints(assignment) {
        warn!("Assignment violates a sibling constraint");
    }

    export::write_assignments_tsv(&args.assignments, assignment, &roster)?;
    export::write_statistics(&args.stats, assignment, &classes, &roster)?;

    Ok(())
}
