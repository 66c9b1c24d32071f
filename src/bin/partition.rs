//! Heuristic group partitioning over a class membership map
//!
//! Reads a JSON object mapping class name to member list, runs the greedy
//! local search, and writes the assignment plus a Graphviz rendering of
//! the membership graph. An optional roster enables the sub-population
//! balance term and the statistics report.

use clap::Parser;
use group_balancer::algorithm::partition::PartitionConfig;
use group_balancer::{Gender, GreedyPartitioner, MovePolicy, export, registry};
use log::info;
use std::path::PathBuf;

/// Greedy group partitioner
#[derive(Parser, Debug)]
#[clap(name = "partition")]
#[clap(about = "Assign individuals to balanced groups with a greedy local search")]
struct Args {
    /// JSON file mapping class name to member list
    classes: PathBuf,

    /// Number of groups to partition into
    #[clap(long, default_value = "3")]
    groups: u8,

    /// Iteration budget for the search
    #[clap(long, default_value = "100")]
    iterations: usize,

    /// Move policy: unconditional or improving
    #[clap(long, default_value = "unconditional")]
    policy: MovePolicy,

    /// Stop early once no class imbalance exceeds this tolerance
    #[clap(long, default_value = "0.0")]
    tolerance: f64,

    /// Seed for reproducible runs
    #[clap(long)]
    seed: Option<u64>,

    /// Individual roster table (CSV); enables the sub-population balance term
    #[clap(long, value_name = "FILE")]
    roster: Option<PathBuf>,

    /// Sibling pair table (CSV); enforced when --respect-siblings is set
    #[clap(long, value_name = "FILE", requires = "roster")]
    siblings: Option<PathBuf>,

    /// Relabel whole sibling clusters so they stay on one shared label
    #[clap(long)]
    respect_siblings: bool,

    /// Assignment export path (JSON)
    #[clap(long, value_name = "FILE", default_value = "assignments.json")]
    assignments: PathBuf,

    /// Statistics export path; needs --roster
    #[clap(long, value_name = "FILE", requires = "roster")]
    stats: Option<PathBuf>,

    /// Graphviz export path
    #[clap(long, value_name = "FILE", default_value = "output.dot")]
    graph: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut classes = registry::load_class_map(&args.classes)?;

    let roster = match &args.roster {
        Some(path) => {
            let roster = registry::load_students(path, None)?;
            registry::retain_known_members(&mut classes, &roster);
            Some(roster)
        }
        None => None,
    };

    let mut config = PartitionConfig::builder()
        .num_groups(args.groups)
        .iterations(args.iterations)
        .move_policy(args.policy)
        .tolerance(args.tolerance)
        .respect_siblings(args.respect_siblings)
        .build();
    config.random_seed = args.seed;

    let mut partitioner = GreedyPartitioner::new(classes.clone(), config)?;
    if let Some(path) = &args.siblings {
        let clusters = registry::load_sibling_pairs(path, roster.as_ref())?;
        partitioner = partitioner.with_clusters(clusters);
    }
    if let Some(roster) = &roster {
        partitioner = partitioner.with_subpopulation(roster.subpopulation(Gender::Female));
    }

    let result = partitioner.run();

    info!(
        "Final imbalance {:.4} (started at {:.4})",
        result.summary.final_imbalance, result.summary.initial_imbalance
    );

    export::write_assignments_json(&args.assignments, &result.assignment)?;
    export::write_graphviz(&args.graph, &result.assignment, &classes)?;
    if let (Some(path), Some(roster)) = (&args.stats, &roster) {
        export::write_statistics(path, &result.assignment, &classes, roster)?;
    }

    Ok(())
}
