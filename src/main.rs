//! knapsack-anneal: generates a random 50-item knapsack instance and
//! searches it by simulated annealing, printing progress per iteration
//! and the final item table.

use clap::Parser;
use knapsack_anneal::knapsack::ProblemInstance;
use knapsack_anneal::sa::{AnnealConfig, AnnealingEngine};
use knapsack_anneal::AnnealError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "knapsack-anneal")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum total weight of the knapsack
    #[arg(long)]
    capacity: u64,

    /// Item weights are drawn from [0, MAX_WEIGHT_ITEM)
    #[arg(long)]
    max_weight_item: u64,

    /// Item values are drawn from [0, MAX_VALUE_ITEM)
    #[arg(long)]
    max_value_item: u64,

    #[arg(long, default_value_t = 100)]
    iterations: usize,

    #[arg(long, default_value_t = 40000.0)]
    start_temp: f64,

    #[arg(long, default_value_t = 0.001)]
    end_temp: f64,

    /// Candidate evaluations per iteration
    #[arg(long, default_value_t = 100)]
    cycles: usize,

    /// Seed for both instance generation and the search
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), AnnealError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let instance = ProblemInstance::random(
        args.capacity,
        args.max_weight_item,
        args.max_value_item,
        &mut rng,
    )?;

    let config = AnnealConfig::default()
        .with_max_iterations(args.iterations)
        .with_start_temperature(args.start_temp)
        .with_end_temperature(args.end_temp)
        .with_cycles_per_iteration(args.cycles);
    let mut engine = AnnealingEngine::with_rng(config, instance, rng)?;

    loop {
        let progress = engine.run_iteration();
        println!(
            "Iteration #{} Best Value:{}",
            progress.iteration, progress.best_score
        );
        if progress.done {
            break;
        }
    }

    let report = engine.report();
    println!("item\tvalue\tweight\ttaking");
    for row in &report.items {
        println!(
            "{}\t{}\t{}\t{}",
            row.index + 1,
            row.value,
            row.weight,
            row.included_in_best
        );
    }
    println!(
        "best value {} at weight {}/{}",
        report.best_score, report.best_weight, report.capacity
    );

    Ok(())
}
