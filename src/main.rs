//! u-exprga CLI - evolve an arithmetic expression that hits a target number.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use u_exprga::ga::{ExprGaRunner, Outcome, SolveResult, SolverConfig};

/// Evolve a left-to-right expression over single digits and + - * /
/// whose value equals TARGET.
#[derive(Parser, Debug)]
#[command(name = "u-exprga")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Target number. Omit to be prompted repeatedly on stdin.
    #[arg(allow_negative_numbers = true)]
    target: Option<i64>,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Genomes per generation (must be even)
    #[arg(short, long, default_value = "100")]
    population_size: usize,

    /// Bits per genome (multiple of 4)
    #[arg(short, long, default_value = "300")]
    chromosome_length: usize,

    /// Generation cap
    #[arg(short, long, default_value = "400")]
    max_generations: usize,

    /// Probability of crossover per parent pair
    #[arg(long, default_value = "0.7")]
    crossover_rate: f64,

    /// Probability of flipping each bit
    #[arg(long, default_value = "0.001")]
    mutation_rate: f64,

    /// Evaluate genomes on all cores (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Only print the outcome line
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> SolverConfig {
        let mut config = SolverConfig::default()
            .with_population_size(self.population_size)
            .with_chromosome_length(self.chromosome_length)
            .with_max_generations(self.max_generations)
            .with_crossover_rate(self.crossover_rate)
            .with_mutation_rate(self.mutation_rate)
            .with_parallel(self.parallel);
        config.seed = self.seed;
        config
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.config();
    config.validate().context("invalid solver configuration")?;

    match args.target {
        Some(target) => run_once(target, &config, args.quiet),
        None => prompt_loop(&config, args.quiet),
    }
}

/// Asks for targets until stdin closes.
fn prompt_loop(config: &SolverConfig, quiet: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Input a target number: ");
        io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("failed to read target from stdin")?;

        match line.trim().parse::<i64>() {
            Ok(target) => {
                run_once(target, config, quiet)?;
                println!();
            }
            Err(_) => println!("Unable to parse, ensure you typed a number."),
        }
    }
}

fn run_once(target: i64, config: &SolverConfig, quiet: bool) -> Result<()> {
    let result = ExprGaRunner::run(target, config).context("invalid solver configuration")?;
    report(&result, quiet);
    Ok(())
}

fn report(result: &SolveResult, quiet: bool) {
    match &result.outcome {
        Outcome::Solved {
            generations,
            expression,
            ..
        } => {
            println!("Solution found in {generations} generations!");
            println!("{expression}");
        }
        Outcome::Failed { .. } => println!("No solutions found this run!  :("),
    }

    if !quiet {
        if let Some(last) = result.history.last() {
            println!(
                "generations evaluated: {}, final best fitness: {:.6}, mean: {:.6}",
                result.history.len(),
                last.best_fitness,
                last.mean_fitness
            );
        }
    }
}
