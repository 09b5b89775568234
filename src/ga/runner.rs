//! Generation loop execution.
//!
//! [`solve`] drives one solve attempt:
//! initialization → evaluation → solved check → selection → crossover →
//! mutation → replacement → repeat.
//!
//! Replacement is generational: every generation builds a wholly new
//! population from the previous one, with no elites carried over.

use super::codec::{decode, render, Token};
use super::config::SolverConfig;
use super::fitness::{evaluate, is_perfect};
use super::operators::{crossover, mutate};
use super::selection::{roulette, total_fitness};
use super::types::Genome;
use crate::error::ConfigError;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Terminal state of a solve attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A genome evaluated to the target exactly.
    Solved {
        /// Generations elapsed before the solving population was evaluated.
        generations: usize,
        /// The winning genome (first perfect one in population order).
        genome: Genome,
        /// Its decoded token sequence.
        tokens: Vec<Token>,
        /// Its rendered expression, e.g. `" + 2 + 3"`.
        expression: String,
    },

    /// The generation counter exceeded `max_generations`.
    Failed {
        /// Value of the generation counter when the run stopped.
        generations: usize,
    },
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved { .. })
    }

    pub fn generations(&self) -> usize {
        match self {
            Outcome::Solved { generations, .. } | Outcome::Failed { generations } => *generations,
        }
    }
}

/// Per-generation fitness summary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation counter at evaluation time (0 for the initial population).
    pub generation: usize,

    /// Highest fitness in the population.
    pub best_fitness: f64,

    /// Mean fitness of the population.
    pub mean_fitness: f64,

    /// Sum of all fitness values, the roulette wheel size.
    pub total_fitness: f64,
}

/// Result of a solve attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// How the attempt ended.
    pub outcome: Outcome,

    /// One entry per evaluated population, in order.
    pub history: Vec<GenerationStats>,
}

/// Runs one solve attempt for `target` with an explicit random source.
///
/// The same `config` and an identically seeded `rng` always produce the
/// same result. `config` is expected to be valid; see
/// [`ExprGaRunner::run`] for a validating entry point.
///
/// # Panics
/// Panics if `config.population_size` is zero or `config.gene_length`
/// is outside `1..=8`.
pub fn solve<R: Rng>(target: i64, config: &SolverConfig, rng: &mut R) -> SolveResult {
    assert!(config.population_size > 0, "population must not be empty");

    // 1. Initialize population
    let mut population: Vec<Genome> = (0..config.population_size)
        .map(|_| Genome::random(config.chromosome_length, rng))
        .collect();

    let mut history = Vec::with_capacity(config.max_generations + 1);
    let mut generation = 0usize;

    loop {
        // 2. Evaluate
        evaluate_population(&mut population, target, config);
        let total = total_fitness(&population);
        let stats = summarize(&population, generation, total);
        debug!(
            "generation {}: best={:.6} mean={:.6} total={:.6}",
            stats.generation, stats.best_fitness, stats.mean_fitness, stats.total_fitness
        );
        history.push(stats);

        // 3. Solved check
        if let Some(winner) = population.iter().find(|g| is_perfect(g.fitness())) {
            let tokens = decode(winner.bits(), config.gene_length);
            let expression = render(&tokens);
            info!("target {target} solved in {generation} generations:{expression}");
            return SolveResult {
                outcome: Outcome::Solved {
                    generations: generation,
                    genome: winner.clone(),
                    tokens,
                    expression,
                },
                history,
            };
        }

        // 4. Reproduce from the evaluated snapshot
        population = next_generation(&population, total, config, rng);

        // 5. Replace
        generation += 1;
        if generation > config.max_generations {
            info!("target {target}: no solution within {} generations", config.max_generations);
            return SolveResult {
                outcome: Outcome::Failed {
                    generations: generation,
                },
                history,
            };
        }
    }
}

/// Builds the next population, two children per pair of roulette draws.
fn next_generation<R: Rng>(
    population: &[Genome],
    total: f64,
    config: &SolverConfig,
    rng: &mut R,
) -> Vec<Genome> {
    let mut next = Vec::with_capacity(config.population_size);
    let mut flips = 0usize;

    while next.len() < config.population_size {
        let p1 = roulette(population, total, rng);
        let p2 = roulette(population, total, rng);

        let (mut c1, mut c2) = crossover(
            population[p1].bits(),
            population[p2].bits(),
            config.crossover_rate,
            rng,
        );
        flips += mutate(&mut c1, config.mutation_rate, rng);
        flips += mutate(&mut c2, config.mutation_rate, rng);

        next.push(Genome::new(c1));
        next.push(Genome::new(c2));
    }

    // An odd size is rejected by validation; never overfill regardless.
    next.truncate(config.population_size);
    debug!("bred {} genomes, {flips} bits mutated", next.len());
    next
}

/// Evaluate all genomes in the population.
fn evaluate_population(population: &mut [Genome], target: i64, config: &SolverConfig) {
    #[cfg(feature = "parallel")]
    if config.parallel {
        use rayon::prelude::*;
        population.par_iter_mut().for_each(|genome| {
            let f = evaluate(&decode(genome.bits(), config.gene_length), target);
            genome.set_fitness(f);
        });
        return;
    }

    for genome in population.iter_mut() {
        let f = evaluate(&decode(genome.bits(), config.gene_length), target);
        genome.set_fitness(f);
    }
}

fn summarize(population: &[Genome], generation: usize, total: f64) -> GenerationStats {
    let best_fitness = population
        .iter()
        .map(Genome::fitness)
        .fold(f64::NEG_INFINITY, f64::max);
    GenerationStats {
        generation,
        best_fitness,
        mean_fitness: total / population.len() as f64,
        total_fitness: total,
    }
}

/// Validating entry point that owns its random source.
///
/// # Usage
///
/// ```
/// use u_exprga::ga::{ExprGaRunner, SolverConfig};
///
/// let config = SolverConfig::default().with_seed(42);
/// let result = ExprGaRunner::run(23, &config).unwrap();
/// assert!(result.outcome.generations() <= config.max_generations + 1);
/// ```
pub struct ExprGaRunner;

impl ExprGaRunner {
    /// Validates `config`, seeds an RNG from `config.seed` (or entropy)
    /// and runs [`solve`].
    pub fn run(target: i64, config: &SolverConfig) -> Result<SolveResult, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        Ok(solve(target, config, &mut rng))
    }
}

// ============================================================================
// Tests
// ============================================================================
