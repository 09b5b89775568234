//! Fitness-proportionate (roulette wheel) selection.
//!
//! Higher fitness is better. Each genome occupies a slice of the wheel
//! proportional to its fitness; a genome with zero fitness has no slice
//! and cannot be drawn unless the wheel itself is degenerate.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1

use super::types::Genome;
use rand::Rng;

/// Selects a parent index by roulette wheel.
///
/// Draws `r` uniformly from `[0, total_fitness)` and returns the first
/// index whose running fitness sum reaches `r`. `total_fitness` is the sum
/// already computed for this generation and is not recomputed here.
///
/// # Fallback
///
/// If `total_fitness` is not a positive finite number, or rounding keeps
/// the running sum below `r` for the whole scan, the last index is returned.
///
/// # Complexity
/// O(n) per selection (linear scan)
///
/// # Panics
/// Panics if `population` is empty.
pub fn roulette<R: Rng>(population: &[Genome], total_fitness: f64, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let last = population.len() - 1;

    if !(total_fitness.is_finite() && total_fitness > 0.0) {
        return last;
    }

    let slice = rng.random_range(0.0..total_fitness);
    let mut fitness_so_far = 0.0;
    for (i, genome) in population.iter().enumerate() {
        let fitness = genome.fitness();
        fitness_so_far += fitness;
        // Skipping zero-fitness genomes keeps them off the wheel when r == 0.
        if fitness > 0.0 && fitness_so_far >= slice {
            return i;
        }
    }

    last // floating-point fallback
}

/// Sums the fitness of every genome.
pub fn total_fitness(population: &[Genome]) -> f64 {
    population.iter().map(Genome::fitness).sum()
}
