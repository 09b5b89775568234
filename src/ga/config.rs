//! Solver configuration.
//!
//! [`SolverConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for the expression solver.
///
/// Controls population size, genome geometry, operator rates,
/// the generation cap, and parallelism.
///
/// # Defaults
///
/// ```
/// use u_exprga::ga::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.chromosome_length, 300);
/// assert_eq!(config.max_generations, 400);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_exprga::ga::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_population_size(200)
///     .with_crossover_rate(0.8)
///     .with_mutation_rate(0.01)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Probability of applying single-point crossover to a parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, both children are copies of their parents.
    pub crossover_rate: f64,

    /// Per-bit flip probability applied to every child (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of genomes in the population. Must be even, since
    /// offspring are produced in pairs.
    pub population_size: usize,

    /// Number of bits per genome. Must be a multiple of `gene_length`.
    pub chromosome_length: usize,

    /// Number of bits per gene.
    ///
    /// Operators use the gene values 10–13, so at least 4 bits are needed.
    pub gene_length: usize,

    /// The run fails once the generation counter exceeds this value.
    pub max_generations: usize,

    /// Whether to evaluate genomes in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature enabled. Evaluation
    /// never touches the random source, so results are identical.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            crossover_rate: 0.7,
            mutation_rate: 0.001,
            population_size: 100,
            chromosome_length: 300,
            gene_length: 4,
            max_generations: 400,
            parallel: false,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the genome length in bits.
    pub fn with_chromosome_length(mut self, bits: usize) -> Self {
        self.chromosome_length = bits;
        self
    }

    /// Sets the gene width in bits.
    pub fn with_gene_length(mut self, bits: usize) -> Self {
        self.gene_length = bits;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The classic tutorial parameters. Same as [`Default`].
    pub fn classic() -> Self {
        Self::default()
    }

    /// Preset for smoke tests and quick experiments.
    ///
    /// - Population: 40, Genome: 80 bits (20 genes), Generations: 100
    pub fn quick() -> Self {
        Self {
            population_size: 40,
            chromosome_length: 80,
            max_generations: 100,
            ..Self::default()
        }
    }

    /// Number of genes per genome.
    pub fn genes_per_genome(&self) -> usize {
        self.chromosome_length / self.gene_length.max(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::PopulationOdd(self.population_size));
        }
        if !(4..=8).contains(&self.gene_length) {
            return Err(ConfigError::GeneLength(self.gene_length));
        }
        if self.chromosome_length == 0 || self.chromosome_length % self.gene_length != 0 {
            return Err(ConfigError::ChromosomeLength {
                chromosome_length: self.chromosome_length,
                gene_length: self.gene_length,
            });
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Rate { name, value });
            }
        }
        Ok(())
    }
}
