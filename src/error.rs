//! Error types.
//!
//! The evolutionary loop itself has no failure modes: grammar filtering,
//! the divide-by-zero rewrite and the generation cap are all defined
//! behavior. Errors only arise from invalid configuration or from parsing
//! a genome out of text.

use thiserror::Error;

/// A [`SolverConfig`](crate::ga::SolverConfig) parameter is out of range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("population_size must be even, got {0}")]
    PopulationOdd(usize),

    #[error("gene_length must be between 4 and 8 bits, got {0}")]
    GeneLength(usize),

    #[error("chromosome_length {chromosome_length} must be a positive multiple of gene_length {gene_length}")]
    ChromosomeLength {
        chromosome_length: usize,
        gene_length: usize,
    },

    #[error("{name} must be within [0, 1], got {value}")]
    Rate { name: &'static str, value: f64 },
}

/// A genome string contained something other than `0` and `1`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid bit {found:?} at position {position}")]
pub struct ParseGenomeError {
    pub position: usize,
    pub found: char,
}
