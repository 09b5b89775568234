//! Genome representation.
//!
//! A [`Genome`] is a fixed-length bit vector paired with its last computed
//! fitness. The bits are the only heritable material; fitness is derived
//! from them and reset whenever a genome is rebuilt by reproduction.

use crate::error::ParseGenomeError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A candidate solution: a fixed-length bit string and its fitness.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    bits: Vec<bool>,
    fitness: f64,
}

impl Genome {
    /// Wraps existing bits with zero fitness.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits, fitness: 0.0 }
    }

    /// Creates a genome of `length` independently uniform random bits.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let bits = (0..length).map(|_| rng.random_bool(0.5)).collect();
        Self::new(bits)
    }

    /// The genome's bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the genome has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Last computed fitness (0.0 until evaluated).
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Stores a computed fitness.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Iterates over complete genes of `gene_length` bits.
    ///
    /// A trailing partial gene is not yielded.
    pub fn genes(&self, gene_length: usize) -> std::slice::ChunksExact<'_, bool> {
        self.bits.chunks_exact(gene_length)
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Genome {
    type Err = ParseGenomeError;

    /// Parses a string of `0` and `1` characters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(ParseGenomeError { position, found }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(bits))
    }
}
