//! Expression-matching genetic algorithm.
//!
//! Evolves fixed-length bit strings whose decoded form is an arithmetic
//! expression over single digits, until the expression evaluates exactly to
//! a target integer or a generation cap is exceeded.
//!
//! # Pipeline
//!
//! - [`codec`]: bit string → alternating operator/digit tokens → text
//! - [`fitness`]: left-to-right evaluation and inverse-distance scoring
//! - [`selection`]: fitness-proportionate (roulette wheel) parent draws
//! - [`operators`]: single-point crossover and per-bit mutation
//!
//! # Key Types
//!
//! - [`SolverConfig`]: Algorithm parameters (rates, sizes, generation cap)
//! - [`solve`] / [`ExprGaRunner`]: Executes the generation loop
//! - [`SolveResult`]: Outcome plus per-generation statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

pub mod codec;
mod config;
pub mod fitness;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use codec::{decode, render, Operator, Token};
pub use config::SolverConfig;
pub use fitness::{evaluate, PERFECT_FITNESS};
pub use runner::{solve, ExprGaRunner, GenerationStats, Outcome, SolveResult};
pub use types::Genome;
