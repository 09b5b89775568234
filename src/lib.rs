//! Genetic-algorithm solver for the "hit the target number" puzzle.
//!
//! Given an integer target, evolves an expression such as `" + 6 * 7"`
//! over the operators `+ - * /` and single-digit operands, evaluated
//! strictly left to right, whose value equals the target.
//!
//! - **Genome**: a fixed-length bit string read as 4-bit genes.
//! - **Fitness**: `1 / |target - value|`, or `999.0` on an exact hit.
//! - **Evolution**: roulette-wheel selection, single-point crossover,
//!   per-bit mutation, full generational replacement.
//!
//! # Example
//!
//! ```
//! use u_exprga::ga::{solve, Outcome, SolverConfig};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let result = solve(12, &SolverConfig::default(), &mut rng);
//! if let Outcome::Solved { expression, .. } = &result.outcome {
//!     println!("found:{expression}");
//! }
//! ```

pub mod error;
pub mod ga;

pub use error::{ConfigError, ParseGenomeError};
