//! Fitness evaluation.
//!
//! An expression is folded left to right from `0.0`, one complete
//! `(operator, digit)` pair at a time. There is no precedence:
//! `" + 2 + 3 * 4"` is `((0 + 2) + 3) * 4 = 20`.
//!
//! Fitness is `1 / |target - value|`, or [`PERFECT_FITNESS`] on an exact hit.

use super::codec::{decode, Token};

/// Fitness of an exact solution.
pub const PERFECT_FITNESS: f64 = 999.0;

/// Upper bound for any non-exact fitness.
///
/// Results such as `4 / 3 + 1 * 3` (`6.999999999999999`) land a rounding
/// error away from an integer target, which would otherwise score far
/// above [`PERFECT_FITNESS`].
pub const MAX_PARTIAL_FITNESS: f64 = PERFECT_FITNESS - 1.0;

/// Computes the value of a token sequence.
///
/// A trailing operator without a digit is ignored; an empty sequence is `0.0`.
pub fn expression_value(tokens: &[Token]) -> f64 {
    tokens
        .chunks_exact(2)
        .fold(0.0, |acc, pair| match (pair[0], pair[1]) {
            (Token::Op(op), Token::Digit(d)) => op.apply(acc, f64::from(d)),
            _ => acc,
        })
}

/// Scores a token sequence against `target`.
///
/// Non-finite values score `0.0`.
pub fn evaluate(tokens: &[Token], target: i64) -> f64 {
    let value = expression_value(tokens);
    // i64 → f64 is exact for every target a console can reasonably supply.
    let target = target as f64;

    if !value.is_finite() {
        return 0.0;
    }
    if value == target {
        return PERFECT_FITNESS;
    }
    (1.0 / (target - value).abs()).min(MAX_PARTIAL_FITNESS)
}

/// Decodes `bits` and scores the result against `target`.
pub fn fitness_of(bits: &[bool], gene_length: usize, target: i64) -> f64 {
    evaluate(&decode(bits, gene_length), target)
}

/// Returns `true` if `fitness` marks an exact solution.
pub fn is_perfect(fitness: f64) -> bool {
    fitness == PERFECT_FITNESS
}
