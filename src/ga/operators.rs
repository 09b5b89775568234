//! Bit-string genetic operators.
//!
//! - [`crossover`]: single-point crossover, gated by the crossover rate, O(n)
//! - [`mutate`]: independent per-bit flip mutation, O(n)
//!
//! Both operate on plain `bool` slices and preserve length.

use rand::Rng;

/// Single-point crossover.
///
/// With probability `rate`, picks a cut point uniformly in `[0, n)` and
/// returns `(p1[..cut] ++ p2[cut..], p2[..cut] ++ p1[cut..])`. Otherwise
/// returns copies of the parents.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rate: f64,
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n == 0 || rng.random::<f64>() >= rate {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(0..n);
    (splice(parent1, parent2, cut), splice(parent2, parent1, cut))
}

fn splice(head: &[bool], tail: &[bool], cut: usize) -> Vec<bool> {
    let mut child = Vec::with_capacity(head.len());
    child.extend_from_slice(&head[..cut]);
    child.extend_from_slice(&tail[cut..]);
    child
}

/// Flips each bit independently with probability `rate`.
///
/// Returns the number of bits flipped.
pub fn mutate<R: Rng>(bits: &mut [bool], rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for bit in bits.iter_mut() {
        if rng.random::<f64>() < rate {
            *bit = !*bit;
            flipped += 1;
        }
    }
    flipped
}
