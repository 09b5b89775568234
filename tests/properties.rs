//! Property-based and end-to-end tests for u-exprga
//!
//! Uses proptest to verify invariants of the codec and the genetic operators.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_exprga::ga::codec::rewrite_division_by_zero;
use u_exprga::ga::operators::{crossover, mutate};
use u_exprga::ga::selection::{roulette, total_fitness};
use u_exprga::ga::{
    decode, evaluate, render, solve, Genome, Operator, Outcome, SolverConfig, Token,
    PERFECT_FITNESS,
};

/// Builds a bit vector from 4-bit gene values.
fn from_genes(values: &[u8]) -> Vec<bool> {
    values
        .iter()
        .flat_map(|&v| (0..4).rev().map(move |i| (v >> i) & 1 == 1))
        .collect()
}

proptest! {
    // ==================== Codec Properties ====================

    #[test]
    fn decode_length_bounded(bits in prop::collection::vec(any::<bool>(), 0..400)) {
        let tokens = decode(&bits, 4);
        prop_assert!(tokens.len() <= bits.len() / 4);
    }

    #[test]
    fn decode_alternates_starting_with_operator(bits in prop::collection::vec(any::<bool>(), 0..400)) {
        let tokens = decode(&bits, 4);
        for (i, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.is_operator(), i % 2 == 0);
            match token {
                Token::Op(op) => prop_assert!((10..=13).contains(&op.code())),
                Token::Digit(d) => prop_assert!(*d <= 9),
            }
        }
    }

    #[test]
    fn decode_never_divides_by_zero(bits in prop::collection::vec(any::<bool>(), 0..400)) {
        let tokens = decode(&bits, 4);
        for pair in tokens.windows(2) {
            prop_assert!(
                !(pair[0] == Token::Op(Operator::Divide) && pair[1] == Token::Digit(0))
            );
        }
    }

    #[test]
    fn decode_is_deterministic(bits in prop::collection::vec(any::<bool>(), 0..400)) {
        prop_assert_eq!(decode(&bits, 4), decode(&bits, 4));
    }

    #[test]
    fn rewrite_is_idempotent(bits in prop::collection::vec(any::<bool>(), 0..400)) {
        let mut tokens = decode(&bits, 4);
        prop_assert_eq!(rewrite_division_by_zero(&mut tokens), 0);
    }

    #[test]
    fn fitness_within_bounds(
        bits in prop::collection::vec(any::<bool>(), 0..400),
        target in -1000i64..1000
    ) {
        let fitness = evaluate(&decode(&bits, 4), target);
        prop_assert!(fitness >= 0.0);
        prop_assert!(fitness <= PERFECT_FITNESS);
    }

    // ==================== Operator Properties ====================

    #[test]
    fn crossover_preserves_length(
        (p1, p2) in (1usize..400).prop_flat_map(|n| (
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(any::<bool>(), n),
        )),
        rate in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (c1, c2) = crossover(&p1, &p2, rate, &mut rng);
        prop_assert_eq!(c1.len(), p1.len());
        prop_assert_eq!(c2.len(), p1.len());
    }

    #[test]
    fn mutation_preserves_length(
        mut bits in prop::collection::vec(any::<bool>(), 0..400),
        rate in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let original = bits.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        let flipped = mutate(&mut bits, rate, &mut rng);
        prop_assert_eq!(bits.len(), original.len());
        let diff = bits.iter().zip(&original).filter(|(a, b)| a != b).count();
        prop_assert_eq!(diff, flipped);
    }

    #[test]
    fn roulette_stays_in_population(
        fitnesses in prop::collection::vec(0.0f64..999.0, 1..50),
        seed in any::<u64>()
    ) {
        let population: Vec<Genome> = fitnesses
            .iter()
            .map(|&f| {
                let mut g = Genome::new(vec![true; 4]);
                g.set_fitness(f);
                g
            })
            .collect();
        let total = total_fitness(&population);
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..20 {
            prop_assert!(roulette(&population, total, &mut rng) < population.len());
        }
    }
}

// ==================== End-to-End Scenarios ====================

#[test]
fn scenario_exact_match() {
    let tokens = decode(&from_genes(&[10, 2, 10, 3]), 4);
    assert_eq!(evaluate(&tokens, 5), PERFECT_FITNESS);
    assert_eq!(render(&tokens), " + 2 + 3");
}

#[test]
fn scenario_inverse_distance() {
    let tokens = decode(&from_genes(&[10, 2, 10, 2]), 4);
    assert!((evaluate(&tokens, 5) - 1.0).abs() < 1e-12);
}

#[test]
fn scenario_division_by_zero_rewrite() {
    let tokens = decode(&from_genes(&[13, 7, 13, 0]), 4);
    assert_eq!(
        tokens,
        vec![
            Token::Op(Operator::Divide),
            Token::Digit(7),
            Token::Op(Operator::Add),
            Token::Digit(0),
        ]
    );
    // 0 / 7 + 0
    assert_eq!(evaluate(&tokens, 0), PERFECT_FITNESS);
}

#[test]
fn scenario_genome_text_round_trip_through_codec() {
    let genome: Genome = "1111101000100110001101011010".parse().unwrap();
    // 15 skip, 10 '+', 2, 6 skip, 3 skip, 5 skip, 10 '+'
    assert_eq!(render(&decode(genome.bits(), 4)), " + 2 + ");
}

#[test]
fn full_run_terminates_and_is_deterministic() {
    let config = SolverConfig::default();
    assert_eq!(config.population_size, 100);
    assert_eq!(config.chromosome_length, 300);
    assert_eq!(config.max_generations, 400);

    let first = solve(63, &config, &mut StdRng::seed_from_u64(77));
    let second = solve(63, &config, &mut StdRng::seed_from_u64(77));
    assert_eq!(first, second);

    match &first.outcome {
        Outcome::Solved {
            generations,
            tokens,
            ..
        } => {
            assert!(*generations <= config.max_generations);
            assert_eq!(evaluate(tokens, 63), PERFECT_FITNESS);
        }
        Outcome::Failed { generations } => {
            assert_eq!(*generations, config.max_generations + 1);
        }
    }
}
