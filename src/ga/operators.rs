//! Bit-string variation and replacement operators.
//!
//! # Crossover
//!
//! - [`crossover`]: one-point crossover over consecutive parent pairs
//!
//! # Mutation
//!
//! - [`mutation`]: independent bit-flip with per-bit probability `1/n`
//!
//! # Replacement
//!
//! - [`replacement`]: full generational replacement
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::config::check_mutation_rate;
use super::error::GaError;
use super::types::Population;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// One-point crossover over consecutive pairs `(0, 1), (2, 3), ...`.
///
/// Each pair is crossed with probability `crossover_rate`: a point `k` is
/// drawn uniformly from `[0, n)` and the suffixes `[k, n)` are exchanged.
/// Uncrossed pairs are left untouched. Order and size are preserved.
///
/// A trailing chromosome without a partner (odd population) passes through
/// unchanged.
///
/// # Panics
/// Panics if `crossover_rate` is outside `[0, 1]`.
pub fn crossover<R: Rng>(mut parents: Population, crossover_rate: f64, rng: &mut R) -> Population {
    let n = parents.chromosome_length();
    if n == 0 {
        return parents;
    }

    for pair in parents.as_mut_slice().chunks_exact_mut(2) {
        if rng.random_bool(crossover_rate) {
            let point = rng.random_range(0..n);
            let (first, second) = pair.split_at_mut(1);
            first[0].swap_suffix(&mut second[0], point);
        }
    }
    parents
}

// ============================================================================
// Mutation
// ============================================================================

/// Bit-flip mutation.
///
/// For every chromosome a mask is drawn with each bit set with probability
/// `mutation_rate`, then XORed into the chromosome.
///
/// # Errors
/// Returns [`GaError::MutationRateMismatch`] unless `mutation_rate` is
/// exactly `1 / n` for the population's chromosome length `n`.
pub fn mutation<R: Rng>(
    mut population: Population,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<Population, GaError> {
    let n = population.chromosome_length();
    check_mutation_rate(mutation_rate, n)?;

    let mut mask = vec![0u8; n];
    for chromosome in population.as_mut_slice() {
        fill_mask(&mut mask, mutation_rate, rng);
        chromosome.flip(&mask);
    }
    Ok(population)
}

/// Sets each entry of `mask` to 1 with probability `p`, else 0.
fn fill_mask<R: Rng>(mask: &mut [u8], p: f64, rng: &mut R) {
    for m in mask.iter_mut() {
        *m = u8::from(rng.random_bool(p));
    }
}

// ============================================================================
// Variation and replacement
// ============================================================================

/// Crossover followed by mutation, in that order.
pub fn variation<R: Rng>(
    parents: Population,
    crossover_rate: f64,
    mutation_rate: f64,
    rng: &mut R,
) -> Result<Population, GaError> {
    mutation(crossover(parents, crossover_rate, rng), mutation_rate, rng)
}

/// Full replacement: the offspring become the next generation as-is.
pub fn replacement(children: Population) -> Population {
    children
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::types::Chromosome;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn zeros_and_ones(pairs: usize, len: usize) -> Population {
        let chromosomes = (0..pairs * 2)
            .map(|i| Chromosome::new(vec![(i % 2) as u8; len]))
            .collect();
        Population::from_chromosomes(chromosomes).unwrap()
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_zero_rate_is_identity() {
        let mut rng = create_rng(42);
        let pop = Population::random(10, 8, &mut rng);
        let out = crossover(pop.clone(), 0.0, &mut rng);
        assert_eq!(out, pop);
    }

    #[test]
    fn test_crossover_full_rate_swaps_every_pair() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let out = crossover(zeros_and_ones(5, 8), 1.0, &mut rng);
            assert_eq!(out.len(), 10);

            for pair in out.as_slice().chunks_exact(2) {
                let (a, b) = (&pair[0], &pair[1]);
                // a = 0^k 1^(n-k), b = 1^k 0^(n-k) for some k in [0, n)
                let k = a.bits().iter().take_while(|&&bit| bit == 0).count();
                assert!(k < 8, "crossover point must lie in [0, n)");
                assert!(a.bits()[k..].iter().all(|&bit| bit == 1));
                assert!(b.bits()[..k].iter().all(|&bit| bit == 1));
                assert!(b.bits()[k..].iter().all(|&bit| bit == 0));
            }
        }
    }

    #[test]
    fn test_crossover_conserves_bits_per_locus() {
        let mut rng = create_rng(9);
        let pop = Population::random(10, 12, &mut rng);
        let out = crossover(pop.clone(), 0.6, &mut rng);

        for (before, after) in pop.as_slice().chunks_exact(2).zip(out.as_slice().chunks_exact(2)) {
            for locus in 0..12 {
                let sum_before = before[0].bits()[locus] + before[1].bits()[locus];
                let sum_after = after[0].bits()[locus] + after[1].bits()[locus];
                assert_eq!(sum_before, sum_after);
            }
        }
    }

    #[test]
    fn test_crossover_odd_population_keeps_last() {
        let mut rng = create_rng(1);
        let mut chromosomes = zeros_and_ones(2, 6).into_chromosomes();
        chromosomes.push(Chromosome::new(vec![1, 0, 1, 0, 1, 0]));
        let pop = Population::from_chromosomes(chromosomes).unwrap();

        let out = crossover(pop, 1.0, &mut rng);
        assert_eq!(out.len(), 5);
        assert_eq!(out[4].bits(), &[1, 0, 1, 0, 1, 0]);
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_rejects_wrong_rate() {
        let mut rng = create_rng(42);
        let pop = Population::random(10, 8, &mut rng);
        let err = mutation(pop, 0.5, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GaError::MutationRateMismatch {
                chromosome_length: 8,
                ..
            }
        ));
    }

    #[test]
    fn test_mutation_preserves_shape() {
        let mut rng = create_rng(42);
        let pop = Population::random(10, 8, &mut rng);
        let out = mutation(pop, 0.125, &mut rng).unwrap();
        assert_eq!(out.len(), 10);
        assert_eq!(out.chromosome_length(), 8);
        assert!(out.iter().all(|c| c.bits().iter().all(|&b| b <= 1)));
    }

    #[test]
    fn test_mutation_flips_one_bit_on_average() {
        let mut rng = create_rng(42);
        let pop = Population::from_chromosomes(vec![Chromosome::new(vec![0; 8]); 1000]).unwrap();

        let trials = 20;
        let mut flipped = 0usize;
        for _ in 0..trials {
            let out = mutation(pop.clone(), 0.125, &mut rng).unwrap();
            flipped += out.fitnesses().iter().sum::<usize>();
        }
        let mean = flipped as f64 / (trials * 1000) as f64;
        assert!((mean - 1.0).abs() < 0.05, "mean flips per chromosome was {mean}");
    }

    #[test]
    fn test_mutation_full_rate_inverts_single_bit() {
        let mut rng = create_rng(42);
        let pop = Population::from_chromosomes(vec![
            Chromosome::new(vec![0]),
            Chromosome::new(vec![1]),
        ])
        .unwrap();
        let out = mutation(pop, 1.0, &mut rng).unwrap();
        assert_eq!(out[0].bits(), &[1]);
        assert_eq!(out[1].bits(), &[0]);
    }

    // ---- Variation / replacement ----

    #[test]
    fn test_variation_propagates_mutation_error() {
        let mut rng = create_rng(42);
        let pop = Population::random(4, 8, &mut rng);
        assert!(variation(pop, 0.6, 0.5, &mut rng).is_err());
    }

    #[test]
    fn test_replacement_is_idempotent() {
        let mut rng = create_rng(42);
        let pop = Population::random(6, 5, &mut rng);
        let once = replacement(pop.clone());
        let twice = replacement(pop.clone());
        assert_eq!(once, pop);
        assert_eq!(once, twice);
        assert_eq!(replacement(once.clone()), once);
    }

    proptest! {
        #[test]
        fn prop_variation_preserves_shape(
            seed in any::<u64>(),
            pairs in 1usize..8,
            len in 1usize..24,
            pc in 0.0f64..=1.0,
        ) {
            let mut rng = create_rng(seed);
            let pop = Population::random(pairs * 2, len, &mut rng);
            let out = variation(pop, pc, 1.0 / len as f64, &mut rng).unwrap();
            prop_assert_eq!(out.len(), pairs * 2);
            prop_assert_eq!(out.chromosome_length(), len);
            for c in &out {
                prop_assert!(c.fitness() <= len);
            }
        }
    }
}
