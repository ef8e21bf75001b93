//! Tournament selection.
//!
//! Each parent slot is filled by drawing `k` candidates uniformly at random
//! (with replacement) and keeping the fittest. Fitness is maximized.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Population;
use rand::Rng;

/// Runs one tournament of size `k` and returns the winner's index.
///
/// Candidates are compared in draw order: a later candidate replaces the
/// current winner unless the current winner is strictly fitter. With
/// `k = 2` the first candidate therefore wins only when it is strictly
/// fitter than the second, and the second wins all ties.
///
/// # Complexity
/// O(k)
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &Population, k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let n = population.len();

    let mut winner = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let challenger = rng.random_range(0..n);
        if population[winner].fitness() <= population[challenger].fitness() {
            winner = challenger;
        }
    }
    winner
}

/// Selects `population.len()` parents by independent tournaments of size `k`.
///
/// Returns a new population holding copies of the winners, in slot order.
pub fn select_parents<R: Rng>(population: &Population, k: usize, rng: &mut R) -> Population {
    let parents = (0..population.len())
        .map(|_| population[tournament(population, k, rng)].clone())
        .collect();
    Population::from_vec_unchecked(parents)
}
