//! Tournament selection.
//!
//! A tournament samples a small set of distinct individuals uniformly at
//! random and returns the fittest. Larger tournaments mean stronger
//! selection pressure.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use rand::seq::index;
use rand::Rng;

/// Selects one parent index by tournament.
///
/// Samples `min(k, population.len())` distinct indices without replacement
/// and returns the one with the lowest fitness. Ties go to whichever
/// contender was sampled first.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament_select<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let k = k.clamp(1, n);

    let mut contenders = index::sample(rng, n, k).into_iter();
    let mut best_idx = contenders
        .next()
        .expect("tournament samples at least one contender");
    for idx in contenders {
        if population[idx].fitness() < population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Selects two parent indices with independent tournaments.
///
/// The draws are independent, so both indices may be the same.
pub fn select_parents<I: Individual, R: Rng>(
    population: &[I],
    k: usize,
    rng: &mut R,
) -> (usize, usize) {
    let first = tournament_select(population, k, rng);
    let second = tournament_select(population, k, rng);
    (first, second)
}
