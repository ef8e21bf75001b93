//! Random number generation helpers.
//!
//! Every stochastic operator in this crate takes an explicit `&mut R: Rng`;
//! this module only decides how the top-level generator is built.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
///
/// Two generators built from the same seed produce identical streams,
/// which makes whole GA runs reproducible.
///
/// ```
/// use onemax_ga::random::create_rng;
/// use rand::Rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from a fresh random seed when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
