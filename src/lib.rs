//! Genetic algorithm for the OneMax problem.
//!
//! Evolves fixed-length bit strings to maximize the number of set bits.
//!
//! - [`ga`]: chromosomes, operators, and the evolutionary loop
//! - [`random`]: seeded generator construction
//!
//! All randomness flows through an explicit [`rand::Rng`], so a fixed seed
//! reproduces a run exactly.

pub mod ga;
pub mod random;
