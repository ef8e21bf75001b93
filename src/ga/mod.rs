//! Generational genetic algorithm for OneMax.
//!
//! Evolves fixed-length bit strings toward all ones. Each generation runs
//! binary tournament selection, one-point crossover, bit-flip mutation and
//! full replacement, in that order.
//!
//! # Key Types
//!
//! - [`Chromosome`] / [`Population`]: bit strings and their container
//! - [`GaConfig`]: algorithm parameters (generations, sizes, rates)
//! - [`Evolution`]: state of one run, advanced a generation at a time
//! - [`GaRunner`]: runs an [`Evolution`] to termination and reports statistics
//! - [`Reporter`] / [`Statistics`]: the statistics sink and its payload
//!
//! # Submodules
//!
//! - [`operators`]: crossover, mutation, and replacement
//! - [`selection`]: tournament selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
pub mod operators;
mod report;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use error::GaError;
pub use operators::{crossover, mutation, replacement, variation};
pub use report::{Reporter, Stage, Statistics, WriterReporter};
pub use runner::{Evolution, GaResult, GaRunner};
pub use selection::{select_parents, tournament};
pub use types::{Chromosome, Population};
