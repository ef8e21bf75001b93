//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::error::GaError;

/// Configuration for the OneMax genetic algorithm.
///
/// # Defaults
///
/// ```
/// use onemax_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.chromosome_length, 8);
/// assert_eq!(config.population_size, 10);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use onemax_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_chromosome_length(16)
///     .with_mutation_rate(1.0 / 16.0)
///     .with_population_size(40)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of generations to run. Zero is allowed.
    pub generations: usize,

    /// Number of bits per chromosome.
    pub chromosome_length: usize,

    /// Number of chromosomes in the population. Must be even.
    pub population_size: usize,

    /// Probability of applying one-point crossover to a pair of parents.
    pub crossover_rate: f64,

    /// Per-bit flip probability. Must equal exactly `1 / chromosome_length`.
    pub mutation_rate: f64,

    /// Candidates drawn per tournament. `2` is binary tournament.
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            chromosome_length: 8,
            population_size: 10,
            crossover_rate: 0.6,
            mutation_rate: 0.125,
            tournament_size: 2,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the chromosome length.
    ///
    /// The mutation rate is left untouched; pair this with
    /// [`with_mutation_rate`](Self::with_mutation_rate) or
    /// [`with_default_mutation_rate`](Self::with_default_mutation_rate).
    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate to `1 / chromosome_length`.
    pub fn with_default_mutation_rate(mut self) -> Self {
        self.mutation_rate = 1.0 / self.chromosome_length as f64;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.chromosome_length == 0 {
            return Err(GaError::EmptyChromosome);
        }
        if self.population_size < 2 {
            return Err(GaError::PopulationTooSmall(self.population_size));
        }
        if self.population_size % 2 != 0 {
            return Err(GaError::OddPopulation(self.population_size));
        }
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        check_mutation_rate(self.mutation_rate, self.chromosome_length)?;
        if self.tournament_size == 0 {
            return Err(GaError::InvalidTournamentSize(self.tournament_size));
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), GaError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::InvalidProbability { name, value })
    }
}

/// Checks that `mutation_rate` is exactly `1 / chromosome_length`.
pub(crate) fn check_mutation_rate(
    mutation_rate: f64,
    chromosome_length: usize,
) -> Result<(), GaError> {
    if mutation_rate == 1.0 / chromosome_length as f64 {
        Ok(())
    } else {
        Err(GaError::MutationRateMismatch {
            mutation_rate,
            chromosome_length,
        })
    }
}
