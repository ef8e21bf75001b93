//! Error type shared by configuration, operators, and the runner.

/// Errors produced while configuring or running the GA.
#[derive(Debug, thiserror::Error)]
pub enum GaError {
    #[error(
        "mutation rate {mutation_rate} must equal 1/{chromosome_length} for chromosome length {chromosome_length}"
    )]
    MutationRateMismatch {
        mutation_rate: f64,
        chromosome_length: usize,
    },
    #[error("population size must be even, got {0}")]
    OddPopulation(usize),
    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("chromosome length must be at least 1")]
    EmptyChromosome,
    #[error("{name} must lie in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("tournament size must be at least 1, got {0}")]
    InvalidTournamentSize(usize),
    #[error("chromosome length mismatch: expected {expected}, found {found}")]
    RaggedPopulation { expected: usize, found: usize },
    #[error("failed to write statistics: {0}")]
    Io(#[from] std::io::Error),
}
