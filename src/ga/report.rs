//! Population statistics and the reporting sink.
//!
//! [`Statistics`] summarizes a population's fitness; a [`Reporter`]
//! receives it before and after the evolutionary loop. Reporting never
//! affects evolution.

use super::error::GaError;
use super::types::Population;
use std::fmt;
use std::io::Write;

/// When a report is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Before the first generation.
    Initial,
    /// After the last generation.
    Final,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Initial => f.write_str("initial"),
            Stage::Final => f.write_str("final"),
        }
    }
}

/// Aggregate fitness of one population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Arithmetic mean fitness.
    pub average: f64,
    /// Highest fitness.
    pub maximum: usize,
    /// Lowest fitness.
    pub minimum: usize,
}

impl Statistics {
    /// Computes statistics over `population`. All fields are zero when empty.
    pub fn of(population: &Population) -> Self {
        let fitnesses = population.fitnesses();
        if fitnesses.is_empty() {
            return Self {
                average: 0.0,
                maximum: 0,
                minimum: 0,
            };
        }

        let total: usize = fitnesses.iter().sum();
        Self {
            average: total as f64 / fitnesses.len() as f64,
            maximum: fitnesses.iter().copied().max().unwrap_or(0),
            minimum: fitnesses.iter().copied().min().unwrap_or(0),
        }
    }
}

const SEPARATOR: &str = "----------";

/// Prints the block written to stdout by the `onemax` binary.
///
/// The average always carries a decimal point (`8.0`, `4.6`).
impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "avg: {:?}", self.average)?;
        writeln!(f, "max: {}", self.maximum)?;
        writeln!(f, "min: {}", self.minimum)?;
        write!(f, "{SEPARATOR}")
    }
}

/// Sink for population statistics.
pub trait Reporter {
    /// Receives the statistics for `stage`.
    fn report(&mut self, stage: Stage, stats: &Statistics) -> Result<(), GaError>;
}

/// Collects every report in order.
impl Reporter for Vec<(Stage, Statistics)> {
    fn report(&mut self, stage: Stage, stats: &Statistics) -> Result<(), GaError> {
        self.push((stage, *stats));
        Ok(())
    }
}

/// Writes each report as a text block to any [`Write`] sink.
#[derive(Debug)]
pub struct WriterReporter<W: Write> {
    out: W,
}

impl<W: Write> WriterReporter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl WriterReporter<std::io::Stdout> {
    /// A reporter printing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Reporter for WriterReporter<W> {
    fn report(&mut self, _stage: Stage, stats: &Statistics) -> Result<(), GaError> {
        writeln!(self.out, "{stats}")?;
        self.out.flush()?;
        Ok(())
    }
}
