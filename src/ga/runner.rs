//! GA evolutionary loop execution.
//!
//! [`Evolution`] holds the state of one run and advances it a generation at
//! a time: selection → crossover → mutation → replacement.
//! [`GaRunner`] drives an [`Evolution`] to termination and reports
//! statistics before and after the loop.

use super::config::GaConfig;
use super::error::GaError;
use super::operators::{replacement, variation};
use super::report::{Reporter, Stage, Statistics};
use super::selection::select_parents;
use super::types::{Chromosome, Population};
use crate::random::rng_from_seed;
use log::{debug, info};
use rand::Rng;

/// A single GA run, advanced one generation per [`step`](Self::step).
///
/// The run starts from a random population and terminates after exactly
/// `config.generations` steps. There is no other stopping condition.
///
/// ```
/// use onemax_ga::ga::{Evolution, GaConfig};
/// use onemax_ga::random::create_rng;
///
/// let config = GaConfig::default().with_generations(3);
/// let mut evolution = Evolution::new(config, create_rng(1)).unwrap();
/// while evolution.step().unwrap() {}
/// assert!(evolution.is_terminated());
/// assert_eq!(evolution.generation(), 3);
/// ```
#[derive(Debug)]
pub struct Evolution<R: Rng> {
    config: GaConfig,
    population: Population,
    generation: usize,
    rng: R,
}

impl<R: Rng> Evolution<R> {
    /// Validates `config` and draws the initial population from `rng`.
    pub fn new(config: GaConfig, mut rng: R) -> Result<Self, GaError> {
        config.validate()?;
        let population =
            Population::random(config.population_size, config.chromosome_length, &mut rng);
        Ok(Self {
            config,
            population,
            generation: 0,
            rng,
        })
    }

    /// Runs one generation.
    ///
    /// Returns `Ok(false)` without touching the population once the run has
    /// terminated.
    pub fn step(&mut self) -> Result<bool, GaError> {
        if self.is_terminated() {
            return Ok(false);
        }

        let parents = select_parents(&self.population, self.config.tournament_size, &mut self.rng);
        let children = variation(
            parents,
            self.config.crossover_rate,
            self.config.mutation_rate,
            &mut self.rng,
        )?;
        self.population = replacement(children);
        self.generation += 1;
        Ok(true)
    }

    /// Number of generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Whether all configured generations have run.
    pub fn is_terminated(&self) -> bool {
        self.generation >= self.config.generations
    }

    /// The current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The configuration this run was built from.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Consumes the run, returning the current population.
    pub fn into_population(self) -> Population {
        self.population
    }
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The population after the last generation.
    pub population: Population,

    /// The fittest chromosome of the final population.
    pub best: Chromosome,

    /// Statistics of the initial population.
    pub initial_stats: Statistics,

    /// Statistics of the final population.
    pub final_stats: Statistics,

    /// Total number of generations executed.
    pub generations: usize,

    /// Statistics of the initial population followed by one entry per generation.
    pub history: Vec<Statistics>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use onemax_ga::ga::{GaConfig, GaRunner, Stage, Statistics};
///
/// let config = GaConfig::default().with_seed(42);
/// let mut reports: Vec<(Stage, Statistics)> = Vec::new();
/// let result = GaRunner::run(&config, &mut reports).unwrap();
///
/// assert_eq!(reports.len(), 2);
/// assert_eq!(result.generations, 100);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the reporter fails.
    pub fn run<Rep: Reporter + ?Sized>(
        config: &GaConfig,
        reporter: &mut Rep,
    ) -> Result<GaResult, GaError> {
        Self::run_with_rng(config, rng_from_seed(config.seed), reporter)
    }

    /// Runs the GA drawing all randomness from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<R: Rng, Rep: Reporter + ?Sized>(
        config: &GaConfig,
        rng: R,
        reporter: &mut Rep,
    ) -> Result<GaResult, GaError> {
        let mut evolution = Evolution::new(config.clone(), rng)?;
        info!(
            "starting OneMax run: generations={}, length={}, population={}, pc={}, pm={}",
            config.generations,
            config.chromosome_length,
            config.population_size,
            config.crossover_rate,
            config.mutation_rate
        );

        let initial_stats = Statistics::of(evolution.population());
        reporter.report(Stage::Initial, &initial_stats)?;

        let mut history = Vec::with_capacity(config.generations + 1);
        history.push(initial_stats);

        while evolution.step()? {
            let stats = Statistics::of(evolution.population());
            debug!(
                "generation {}: avg={:.3} max={} min={}",
                evolution.generation(),
                stats.average,
                stats.maximum,
                stats.minimum
            );
            history.push(stats);
        }

        let final_stats = Statistics::of(evolution.population());
        reporter.report(Stage::Final, &final_stats)?;
        info!(
            "finished after {} generations: avg {:.3} -> {:.3}",
            evolution.generation(),
            initial_stats.average,
            final_stats.average
        );

        let generations = evolution.generation();
        let population = evolution.into_population();
        let best = population
            .best()
            .cloned()
            .ok_or(GaError::PopulationTooSmall(0))?;

        Ok(GaResult {
            population,
            best,
            initial_stats,
            final_stats,
            generations,
            history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
