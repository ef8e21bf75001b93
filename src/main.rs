//! OneMax GA command line.
//!
//! Runs the genetic algorithm and prints fitness statistics before and
//! after the evolutionary loop.
//!
//! # Usage
//!
//! ```bash
//! onemax
//! onemax --g 200 --n 16 --N 40 --pm 0.0625
//! RUST_LOG=debug onemax --g 10
//! ```

use clap::Parser;

use onemax_ga::ga::{GaConfig, GaRunner, WriterReporter};

/// Parameters for the OneMax genetic algorithm.
#[derive(Parser, Debug)]
#[command(name = "onemax")]
#[command(about = "Evolve bit strings toward all ones with a simple GA")]
struct Cli {
    /// Number of generations.
    #[arg(long = "g", default_value_t = 100)]
    generations: usize,

    /// Chromosome (string) length.
    #[arg(long = "n", default_value_t = 8)]
    length: usize,

    /// Population size.
    #[arg(long = "N", default_value_t = 10)]
    population: usize,

    /// Crossover probability.
    #[arg(long = "pc", default_value_t = 0.6)]
    crossover_rate: f64,

    /// Mutation probability. Must equal 1/n.
    #[arg(long = "pm", default_value_t = 0.125)]
    mutation_rate: f64,
}

impl Cli {
    fn config(&self) -> GaConfig {
        GaConfig {
            generations: self.generations,
            chromosome_length: self.length,
            population_size: self.population,
            crossover_rate: self.crossover_rate,
            mutation_rate: self.mutation_rate,
            ..GaConfig::default()
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();

    if let Err(e) = GaRunner::run(&config, &mut WriterReporter::stdout()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
