//! Evolution driver.
//!
//! [`Simulation`] owns everything a run needs (the maze, the current
//! generation, the random source and the generation counter) and steps
//! through the loop: evaluate, stop if the fittest genome found the exit,
//! otherwise breed the next generation.

use crate::error::{ConfigError, EvolutionError, EvolutionResult};
use crate::gp::crossover::CrossoverConfig;
use crate::gp::generation::{Generation, POPULATION_SIZE};
use crate::gp::genome::{GENOME_LENGTH, Genome};
use crate::gp::mutation::MutationConfig;
use crate::maze::{Grid, Position};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for an evolution run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Genomes per generation.
    pub population_size: usize,
    /// Genes per genome.
    pub genome_length: usize,
    /// Crossover configuration.
    pub crossover: CrossoverConfig,
    /// Mutation configuration.
    pub mutation: MutationConfig,
    /// Stop after this many generations (0 = run until the exit is found).
    pub max_generations: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: POPULATION_SIZE,
            genome_length: GENOME_LENGTH,
            crossover: CrossoverConfig::default(),
            mutation: MutationConfig::default(),
            max_generations: 0,
            seed: 42,
        }
    }
}

impl EvolutionConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the result
    /// fails [`EvolutionConfig::validate`].
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(invalid("population_size", "must be at least 1"));
        }
        if self.genome_length == 0 {
            return Err(invalid("genome_length", "must be at least 1"));
        }
        check_rate("crossover_rate", self.crossover.crossover_rate)?;
        check_rate("mutation_rate", self.mutation.mutation_rate)?;
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_rate(field: &'static str, rate: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(invalid(field, format!("{rate} is not within [0, 1]")))
    }
}

/// Summary of one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Generation number, starting at 1.
    pub generation: usize,
    /// Fitness of the fittest genome.
    pub best_fitness: f64,
    /// Mean fitness.
    pub mean_fitness: f64,
    /// Whether the fittest genome reached the finish.
    pub found_exit: bool,
}

/// Result of a finished run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionOutcome {
    /// Fittest genome of the last evaluated generation.
    pub best: Genome,
    /// Number of generations evaluated.
    pub generations: usize,
    /// Whether `best` reaches the finish.
    pub found_exit: bool,
    /// Cells `best` walks through, start first.
    pub path: Vec<Position>,
}

/// State of an evolution run.
#[derive(Debug)]
pub struct Simulation {
    config: EvolutionConfig,
    grid: Grid,
    generation: Generation,
    generation_number: usize,
    rng: SmallRng,
    /// Fittest genome of the last evaluated generation.
    best: Option<Genome>,
    /// Report of the last evaluated generation.
    last_report: Option<GenerationReport>,
}

impl Simulation {
    /// Start a run on `grid` with a random first generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: EvolutionConfig, grid: Grid) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let generation = Generation::random(config.population_size, config.genome_length, &mut rng);

        Ok(Self {
            config,
            grid,
            generation,
            generation_number: 0,
            rng,
            best: None,
            last_report: None,
        })
    }

    /// The run's configuration.
    #[must_use]
    pub const fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// The maze; its visited overlay reflects the last walk evaluated.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The generation the next step will evaluate.
    #[must_use]
    pub const fn generation(&self) -> &Generation {
        &self.generation
    }

    /// Number of generations evaluated so far.
    #[must_use]
    pub const fn generation_number(&self) -> usize {
        self.generation_number
    }

    /// Fittest genome of the last evaluated generation.
    #[must_use]
    pub const fn best(&self) -> Option<&Genome> {
        self.best.as_ref()
    }

    /// Whether a genome has reached the finish.
    #[must_use]
    pub fn found_exit(&self) -> bool {
        self.last_report.is_some_and(|report| report.found_exit)
    }

    /// Evaluate the current generation and, unless its fittest genome
    /// found the exit, replace it with the next one.
    ///
    /// Once the exit is found further calls return the final report
    /// without doing any work.
    ///
    /// # Errors
    ///
    /// Returns [`EvolutionError::EmptyPopulation`] if no genome could be
    /// scored and propagates breeding errors.
    pub fn step(&mut self) -> EvolutionResult<GenerationReport> {
        if let Some(report) = self.last_report.filter(|report| report.found_exit) {
            return Ok(report);
        }

        self.generation.evaluate(&mut self.grid);
        self.generation_number += 1;

        let best = self
            .generation
            .fittest()
            .cloned()
            .ok_or(EvolutionError::EmptyPopulation)?;
        let stats = self.generation.stats();
        let report = GenerationReport {
            generation: self.generation_number,
            best_fitness: best.fitness(),
            mean_fitness: stats.mean_fitness,
            found_exit: best.found_exit(),
        };
        log::debug!(
            "gen {:>5}: best={:.4} mean={:.4} std={:.4}",
            report.generation,
            report.best_fitness,
            report.mean_fitness,
            stats.fitness_std
        );

        self.best = Some(best);
        self.last_report = Some(report);

        if !report.found_exit {
            self.generation = self.generation.next_generation(
                &self.config.crossover,
                &self.config.mutation,
                &mut self.rng,
            )?;
        }

        Ok(report)
    }

    /// Step until the exit is found or `max_generations` is reached,
    /// calling `on_generation` after each step. At least one generation is
    /// always evaluated.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Simulation::step`].
    pub fn run<F>(&mut self, mut on_generation: F) -> EvolutionResult<EvolutionOutcome>
    where
        F: FnMut(&GenerationReport),
    {
        loop {
            let report = self.step()?;
            on_generation(&report);

            let limit_reached = self.config.max_generations > 0
                && self.generation_number >= self.config.max_generations;
            if report.found_exit || limit_reached {
                break;
            }
        }

        let best = self.best.clone().ok_or(EvolutionError::EmptyPopulation)?;
        let path = best.trace(&self.grid);
        let outcome = EvolutionOutcome {
            found_exit: best.found_exit(),
            best,
            generations: self.generation_number,
            path,
        };

        log::info!(
            "evolution finished after {} generations (exit found: {}, best fitness {:.4})",
            outcome.generations,
            outcome.found_exit,
            outcome.best.fitness()
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(seed: u64) -> EvolutionConfig {
        EvolutionConfig {
            population_size: 30,
            genome_length: 12,
            max_generations: 500,
            seed,
            ..EvolutionConfig::default()
        }
    }

    #[test]
    fn test_default_config_matches_reference_constants() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 140);
        assert_eq!(config.genome_length, 70);
        assert!((config.crossover.crossover_rate - 0.7).abs() < f64::EPSILON);
        assert!((config.mutation.mutation_rate - 0.001).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut config = EvolutionConfig {
            population_size: 0,
            ..EvolutionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "population_size",
                ..
            })
        ));

        config.population_size = 10;
        config.mutation.mutation_rate = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "mutation_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: EvolutionConfig =
            serde_json::from_str(r#"{"population_size": 12, "mutation": {"mutation_rate": 0.0}}"#)
                .unwrap();

        assert_eq!(config.population_size, 12);
        assert_eq!(config.genome_length, GENOME_LENGTH);
        assert!(config.mutation.mutation_rate.abs() < f64::EPSILON);

        let config: EvolutionConfig =
            serde_json::from_str(r#"{"crossover": {}, "mutation": {}}"#).unwrap();
        assert_eq!(config, EvolutionConfig::default());
    }

    #[test]
    fn test_from_json_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"seed": 5, "max_generations": 10}}"#).unwrap();
        let config = EvolutionConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.seed, 5);
        assert_eq!(config.max_generations, 10);

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, r#"{{"crossover": {{"crossover_rate": 2.0}}}}"#).unwrap();
        assert!(matches!(
            EvolutionConfig::from_json_file(bad.path()),
            Err(ConfigError::Invalid {
                field: "crossover_rate",
                ..
            })
        ));

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            EvolutionConfig::from_json_file(&missing),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_step_counts_generations() {
        let grid = Grid::reference();
        let mut sim = Simulation::new(small_config(1), grid).unwrap();

        assert_eq!(sim.generation_number(), 0);
        assert!(sim.best().is_none());
        assert!(!sim.found_exit());
        assert_eq!(sim.config().population_size, 30);
        assert_eq!(sim.generation().len(), 30);
        assert!(!sim.generation().is_evaluated());

        let report = sim.step().unwrap();
        assert_eq!(report.generation, 1);
        assert_eq!(sim.generation_number(), 1);
        assert!(report.best_fitness > 0.0 && report.best_fitness <= 1.0);
        assert!(report.mean_fitness <= report.best_fitness);
        assert!(sim.best().is_some());
    }

    #[test]
    fn test_run_solves_open_room() {
        let grid = Grid::parse(
            "
            S....
            .....
            ....F
            ",
        )
        .unwrap();
        let mut sim = Simulation::new(small_config(7), grid).unwrap();

        let mut reports = Vec::new();
        let outcome = sim.run(|report| reports.push(*report)).unwrap();

        assert!(outcome.found_exit);
        assert_eq!(outcome.generations, reports.len());
        assert_eq!(outcome.path.last(), Some(&Position::new(2, 4)));
        assert!(reports.last().is_some_and(|r| r.found_exit));
        assert!(sim.found_exit());
        assert!(sim.generation().fittest().is_some_and(Genome::found_exit));

        // Finished runs stay finished.
        let again = sim.step().unwrap();
        assert_eq!(again.generation, outcome.generations);
    }

    #[test]
    fn test_run_respects_generation_limit() {
        let grid = Grid::reference();
        let config = EvolutionConfig {
            population_size: 4,
            genome_length: 3,
            max_generations: 5,
            ..EvolutionConfig::default()
        };
        let mut sim = Simulation::new(config, grid).unwrap();

        // Three moves can never cover the distance from start to finish.
        let outcome = sim.run(|_| {}).unwrap();
        assert_eq!(outcome.generations, 5);
        assert!(!outcome.found_exit);
        assert_eq!(outcome.path.len(), 4);
    }

    #[test]
    fn test_same_seed_same_run() {
        let run = |seed| {
            let mut sim = Simulation::new(small_config(seed), Grid::reference()).unwrap();
            let mut best = Vec::new();
            for _ in 0..10 {
                best.push(sim.step().unwrap().best_fitness);
            }
            best
        };

        assert_eq!(run(99), run(99));
    }
}
