//! The `run` command: evolve until the exit is found.

use crate::cli::output::{JsonOutcome, format_text};
use crate::cli::{CliError, OutputFormat, load_grid};
use indicatif::{ProgressBar, ProgressStyle};
use maze_evo::{EvolutionConfig, Simulation};
use std::path::PathBuf;

/// Generation limit used when neither the flag nor the config sets one.
/// An unreachable finish would otherwise keep the command running forever.
pub(crate) const DEFAULT_GENERATION_LIMIT: usize = 10_000;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Overrides {
    pub(crate) seed: Option<u64>,
    pub(crate) population: Option<usize>,
    pub(crate) genome_length: Option<usize>,
    pub(crate) max_generations: Option<usize>,
}

impl Overrides {
    /// Apply the overrides to `config`.
    ///
    /// Only an explicit `--max-generations 0` runs without a limit.
    fn apply(self, config: &mut EvolutionConfig) {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(population) = self.population {
            config.population_size = population;
        }
        if let Some(genome_length) = self.genome_length {
            config.genome_length = genome_length;
        }
        match self.max_generations {
            Some(max_generations) => config.max_generations = max_generations,
            None if config.max_generations == 0 => {
                config.max_generations = DEFAULT_GENERATION_LIMIT;
            }
            None => {}
        }
    }
}

/// Execute the run command.
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn execute(
    maze: Option<PathBuf>,
    config_path: Option<PathBuf>,
    overrides: Overrides,
    format: OutputFormat,
    progress: bool,
) -> Result<(), CliError> {
    let grid = load_grid(maze.as_deref())?;

    let mut config = match &config_path {
        Some(path) => EvolutionConfig::from_json_file(path)?,
        None => EvolutionConfig::default(),
    };
    overrides.apply(&mut config);

    log::info!(
        "evolving on a {}x{} maze: population {}, genome length {}, seed {}",
        grid.width(),
        grid.height(),
        config.population_size,
        config.genome_length,
        config.seed
    );

    let mut sim = Simulation::new(config, grid)?;

    let pb = progress.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("valid template"),
        );
        pb
    });

    let outcome = sim.run(|report| {
        if let Some(pb) = &pb {
            pb.set_message(format!(
                "generation {} best={:.4} mean={:.4}",
                report.generation, report.best_fitness, report.mean_fitness
            ));
            pb.tick();
        }
    })?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match format {
        OutputFormat::Text => print!("{}", format_text(&outcome, sim.grid())),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonOutcome::from_outcome(&outcome))?;
            println!("{json}");
        }
    }

    Ok(())
}
