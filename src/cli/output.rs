//! Output formatting utilities for CLI.

// Allow format! with push_str for readability
#![allow(clippy::format_push_string)]

use maze_evo::gp::{Allele, EvolutionOutcome};
use maze_evo::maze::render_grid;
use maze_evo::{Direction, Grid, Position};
use serde::Serialize;

/// JSON-serializable evolution result.
#[derive(Debug, Serialize)]
pub(super) struct JsonOutcome {
    /// Generations evaluated.
    pub(super) generations: usize,
    /// Whether the best genome reaches the finish.
    pub(super) found_exit: bool,
    /// Fitness of the best genome.
    pub(super) best_fitness: f64,
    /// Best genome as a move string, e.g. `"WWNNE..."`.
    pub(super) genes: String,
    /// Cells the best genome walks through.
    pub(super) path: Vec<Position>,
}

impl JsonOutcome {
    /// Create from an `EvolutionOutcome`.
    pub(super) fn from_outcome(outcome: &EvolutionOutcome) -> Self {
        Self {
            generations: outcome.generations,
            found_exit: outcome.found_exit,
            best_fitness: outcome.best.fitness(),
            genes: gene_string(outcome.best.genes()),
            path: outcome.path.clone(),
        }
    }
}

/// One letter per gene; `-` for unfilled loci.
fn gene_string(genes: &[Allele]) -> String {
    genes
        .iter()
        .map(|allele| match allele {
            Some(Direction::North) => 'N',
            Some(Direction::South) => 'S',
            Some(Direction::East) => 'E',
            Some(Direction::West) => 'W',
            None => '-',
        })
        .collect()
}

/// Format an evolution result as human-readable text with the best path
/// drawn on the maze.
pub(super) fn format_text(outcome: &EvolutionOutcome, grid: &Grid) -> String {
    let mut output = String::new();

    if outcome.found_exit {
        output.push_str(&format!(
            "Exit found in generation {}\n",
            outcome.generations
        ));
    } else {
        output.push_str(&format!(
            "No exit after {} generations\n",
            outcome.generations
        ));
    }
    output.push_str(&format!("  Best fitness: {:.4}\n", outcome.best.fitness()));
    output.push_str(&format!("  Genes: {}\n\n", gene_string(outcome.best.genes())));
    output.push_str(&render_grid(grid, &outcome.path));

    output
}
