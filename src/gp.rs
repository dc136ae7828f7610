//! Genetic search for a path through the maze.
//!
//! Candidate paths are fixed-length sequences of moves. Each generation
//! is scored against the maze, then bred into the next one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Simulation (evolution driver)     │
//! ├─────────────────────────────────────┤
//! │  Selection │ Crossover │ Mutation   │
//! ├─────────────────────────────────────┤
//! │     Generation (evaluate, breed)    │
//! ├─────────────────────────────────────┤
//! │     Genome walk through the Grid    │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use maze_evo::gp::{EvolutionConfig, Simulation};
//! use maze_evo::maze::Grid;
//!
//! let config = EvolutionConfig { max_generations: 5, ..EvolutionConfig::default() };
//! let mut sim = Simulation::new(config, Grid::reference())?;
//! let outcome = sim.run(|report| log::debug!("gen {}", report.generation))?;
//! assert!(outcome.generations <= 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod crossover;
mod evolution;
mod generation;
mod genome;
mod mutation;
mod selection;

pub use crossover::{CrossoverConfig, crossover, crossover_at};
pub use evolution::{EvolutionConfig, EvolutionOutcome, GenerationReport, Simulation};
pub use generation::{Generation, POPULATION_SIZE};
pub use genome::{Allele, Evaluation, GENOME_LENGTH, Genome};
pub use mutation::{MutationConfig, flip_allele, mutate};
pub use selection::{SelectionStats, is_valid_total, roulette_select};
