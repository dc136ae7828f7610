// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Maze-evo: a genetic search for paths through a fixed grid maze.
//!
//! A population of fixed-length move sequences ("genomes") is scored by
//! walking each one through the maze, then recombined and mutated until
//! one of them ends on the finish cell.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Driver (CLI or caller's loop)     │
//! ├─────────────────────────────────────┤
//! │   gp: generations and operators     │
//! ├─────────────────────────────────────┤
//! │   maze: grid, passability, trail    │
//! └─────────────────────────────────────┘
//! ```
//!
//! Data flows one way: the grid answers passability queries for genome
//! walks, generations aggregate the scores, and breeding produces the
//! next generation.

pub mod error;
pub mod gp;
pub mod maze;

pub use error::{ConfigError, EvolutionError, MazeError};

// Re-export key types at crate root for convenience
pub use gp::{EvolutionConfig, Generation, Genome, Simulation};
pub use maze::{CellKind, Direction, Grid, Position};
