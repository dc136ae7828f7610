//! Maze layer.
//!
//! A fixed rectangular grid of cells that genomes walk through:
//! - Cell kinds (open, wall, start, finish)
//! - Passability queries and a visited overlay
//! - Text layouts, including the reference maze
//! - Plain-text rendering for drivers

mod grid;
mod layout;
mod render;

pub use grid::{CellKind, Direction, Grid, Position};
pub use layout::REFERENCE_MAZE;
pub use render::render_grid;
