//! The `show` command: print a maze layout.

use crate::cli::{CliError, load_grid};
use maze_evo::maze::render_grid;
use std::path::PathBuf;

/// Execute the show command.
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn execute(maze: Option<PathBuf>) -> Result<(), CliError> {
    let grid = load_grid(maze.as_deref())?;

    println!(
        "Maze {}x{}, start ({}, {}), finish ({}, {})",
        grid.width(),
        grid.height(),
        grid.start().row,
        grid.start().col,
        grid.finish().row,
        grid.finish().col
    );
    print!("{}", render_grid(&grid, &[]));
    Ok(())
}
