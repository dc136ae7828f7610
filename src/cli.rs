//! CLI command implementations for maze-evo.

pub(crate) mod run;
pub(crate) mod show;

mod output;

use clap::ValueEnum;
use maze_evo::{ConfigError, EvolutionError, Grid, MazeError};
use std::path::{Path, PathBuf};

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    /// A maze file could not be read.
    #[error("failed to read maze {path}: {source}")]
    MazeFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A maze layout is invalid.
    #[error(transparent)]
    Maze(#[from] MazeError),
    /// The evolution config is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Evolution failed.
    #[error(transparent)]
    Evolution(#[from] EvolutionError),
    /// Output could not be serialized.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a maze from `path`, or the reference maze when none is given.
pub(crate) fn load_grid(path: Option<&Path>) -> Result<Grid, CliError> {
    let Some(path) = path else {
        return Ok(Grid::reference());
    };

    let text = std::fs::read_to_string(path).map_err(|source| CliError::MazeFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Grid::parse(&text)?)
}
