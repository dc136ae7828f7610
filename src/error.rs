//! Error types for maze construction and evolution.

use std::path::PathBuf;

/// Errors raised while building or parsing a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// The layout has no rows or no columns.
    #[error("maze must have at least one row and one column")]
    Empty,
    /// The number of cells does not match `width * height`.
    #[error("expected {expected} cells for the given dimensions, found {found}")]
    CellCount {
        /// `width * height`.
        expected: usize,
        /// Cells actually supplied.
        found: usize,
    },
    /// A text row has a different width from the first row.
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// An unknown character was found in a text layout.
    #[error("unknown maze symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
    /// The layout does not contain exactly one cell of the named kind.
    #[error("maze must contain exactly one {kind} cell, found {found}")]
    Endpoint {
        /// `"start"` or `"finish"`.
        kind: &'static str,
        /// How many were found.
        found: usize,
    },
    /// A start or finish position lies outside the grid or on a wall.
    #[error("{kind} position ({row}, {col}) is not an open cell inside the maze")]
    BlockedEndpoint {
        /// `"start"` or `"finish"`.
        kind: &'static str,
        /// Row of the position.
        row: i32,
        /// Column of the position.
        col: i32,
    },
}

/// Errors raised by the evolutionary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvolutionError {
    /// Breeding was requested before the generation was evaluated.
    #[error("generation must be evaluated before breeding the next one")]
    NotEvaluated,
    /// Breeding was requested from a generation with no members.
    #[error("cannot breed from an empty generation")]
    EmptyPopulation,
}

/// Errors raised while loading or validating an evolution configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value outside its allowed range.
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        /// Name of the field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type for maze construction.
pub type MazeResult<T> = Result<T, MazeError>;

/// Result type for evolutionary operations.
pub type EvolutionResult<T> = Result<T, EvolutionError>;
