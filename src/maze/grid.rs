//! Grid, cell and position types.

use crate::error::{MazeError, MazeResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A cell position on the grid.
///
/// Coordinates are signed so that the neighbour of an edge cell can be
/// expressed and then rejected by [`Grid::passable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row, counted from the top.
    pub row: i32,
    /// Column, counted from the left.
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one cell away in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.row - 1, self.col),
            Direction::South => Self::new(self.row + 1, self.col),
            Direction::East => Self::new(self.row, self.col + 1),
            Direction::West => Self::new(self.row, self.col - 1),
        }
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// One of the four compass moves a gene can encode.
///
/// The discriminants form the dense 2-bit space `{0, 1, 2, 3}` so that a
/// mutation can complement both bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// Up one row.
    North = 0,
    /// Down one row.
    South = 1,
    /// Right one column.
    East = 2,
    /// Left one column.
    West = 3,
}

impl Direction {
    /// All directions in encoding order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The 2-bit encoding of this direction.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode a 2-bit value. Returns `None` for values above 3.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::North),
            1 => Some(Self::South),
            2 => Some(Self::East),
            3 => Some(Self::West),
            _ => None,
        }
    }

    /// Complement both bits of the encoding (`00<->11`, `01<->10`).
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::South => Self::East,
            Self::East => Self::South,
            Self::West => Self::North,
        }
    }

    /// Draw a direction uniformly at random.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Kind of a maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Walkable floor.
    Open,
    /// Impassable.
    Wall,
    /// Where every walk begins.
    Start,
    /// The goal.
    Finish,
}

impl CellKind {
    /// Check if a walk may enter this cell.
    #[must_use]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// The maze grid.
///
/// The cell layout is fixed at construction. A separate visited overlay
/// records the cells the most recent walk passed through; it never
/// affects passability.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Width in cells.
    width: usize,
    /// Height in cells.
    height: usize,
    /// Cells stored in row-major order.
    cells: Vec<CellKind>,
    /// Visited marks, same layout as `cells`.
    visited: Vec<bool>,
    /// Where walks begin.
    start: Position,
    /// Where walks should end.
    finish: Position,
}

impl Grid {
    /// Create a grid from row-major cells and explicit endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero, the cell count does
    /// not match, or an endpoint is out of bounds or on a wall.
    pub fn new(
        width: usize,
        height: usize,
        cells: Vec<CellKind>,
        start: Position,
        finish: Position,
    ) -> MazeResult<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::Empty);
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(MazeError::CellCount {
                expected,
                found: cells.len(),
            });
        }

        let grid = Self {
            width,
            height,
            visited: vec![false; cells.len()],
            cells,
            start,
            finish,
        };

        for (kind, pos) in [("start", start), ("finish", finish)] {
            if !grid.passable(pos.row, pos.col) {
                return Err(MazeError::BlockedEndpoint {
                    kind,
                    row: pos.row,
                    col: pos.col,
                });
            }
        }

        Ok(grid)
    }

    /// Width of the grid in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Where every walk begins.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// The goal position.
    #[must_use]
    pub const fn finish(&self) -> Position {
        self.finish
    }

    /// Convert a position to an index into the cell arrays.
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// The kind of the cell at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<CellKind> {
        self.index(pos.row, pos.col).map(|idx| self.cells[idx])
    }

    /// Check whether a walk may step onto `(row, col)`.
    ///
    /// False outside `[0, height) x [0, width)` and on walls; true for
    /// every other cell, visited or not.
    #[must_use]
    pub fn passable(&self, row: i32, col: i32) -> bool {
        self.index(row, col)
            .is_some_and(|idx| self.cells[idx].is_passable())
    }

    /// Record that a walk passed through `(row, col)`.
    ///
    /// Callers check [`Grid::passable`] first; out-of-bounds positions are
    /// ignored.
    pub fn mark_visited(&mut self, row: i32, col: i32) {
        if let Some(idx) = self.index(row, col) {
            self.visited[idx] = true;
        }
    }

    /// Check whether the last walk passed through `pos`.
    #[must_use]
    pub fn is_visited(&self, pos: Position) -> bool {
        self.index(pos.row, pos.col)
            .is_some_and(|idx| self.visited[idx])
    }

    /// Reset the visited overlay.
    pub fn clear_visited(&mut self) {
        self.visited.fill(false);
    }

    /// Number of cells currently marked visited.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    /// Iterate over all positions and cell kinds in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(idx, &kind)| {
            // Grid dimensions fit in i32.
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let pos = Position::new((idx / width) as i32, (idx % width) as i32);
            (pos, kind)
        })
    }
}
