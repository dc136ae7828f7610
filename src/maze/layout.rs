//! Text layouts for mazes.
//!
//! Symbols: `#` wall, `.` open, `S` start, `F` finish. Blank lines and
//! surrounding whitespace are ignored.

use crate::error::{MazeError, MazeResult};
use crate::maze::grid::{CellKind, Grid, Position};
use std::str::FromStr;

/// The 15x10 reference maze: start at (7, 14), finish at (2, 0).
pub const REFERENCE_MAZE: &str = "\
###############
#.#.....###...#
F.......###...#
#...###..#....#
#...###.....#.#
#...###.....#.#
#....#....###.#
#.##...#......S
#.##...#.....##
###############
";

impl CellKind {
    /// Parse a layout symbol.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Open),
            '#' => Some(Self::Wall),
            'S' => Some(Self::Start),
            'F' => Some(Self::Finish),
            _ => None,
        }
    }

    /// The layout symbol for this kind.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Open => '.',
            Self::Wall => '#',
            Self::Start => 'S',
            Self::Finish => 'F',
        }
    }
}

impl Grid {
    /// Parse a grid from a text layout.
    ///
    /// # Errors
    ///
    /// Returns an error on unknown symbols, ragged rows, an empty layout,
    /// or anything other than exactly one start and one finish.
    pub fn parse(text: &str) -> MazeResult<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map_or(0, |row| row.chars().count());
        let height = rows.len();
        if width == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        let mut starts = Vec::new();
        let mut finishes = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            for (col, symbol) in line.chars().enumerate() {
                let kind = CellKind::from_symbol(symbol)
                    .ok_or(MazeError::UnknownSymbol { symbol, row, col })?;
                let pos = position(row, col);
                match kind {
                    CellKind::Start => starts.push(pos),
                    CellKind::Finish => finishes.push(pos),
                    CellKind::Open | CellKind::Wall => {}
                }
                cells.push(kind);
            }
        }

        let start = single_endpoint("start", &starts)?;
        let finish = single_endpoint("finish", &finishes)?;

        Self::new(width, height, cells, start, finish)
    }

    /// The reference maze.
    ///
    /// # Panics
    ///
    /// Never panics: [`REFERENCE_MAZE`] is a fixed, valid layout.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn reference() -> Self {
        Self::parse(REFERENCE_MAZE).expect("reference maze layout is valid")
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn position(row: usize, col: usize) -> Position {
    Position::new(row as i32, col as i32)
}

fn single_endpoint(kind: &'static str, found: &[Position]) -> MazeResult<Position> {
    match found {
        [pos] => Ok(*pos),
        _ => Err(MazeError::Endpoint {
            kind,
            found: found.len(),
        }),
    }
}
