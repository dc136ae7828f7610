//! Plain-text rendering of a maze with an optional path overlay.

use crate::maze::grid::{CellKind, Grid, Position};
use std::collections::HashSet;

/// Symbol drawn on open cells the path passes through.
const PATH_SYMBOL: char = '*';

/// Render `grid` as text, one line per row, marking every position in
/// `path` that lies on an open cell.
///
/// Other cells use their layout symbol, so a render without a path
/// parses back to the same grid.
///
/// ```text
/// #####
/// S**.#
/// #.*.F
/// #####
/// ```
#[must_use]
pub fn render_grid(grid: &Grid, path: &[Position]) -> String {
    let on_path: HashSet<Position> = path.iter().copied().collect();
    let mut output = String::with_capacity((grid.width() + 1) * grid.height());

    for (pos, kind) in grid.iter() {
        let symbol = match kind {
            CellKind::Open if on_path.contains(&pos) => PATH_SYMBOL,
            other => other.symbol(),
        };
        output.push(symbol);
        if usize::try_from(pos.col).is_ok_and(|col| col + 1 == grid.width()) {
            output.push('\n');
        }
    }

    output
}
