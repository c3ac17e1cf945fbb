//! Win detection.

use crate::cell::{Cell, CellSet};
use tracing::instrument;

/// The 8 winning combinations: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Returns the winning combination covered by `owned`, if any.
#[instrument]
pub fn winning_line(owned: CellSet) -> Option<[Cell; 3]> {
    LINES
        .into_iter()
        .find(|line| owned.contains_all(CellSet::from(*line)))
}
