//! Keyboard cursor movement and mouse hit-testing.

use crossterm::event::KeyCode;
use noughts_core::Cell;
use ratatui::layout::{Position, Rect};

/// Moves the board cursor one cell in the key's direction, staying on the
/// grid.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let index = cursor.index();
    let (mut row, mut col) = (index / 3, index % 3);
    match key {
        KeyCode::Up => row = row.saturating_sub(1),
        KeyCode::Down => row = (row + 1).min(2),
        KeyCode::Left => col = col.saturating_sub(1),
        KeyCode::Right => col = (col + 1).min(2),
        _ => {}
    }
    Cell::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Finds the cell whose last-drawn rect contains the terminal position.
pub fn hit_test(column: u16, row: u16, rects: &[Rect; 9]) -> Option<Cell> {
    rects
        .iter()
        .position(|rect| rect.contains(Position::new(column, row)))
        .and_then(Cell::from_index)
}
