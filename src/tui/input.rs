//! Keyboard mapping for the board view.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to forward.
    None,
    /// Place a mark at the given cell.
    Place(usize),
    /// Start a new game.
    Reset,
    /// Switch pvp / computer mode.
    ToggleMode,
    /// Leave the application.
    Quit,
}

/// Moves the cursor one step with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, column)),
        KeyCode::Down => Some((row + 1, column)),
        KeyCode::Left => column.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, column + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_column(r, c))
        .unwrap_or(cursor)
}

/// Maps a digit key '1'..='9' to a cell index.
pub fn digit_cell(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d @ 1..=9) => Some(d as usize - 1),
        _ => None,
    }
}
