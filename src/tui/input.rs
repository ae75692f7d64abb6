//! Keyboard mapping for the terminal UI.
//!
//! Keys become [`Intent`]s without looking at game state; the
//! [`App`](super::App) decides what each intent means for the session.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_session::Position;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0 / the top of the list.
    Up,
    /// Toward row 2 / the bottom of the list.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the cursor or list selection.
    Move(Direction),
    /// Select the cell under the cursor or the highlighted list entry.
    Activate,
    /// Select a cell directly by its keypad number.
    Cell(Position),
    /// Flip the move list order.
    ToggleOrder,
    /// Clear the winner string.
    ClearWinners,
    /// Move focus between board and move list.
    SwitchFocus,
    /// Leave the application.
    Quit,
    /// Key with no binding.
    Nothing,
}

/// Maps a key event to an intent.
pub fn interpret(key: KeyEvent) -> Intent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Intent::Quit;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Intent::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Intent::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Intent::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Intent::Move(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Intent::Activate,
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map_or(Intent::Nothing, Intent::Cell),
        KeyCode::Char('o') | KeyCode::Char('O') => Intent::ToggleOrder,
        KeyCode::Char('c') | KeyCode::Char('C') => Intent::ClearWinners,
        KeyCode::Tab | KeyCode::BackTab => Intent::SwitchFocus,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Intent::Quit,
        _ => Intent::Nothing,
    }
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_select_cells() {
        assert_eq!(interpret(key(KeyCode::Char('1'))), Intent::Cell(Position::TopLeft));
        assert_eq!(interpret(key(KeyCode::Char('9'))), Intent::Cell(Position::BottomRight));
        assert_eq!(interpret(key(KeyCode::Char('0'))), Intent::Nothing);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(interpret(key(KeyCode::Char('o'))), Intent::ToggleOrder);
        assert_eq!(interpret(key(KeyCode::Char('c'))), Intent::ClearWinners);
        assert_eq!(interpret(key(KeyCode::Tab)), Intent::SwitchFocus);
        assert_eq!(interpret(key(KeyCode::Esc)), Intent::Quit);
        assert_eq!(
            interpret(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Intent::Quit
        );
    }

    #[test]
    fn test_cursor_moves_and_stops_at_edges() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomLeft, Direction::Right), Position::BottomCenter);
    }
}
