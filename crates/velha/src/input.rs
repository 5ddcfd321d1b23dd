//! Keyboard input: key events to user intents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use velha_engine::Position;

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the cursor.
    MoveCursor(Direction),
    /// Play the cell under the cursor.
    PlaceAtCursor,
    /// Play a cell directly.
    Select(Position),
    /// Start a new game.
    Reset,
    /// Close the end-of-game alert.
    Dismiss,
    /// Leave the program.
    Quit,
}

/// Maps a key event to an intent.
///
/// `alert_open` switches Enter and Esc to dismissing the alert.
pub fn intent_for(key: KeyEvent, alert_open: bool) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Intent::Quit);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Esc if alert_open => Some(Intent::Dismiss),
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::PlaceAtCursor),
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Intent::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Intent::MoveCursor(Direction::Right)),
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Position::from_index(digit - 1).map(Intent::Select)
        }
        _ => None,
    }
}

/// Moves the cursor one step, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_select_cells() {
        assert_eq!(
            intent_for(key(KeyCode::Char('1')), false),
            Some(Intent::Select(Position::TopLeft))
        );
        assert_eq!(
            intent_for(key(KeyCode::Char('9')), false),
            Some(Intent::Select(Position::BottomRight))
        );
        assert_eq!(intent_for(key(KeyCode::Char('0')), false), None);
    }

    #[test]
    fn test_enter_and_esc_dismiss_alert() {
        assert_eq!(intent_for(key(KeyCode::Enter), true), Some(Intent::Dismiss));
        assert_eq!(intent_for(key(KeyCode::Esc), true), Some(Intent::Dismiss));
        assert_eq!(intent_for(key(KeyCode::Enter), false), Some(Intent::PlaceAtCursor));
        assert_eq!(intent_for(key(KeyCode::Esc), false), Some(Intent::Quit));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(intent_for(event, true), Some(Intent::Quit));
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Left), Position::BottomCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
    }
}
