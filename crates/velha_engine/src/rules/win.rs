//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player};
use tracing::instrument;

/// Three positions that win when held by one player.
pub type Line = [Position; 3];

/// The 8 winning lines, in evaluation order.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Owner of `line` if all three cells hold the same mark.
fn line_owner(board: &Board, [a, b, c]: Line) -> Option<Player> {
    let first = board.get(a);
    if first == board.get(b) && first == board.get(c) {
        first.player()
    } else {
        None
    }
}

/// Returns the first completed line (in [`LINES`] order) and its owner.
///
/// Every line is inspected on each call; the first match wins.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    LINES.iter().fold(None, |found, &line| {
        let owner = line_owner(board, line);
        found.or(owner.map(|player| (player, line)))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(check_winner(&board("XXX/OO./...")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let (player, line) = winning_line(&board("XO./XO./.O.")).unwrap();
        assert_eq!(player, Player::O);
        assert_eq!(
            line,
            [Position::TopCenter, Position::Center, Position::BottomCenter]
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(check_winner(&board("XXO/XO./O..")), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX./OO./...")), None);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // Row 0 and column 0 both complete; rows come first.
        let (_, line) = winning_line(&board("XXX/XOO/XOO")).unwrap();
        assert_eq!(line, LINES[0]);
    }
}
