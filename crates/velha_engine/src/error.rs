//! Rejection reasons for moves and board parsing.

use crate::position::Position;
use crate::types::Outcome;

/// Why a move was rejected.
///
/// [`crate::apply_move`] swallows these and returns the state unchanged;
/// [`crate::try_apply_move`] hands them to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index is not in 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell is already taken.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over: {}", _0)]
    GameOver(Outcome),
}

impl std::error::Error for MoveError {}

/// Error parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("Invalid cell symbol {:?} (expected X, O, '.', '_' or '-')", _0)]
    InvalidSymbol(char),

    /// The text did not describe exactly 9 cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}
