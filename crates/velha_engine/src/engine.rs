//! State transitions for tic-tac-toe.
//!
//! Every function here is pure: it takes a [`GameState`] by reference and
//! returns a new one. A shell keeps the current state and replaces it with
//! whatever the engine hands back.

use crate::error::MoveError;
use crate::invariants::{Invariant, InvariantSet, MonotonicBoard, StateInvariants, Transition};
use crate::position::Position;
use crate::rules::{is_full, winning_line};
use crate::types::{Board, Cell, GameState, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// User intent fed to [`reduce`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Select the cell at this index (0-8).
    Select(usize),
    /// Start a new game.
    Reset,
}

/// Evaluates the board.
///
/// Returns `Win` for the first completed line, `Draw` for a full board
/// without one, `InProgress` otherwise.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, _)) = winning_line(board) {
        Outcome::Win(player)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Places the current player's mark at `index`, reporting why a move is
/// rejected.
///
/// # Errors
///
/// - [`MoveError::GameOver`] once the outcome is terminal
/// - [`MoveError::OutOfBounds`] if `index` is not in 0-8
/// - [`MoveError::CellOccupied`] if the cell already holds a mark
#[instrument(skip(state), fields(player = %state.current_player()))]
pub fn try_apply_move(state: &GameState, index: usize) -> Result<GameState, MoveError> {
    if state.outcome().is_terminal() {
        return Err(MoveError::GameOver(state.outcome()));
    }
    let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
    if !state.board().is_empty(pos) {
        return Err(MoveError::CellOccupied(pos));
    }

    let player = state.current_player();
    let board = state.board().with(pos, Cell::Occupied(player));
    let outcome = evaluate(&board);
    let next_player = if outcome.is_terminal() {
        player
    } else {
        player.opponent()
    };
    let next = GameState::from_parts(board, next_player, outcome);

    debug_assert!(
        StateInvariants::check_all(&next).is_ok(),
        "state invariants violated after move at {index}"
    );
    debug_assert!(
        MonotonicBoard::holds(&Transition::new(*state, next)),
        "board changed more than one empty cell"
    );

    debug!(position = %pos, ?outcome, "Move applied");
    Ok(next)
}

/// Places the current player's mark at `index`.
///
/// Invalid moves (out of range, occupied cell, finished game) are stale
/// taps from the shell's point of view: the state comes back unchanged.
#[instrument(skip(state))]
pub fn apply_move(state: &GameState, index: usize) -> GameState {
    match try_apply_move(state, index) {
        Ok(next) => next,
        Err(e) => {
            debug!(error = %e, "Move rejected");
            *state
        }
    }
}

/// Returns the initial state: empty board, X to move, no outcome.
#[instrument]
pub fn reset() -> GameState {
    GameState::new()
}

/// Applies a user intent to the state.
#[instrument(skip(state))]
pub fn reduce(state: &GameState, action: Action) -> GameState {
    match action {
        Action::Select(index) => apply_move(state, index),
        Action::Reset => reset(),
    }
}
