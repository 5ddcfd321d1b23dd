//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout a game.
//! They are testable independently and document what the engine guarantees.

use crate::engine::evaluate;
use crate::types::{Cell, GameState, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose by type alone.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn violations_of<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation {
            description: I::description(),
        });
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        violations_of::<S, I1>(state, &mut violations);
        violations_of::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        violations_of::<S, I1>(state, &mut violations);
        violations_of::<S, I2>(state, &mut violations);
        violations_of::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// Invariant: X has as many marks as O, or exactly one more.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(state: &GameState) -> bool {
        let x = state.board().marks(Player::X);
        let o = state.board().marks(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// Invariant: the current player follows from the mark counts.
///
/// While in progress it is the side to move; once the game is over it is
/// the player who made the final move.
pub struct TurnFollowsMarks;

impl Invariant<GameState> for TurnFollowsMarks {
    fn holds(state: &GameState) -> bool {
        let x = state.board().marks(Player::X);
        let o = state.board().marks(Player::O);
        let expected = match (state.outcome().is_terminal(), x > o) {
            (false, false) => Player::X,
            (false, true) => Player::O,
            (true, true) => Player::X,
            (true, false) => Player::O,
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Current player follows from the mark counts"
    }
}

/// Invariant: the stored outcome is what the board evaluates to.
pub struct OutcomeMatchesBoard;

impl Invariant<GameState> for OutcomeMatchesBoard {
    fn holds(state: &GameState) -> bool {
        state.outcome() == evaluate(state.board())
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}

/// All single-state invariants as a composable set.
pub type StateInvariants = (BalancedMarks, TurnFollowsMarks, OutcomeMatchesBoard);

/// A pair of consecutive states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Transition {
    /// State before the move.
    pub before: GameState,
    /// State after the move.
    pub after: GameState,
}

/// Invariant: occupied cells never change, and a move fills at most one
/// empty cell.
pub struct MonotonicBoard;

impl Invariant<Transition> for MonotonicBoard {
    fn holds(t: &Transition) -> bool {
        let mut filled = 0;
        for (before, after) in t.before.board().cells().iter().zip(t.after.board().cells()) {
            match (before, after) {
                (Cell::Occupied(_), _) if before != after => return false,
                (Cell::Empty, Cell::Occupied(_)) => filled += 1,
                _ => {}
            }
        }
        filled <= 1
    }

    fn description() -> &'static str {
        "Occupied cells never change; one cell filled per move"
    }
}
