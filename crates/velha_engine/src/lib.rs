//! Pure tic-tac-toe game logic.
//!
//! The engine is a handful of pure transitions over an immutable
//! [`GameState`]: a shell hands in the current state plus a user intent and
//! gets the next state back.
//!
//! # Example
//!
//! ```
//! use velha_engine::{Outcome, Player, apply_move, reset};
//!
//! let state = [0, 1, 4, 2, 8]
//!     .iter()
//!     .fold(reset(), |state, &index| apply_move(&state, index));
//!
//! assert_eq!(state.outcome(), Outcome::Win(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use engine::{Action, apply_move, evaluate, reduce, reset, try_apply_move};
pub use error::{BoardParseError, MoveError};
pub use position::Position;
pub use rules::{LINES, Line, check_winner, winning_line};
pub use types::{Board, Cell, GameState, Outcome, Player};
