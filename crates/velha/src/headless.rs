//! Non-interactive commands: replay a move list, evaluate a board.

use serde::Serialize;
use tracing::{info, instrument, warn};
use velha_engine::{
    Board, GameState, Outcome, Player, evaluate, reset, try_apply_move, winning_line,
};

/// A move the engine refused during a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// Position of the move in the input list (0-based).
    pub step: usize,
    /// Cell index that was requested.
    pub index: usize,
    /// Why it was refused.
    pub reason: String,
}

/// Result of replaying a list of moves from a fresh game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// State after the last move.
    pub state: GameState,
    /// Moves that had no effect.
    pub rejected: Vec<RejectedMove>,
}

/// Result of evaluating a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalReport {
    /// The board that was evaluated.
    pub board: Board,
    /// Its outcome.
    pub outcome: Outcome,
    /// Cell indices of the winning line, if any.
    pub line: Option<[usize; 3]>,
    /// Cell indices still empty.
    pub open_cells: Vec<usize>,
}

/// Applies `moves` in order to a new game.
///
/// Rejected moves are recorded and skipped.
#[instrument]
pub fn replay(moves: &[usize]) -> ReplayReport {
    let mut state = reset();
    let mut rejected = Vec::new();

    for (step, &index) in moves.iter().enumerate() {
        match try_apply_move(&state, index) {
            Ok(next) => state = next,
            Err(e) => {
                warn!(step, index, error = %e, "Move rejected during replay");
                rejected.push(RejectedMove {
                    step,
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    info!(outcome = %state.outcome(), rejected = rejected.len(), "Replay finished");
    ReplayReport { state, rejected }
}

/// Evaluates a board given in text form.
#[instrument(skip(board))]
pub fn eval(board: Board) -> EvalReport {
    let line = winning_line(&board).map(|(_, line)| line.map(|pos| pos.to_index()));
    let open_cells = board
        .empty_positions()
        .into_iter()
        .map(|pos| pos.to_index())
        .collect();
    EvalReport {
        board,
        outcome: evaluate(&board),
        line,
        open_cells,
    }
}

fn outcome_text(outcome: Outcome, to_move: Player) -> String {
    match outcome {
        Outcome::InProgress => format!("In progress, {} to move", to_move),
        Outcome::Win(player) => format!("Winner: {}", player),
        Outcome::Draw => "Draw".to_string(),
    }
}

impl ReplayReport {
    /// Human-readable rendering.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n", self.state.board());
        for r in &self.rejected {
            out.push_str(&format!(
                "move {} (cell {}) ignored: {}\n",
                r.step + 1,
                r.index,
                r.reason
            ));
        }
        out.push_str(&outcome_text(self.state.outcome(), self.state.current_player()));
        out
    }
}

impl EvalReport {
    /// Human-readable rendering.
    pub fn to_text(&self) -> String {
        // Side to move on a legal in-progress board.
        let to_move = if self.board.marks(Player::X) > self.board.marks(Player::O) {
            Player::O
        } else {
            Player::X
        };
        let mut out = format!("{}\n\n{}", self.board, outcome_text(self.outcome, to_move));
        if let Some(line) = self.line {
            out.push_str(&format!(" (cells {:?})", line));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_reports_rejections() {
        let report = replay(&[4, 4, 10, 0]);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].step, 1);
        assert_eq!(report.rejected[1].index, 10);
        assert_eq!(report.state.board().marks(Player::X), 1);
        assert_eq!(report.state.board().marks(Player::O), 1);
    }

    #[test]
    fn test_eval_reports_line() {
        let report = eval("XOO/.X./..X".parse().unwrap());
        assert_eq!(report.outcome, Outcome::Win(Player::X));
        assert_eq!(report.line, Some([0, 4, 8]));
        assert!(report.to_text().ends_with("Winner: X (cells [0, 4, 8])"));
    }

    #[test]
    fn test_replay_json_shape() {
        let json = serde_json::to_value(replay(&[4, 4, 0])).unwrap();
        assert_eq!(json["state"]["current_player"], "X");
        assert_eq!(json["state"]["outcome"], "InProgress");
        assert_eq!(json["rejected"].as_array().unwrap().len(), 1);
        assert_eq!(json["rejected"][0]["step"], 1);
        assert_eq!(json["rejected"][0]["index"], 4);
        assert_eq!(json["rejected"][0]["reason"], "Center is already occupied");
    }

    #[test]
    fn test_eval_json_shape() {
        let json = serde_json::to_value(eval("XOO/.X./..X".parse().unwrap())).unwrap();
        assert_eq!(json["outcome"]["Win"], "X");
        assert_eq!(json["line"], serde_json::json!([0, 4, 8]));
        assert_eq!(json["open_cells"], serde_json::json!([3, 5, 6, 7]));

        let json = serde_json::to_value(eval("XO./.../...".parse().unwrap())).unwrap();
        assert_eq!(json["outcome"], "InProgress");
        assert!(json["line"].is_null());
    }
}
