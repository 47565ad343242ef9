//! First-class transition requests for tic-tac-toe.
//!
//! Every change to a game goes through an [`Action`]. Both game variants
//! validate actions with [`check`], so the acceptance rules live in one place.

use super::rules::check_winner;
use super::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A request to change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place the next player's mark at the position.
    Play(Position),
    /// Move the step pointer to an earlier or later history entry.
    JumpTo(usize),
    /// Flip the display order of the move list.
    ToggleOrder,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play(pos) => write!(f, "play {}", pos.label()),
            Action::JumpTo(step) => write!(f, "jump to step {}", step),
            Action::ToggleOrder => write!(f, "toggle history order"),
        }
    }
}

/// Why an action left the state unchanged.
///
/// Rejections never reach the caller of a transition; they are logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Rejection {
    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The jump target is past the end of the history.
    #[display("Step {} is out of range (history has {} steps)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Number of steps in the history.
        len: usize,
    },
}

/// Validates `action` against the board at the current step.
///
/// `history_len` counts steps, the initial empty board included.
#[instrument(skip(board))]
pub fn check(action: &Action, board: &Board, history_len: usize) -> Result<(), Rejection> {
    match *action {
        Action::Play(pos) => {
            if check_winner(board).is_some() {
                return Err(Rejection::GameOver);
            }
            if !board.is_empty(pos) {
                return Err(Rejection::SquareOccupied(pos));
            }
            Ok(())
        }
        Action::JumpTo(step) => {
            if step >= history_len {
                return Err(Rejection::StepOutOfRange {
                    step,
                    len: history_len,
                });
            }
            Ok(())
        }
        Action::ToggleOrder => Ok(()),
    }
}
