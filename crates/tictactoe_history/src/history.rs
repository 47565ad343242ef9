//! Move history: board snapshots and replay from played positions.
//!
//! The local variant keeps a full [`Snapshot`] per step. The store variant
//! keeps only the played positions and rebuilds the board with [`replay`]
//! whenever it is read.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The player who places the mark of the `index`-th move (0-based).
///
/// X always opens, so even move indices belong to X.
pub fn mark_for(index: usize) -> Player {
    Player::to_move_at(index)
}

/// Board state at one step of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    played: Option<Position>,
}

impl Snapshot {
    /// The empty board before any move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            played: None,
        }
    }

    /// The snapshot that follows `self` once `player` marks `pos`.
    pub fn then(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            played: Some(pos),
        }
    }

    /// The board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The position played to reach this step, `None` for the initial entry.
    pub fn played(&self) -> Option<Position> {
        self.played
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

/// Rebuilds the board after the first `step` moves.
///
/// Marks alternate starting with X. A `step` past the end of `moves`
/// replays the whole history.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[Position], step: usize) -> Board {
    moves
        .iter()
        .take(step)
        .enumerate()
        .fold(Board::new(), |board, (index, pos)| {
            board.with_mark(*pos, mark_for(index))
        })
}

/// Expands played positions into the snapshot sequence, initial entry included.
pub fn snapshots(moves: &[Position]) -> Vec<Snapshot> {
    let mut history = Vec::with_capacity(moves.len() + 1);
    let mut current = Snapshot::initial();
    history.push(current);
    for (index, pos) in moves.iter().enumerate() {
        current = current.then(*pos, mark_for(index));
        history.push(current);
    }
    history
}
