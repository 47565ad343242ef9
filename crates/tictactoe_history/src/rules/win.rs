//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, checked in this order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
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

/// Winner of a board together with the line that won it.
///
/// Both fields are `None` when nobody has three in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinnerInfo {
    /// The winning player.
    pub winner: Option<Player>,
    /// The three winning positions.
    pub line: Option<[Position; 3]>,
}

impl WinnerInfo {
    /// Returns true if `pos` belongs to the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.line.is_some_and(|line| line.contains(&pos))
    }
}

/// Finds the first line holding three identical marks.
#[instrument(skip(board))]
pub fn winner_info(board: &Board) -> WinnerInfo {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return WinnerInfo {
                winner: Some(player),
                line: Some(line),
            };
        }
    }

    WinnerInfo::default()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winner_info(board).winner
}

impl Board {
    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self)
    }
}
