//! Read-side derivations: status text, move descriptors and their order.
//!
//! Nothing here mutates game state. Renderers receive a [`GameView`] and
//! draw it as-is.

use super::rules::WinnerInfo;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum HistoryOrder {
    /// Oldest move first.
    #[default]
    #[serde(rename = "asc")]
    #[strum(to_string = "asc", serialize = "ascending")]
    Ascending,
    /// Newest move first.
    #[serde(rename = "desc")]
    #[strum(to_string = "desc", serialize = "descending")]
    Descending,
}

impl HistoryOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// True for [`HistoryOrder::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }
}

/// The one-line game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// Someone has three in a row.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// All nine moves made, nobody won.
    #[display("Draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// True once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

/// Computes the status line for the board at `step`.
pub fn status(winner: &WinnerInfo, step: usize) -> Status {
    match winner.winner {
        Some(player) => Status::Winner(player),
        None if step == 9 => Status::Draw,
        None => Status::NextPlayer(Player::to_move_at(step)),
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// History step this entry jumps to.
    pub step: usize,
    /// Position played to reach the step, `None` for the game start.
    pub position: Option<Position>,
    /// True when this is the step currently displayed.
    pub is_current: bool,
}

impl MoveDescriptor {
    /// Text of the jump button.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }

    /// `"move #n>"` for real moves, empty for the game start.
    pub fn prefix(&self) -> String {
        if self.step == 0 {
            String::new()
        } else {
            format!("move #{}>", self.step)
        }
    }

    /// 1-based column and row of the move, empty for the game start.
    pub fn location(&self) -> String {
        match self.position {
            Some(pos) => format!("col: {} row: {}", pos.column() + 1, pos.row() + 1),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = self.prefix();
        let location = self.location();
        if prefix.is_empty() {
            write!(f, "{}", self.label())
        } else {
            write!(f, "{} {} [{}]", prefix, location, self.label())
        }
    }
}

/// Builds one descriptor per history step, in ascending step order.
///
/// `played` yields the position played to reach each step (`None` for step 0).
pub fn describe_moves(
    played: impl IntoIterator<Item = Option<Position>>,
    current: usize,
) -> Vec<MoveDescriptor> {
    played
        .into_iter()
        .enumerate()
        .map(|(step, position)| MoveDescriptor {
            step,
            position,
            is_current: step == current,
        })
        .collect()
}

/// Reorders ascending descriptors for display.
pub fn ordered(mut moves: Vec<MoveDescriptor>, order: HistoryOrder) -> Vec<MoveDescriptor> {
    if !order.is_ascending() {
        moves.reverse();
    }
    moves
}

/// Everything a renderer needs, computed from one state value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the current step.
    pub board: Board,
    /// Winner of that board, if any.
    pub winner: WinnerInfo,
    /// Status line.
    pub status: Status,
    /// Current step.
    pub step: usize,
    /// Move list, already in display order.
    pub moves: Vec<MoveDescriptor>,
    /// Display order of `moves`.
    pub order: HistoryOrder,
}

impl GameView {
    /// Derives the view for a board at `step`.
    #[instrument(skip(board, played))]
    pub fn derive(
        board: Board,
        step: usize,
        played: impl IntoIterator<Item = Option<Position>>,
        order: HistoryOrder,
    ) -> Self {
        let winner = super::rules::winner_info(&board);
        Self {
            board,
            winner,
            status: status(&winner, step),
            step,
            moves: ordered(describe_moves(played, step), order),
            order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_order_toggle_is_an_involution() {
        for order in [HistoryOrder::Ascending, HistoryOrder::Descending] {
            assert_ne!(order.toggle(), order);
            assert_eq!(order.toggle().toggle(), order);
        }
    }

    #[test]
    fn test_order_parses_short_and_long_names() {
        assert_eq!(HistoryOrder::from_str("asc"), Ok(HistoryOrder::Ascending));
        assert_eq!(HistoryOrder::from_str("descending"), Ok(HistoryOrder::Descending));
        assert!(HistoryOrder::from_str("sideways").is_err());
        assert_eq!(HistoryOrder::Descending.to_string(), "desc");
    }

    #[test]
    fn test_status_text() {
        let x_wins = WinnerInfo {
            winner: Some(Player::X),
            line: None,
        };
        assert_eq!(status(&x_wins, 5).to_string(), "Winner: X");
        assert_eq!(status(&WinnerInfo::default(), 9).to_string(), "Draw");
        assert_eq!(status(&WinnerInfo::default(), 0).to_string(), "Next player: X");
        assert_eq!(status(&WinnerInfo::default(), 3).to_string(), "Next player: O");
    }

    #[test]
    fn test_win_on_last_move_is_not_a_draw() {
        let info = WinnerInfo {
            winner: Some(Player::X),
            line: None,
        };
        assert_eq!(status(&info, 9), Status::Winner(Player::X));
        assert!(status(&info, 9).is_over());
    }

    #[test]
    fn test_descriptor_text() {
        let start = MoveDescriptor {
            step: 0,
            position: None,
            is_current: false,
        };
        assert_eq!(start.label(), "Go to game start");
        assert_eq!(start.prefix(), "");
        assert_eq!(start.location(), "");
        assert_eq!(start.to_string(), "Go to game start");

        let third = MoveDescriptor {
            step: 3,
            position: Some(Position::MiddleRight),
            is_current: true,
        };
        assert_eq!(third.label(), "Go to move #3");
        assert_eq!(third.prefix(), "move #3>");
        assert_eq!(third.location(), "col: 3 row: 2");
        assert_eq!(third.to_string(), "move #3> col: 3 row: 2 [Go to move #3]");
    }

    #[test]
    fn test_descending_reverses_steps() {
        let played = [None, Some(Position::Center), Some(Position::TopLeft)];
        let moves = ordered(describe_moves(played, 1), HistoryOrder::Descending);
        let steps: Vec<_> = moves.iter().map(|m| m.step).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        assert!(moves[1].is_current);
    }
}
