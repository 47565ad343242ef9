//! Alternating turn invariant: X and O take turns, X first.

use super::Invariant;
use crate::{Board, LocalState, Player, StoreState};

/// Invariant: X has as many marks as O, or exactly one more.
pub struct AlternatingTurnInvariant;

fn balanced(board: &Board) -> bool {
    let x = board.count(Player::X);
    let o = board.count(Player::O);
    x == o || x == o + 1
}

impl Invariant<LocalState> for AlternatingTurnInvariant {
    fn holds(state: &LocalState) -> bool {
        state.snapshots.iter().all(|snapshot| balanced(snapshot.board()))
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

impl Invariant<StoreState> for AlternatingTurnInvariant {
    fn holds(state: &StoreState) -> bool {
        balanced(&state.board())
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Snapshot;
    use crate::{HistoryOrder, Position};

    #[test]
    fn test_alternating_game_holds() {
        let state = LocalState::default()
            .play(Position::Center)
            .play(Position::TopLeft)
            .play(Position::BottomLeft);
        assert!(AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_o_first_violates() {
        let initial = Snapshot::initial();
        let state = LocalState {
            snapshots: vec![initial, initial.then(Position::Center, Player::O)],
            step: 1,
            order: HistoryOrder::Ascending,
        };
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_store_board_holds() {
        let state = StoreState {
            moves: vec![Position::Center, Position::TopLeft, Position::TopRight],
            step: 3,
            order: HistoryOrder::Descending,
        };
        assert!(AlternatingTurnInvariant::holds(&state));
    }
}
