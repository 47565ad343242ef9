//! History consistency invariant: every entry follows from the one before it.

use super::Invariant;
use crate::history::{Snapshot, mark_for};
use crate::rules::check_winner;
use crate::{Board, LocalState, Position, StoreState};

/// Invariant: each recorded move is legal on the board before it.
///
/// A move lands on an empty square of a board with no winner, carries the
/// mark of its turn, and changes nothing else. The initial entry is empty.
pub struct HistoryConsistentInvariant;

/// Replays `moves` and checks every step against the rules.
fn moves_are_legal(moves: &[Position]) -> bool {
    let mut board = Board::new();
    for (index, pos) in moves.iter().enumerate() {
        if check_winner(&board).is_some() || !board.is_empty(*pos) {
            return false;
        }
        board = board.with_mark(*pos, mark_for(index));
    }
    true
}

impl Invariant<LocalState> for HistoryConsistentInvariant {
    fn holds(state: &LocalState) -> bool {
        let Some((first, rest)) = state.snapshots.split_first() else {
            return false;
        };
        if *first != Snapshot::initial() {
            return false;
        }

        let mut moves = Vec::with_capacity(rest.len());
        let mut previous = first;
        for snapshot in rest {
            let Some(pos) = snapshot.played() else {
                return false;
            };
            if previous.then(pos, mark_for(moves.len())) != *snapshot {
                return false;
            }
            moves.push(pos);
            previous = snapshot;
        }

        moves_are_legal(&moves)
    }

    fn description() -> &'static str {
        "Each history entry is a legal move away from the previous one"
    }
}

impl Invariant<StoreState> for HistoryConsistentInvariant {
    fn holds(state: &StoreState) -> bool {
        moves_are_legal(&state.moves)
    }

    fn description() -> &'static str {
        "Each history entry is a legal move away from the previous one"
    }
}
