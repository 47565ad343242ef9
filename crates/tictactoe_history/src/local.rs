//! Local-state variant: one root value owning full board snapshots.
//!
//! [`LocalState`] is an immutable value; every transition returns a new one.
//! [`LocalGame`] is the stateful root that swaps its state for the result.

use super::action::{Action, Rejection, check};
use super::history::Snapshot;
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation, validated};
use super::model::GameModel;
use super::view::HistoryOrder;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Snapshot history, step pointer and display order.
///
/// Deserialized values are checked against the history invariants, so a
/// value that no sequence of transitions could produce is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LocalStateFields")]
pub struct LocalState {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) step: usize,
    pub(crate) order: HistoryOrder,
}

/// Unchecked wire form of [`LocalState`].
#[derive(Deserialize)]
struct LocalStateFields {
    snapshots: Vec<Snapshot>,
    step: usize,
    order: HistoryOrder,
}

impl TryFrom<LocalStateFields> for LocalState {
    type Error = InvariantViolation;

    fn try_from(fields: LocalStateFields) -> Result<Self, Self::Error> {
        validated(Self {
            snapshots: fields.snapshots,
            step: fields.step,
            order: fields.order,
        })
    }
}

impl LocalState {
    /// Creates the initial state: one empty snapshot at step 0.
    pub fn new(order: HistoryOrder) -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            step: 0,
            order,
        }
    }

    /// All snapshots, the initial empty board first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Current step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Display order of the move list.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Snapshot at the current step.
    pub fn current(&self) -> &Snapshot {
        // step < snapshots.len() holds for every value this module builds
        &self.snapshots[self.step]
    }

    /// The player whose mark the next accepted play places.
    pub fn next_player(&self) -> Player {
        Player::to_move_at(self.step)
    }

    /// Returns the state after `action`, or why it was rejected.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn try_apply(&self, action: &Action) -> Result<Self, Rejection> {
        check(action, self.current().board(), self.snapshots.len())?;

        let next = match *action {
            Action::Play(pos) => {
                let mut snapshots = self.snapshots[..=self.step].to_vec();
                snapshots.push(self.current().then(pos, self.next_player()));
                Self {
                    step: snapshots.len() - 1,
                    snapshots,
                    order: self.order,
                }
            }
            Action::JumpTo(step) => Self {
                snapshots: self.snapshots.clone(),
                step,
                order: self.order,
            },
            Action::ToggleOrder => Self {
                snapshots: self.snapshots.clone(),
                step: self.step,
                order: self.order.toggle(),
            },
        };

        debug_assert!(HistoryInvariants::check_all(&next).is_ok());
        Ok(next)
    }

    /// Returns the state after `action`; rejected actions yield an unchanged copy.
    pub fn apply(&self, action: &Action) -> Self {
        match self.try_apply(action) {
            Ok(next) => next,
            Err(rejection) => {
                debug!(%action, %rejection, "Action ignored");
                self.clone()
            }
        }
    }

    /// Plays the next mark at `pos`.
    pub fn play(&self, pos: Position) -> Self {
        self.apply(&Action::Play(pos))
    }

    /// Moves to `step` of the history.
    pub fn jump_to(&self, step: usize) -> Self {
        self.apply(&Action::JumpTo(step))
    }

    /// Flips the move list order.
    pub fn toggle_order(&self) -> Self {
        self.apply(&Action::ToggleOrder)
    }
}

impl Default for LocalState {
    fn default() -> Self {
        Self::new(HistoryOrder::default())
    }
}

/// Stateful root of the local-state variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalGame {
    state: LocalState,
}

impl LocalGame {
    /// Creates a new game.
    #[instrument]
    pub fn new(order: HistoryOrder) -> Self {
        Self {
            state: LocalState::new(order),
        }
    }
}

impl GameModel for LocalGame {
    fn board(&self) -> Board {
        *self.state.current().board()
    }

    fn step(&self) -> usize {
        self.state.step
    }

    fn history_len(&self) -> usize {
        self.state.snapshots.len()
    }

    fn order(&self) -> HistoryOrder {
        self.state.order
    }

    fn played_at(&self, step: usize) -> Option<Position> {
        self.state.snapshots.get(step).and_then(Snapshot::played)
    }

    #[instrument(skip(self))]
    fn apply(&mut self, action: Action) -> bool {
        let next = self.state.apply(&action);
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play_all(indices: &[usize]) -> LocalState {
        indices.iter().fold(LocalState::default(), |state, index| {
            state.play(Position::from_index(*index).unwrap())
        })
    }

    #[test]
    fn test_first_move_is_x() {
        let state = LocalState::default().play(Position::Center);
        assert_eq!(
            state.current().board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(state.next_player(), Player::O);
    }

    #[test]
    fn test_play_appends_snapshot() {
        let state = play_all(&[4, 0, 8]);
        assert_eq!(state.step(), 3);
        assert_eq!(state.snapshots().len(), 4);
        assert_eq!(state.current().played(), Some(Position::BottomRight));
    }

    #[test]
    fn test_play_does_not_mutate_previous_state() {
        let before = play_all(&[4]);
        let snapshot = before.clone();
        let _after = before.play(Position::TopLeft);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_occupied_square_is_no_op() {
        let state = play_all(&[4]);
        assert_eq!(state.play(Position::Center), state);
        assert_eq!(
            state.try_apply(&Action::Play(Position::Center)),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_jump_keeps_snapshots_and_sets_turn() {
        let state = play_all(&[4, 0, 8]).jump_to(1);
        assert_eq!(state.step(), 1);
        assert_eq!(state.snapshots().len(), 4);
        assert_eq!(state.next_player(), Player::O);
    }

    #[test]
    fn test_play_after_jump_prunes_future() {
        let state = play_all(&[4, 0, 8]).jump_to(1).play(Position::TopRight);
        assert_eq!(state.step(), 2);
        assert_eq!(state.snapshots().len(), 3);
        assert_eq!(state.current().played(), Some(Position::TopRight));
        assert!(state.current().board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_out_of_range_jump_is_no_op() {
        let state = play_all(&[4, 0]);
        assert_eq!(state.jump_to(3), state);
    }

    #[test]
    fn test_game_model_reports_change() {
        let mut game = LocalGame::new(HistoryOrder::Ascending);
        assert!(game.play(Position::Center));
        assert!(!game.play(Position::Center));
        assert!(game.toggle_order());
        assert_eq!(game.order(), HistoryOrder::Descending);
        assert_eq!(game.history_len(), 2);
        assert_eq!(game.played_at(1), Some(Position::Center));
        assert_eq!(game.played_at(0), None);
        assert_eq!(game.played_at(7), None);
    }

    #[test]
    fn test_deserialize_checks_invariants() {
        let state = play_all(&[4, 0]).jump_to(1);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<LocalState>(&json).unwrap(), state);

        let empty = r#"{"snapshots":[],"step":0,"order":"asc"}"#;
        let err = serde_json::from_str::<LocalState>(empty).unwrap_err();
        assert!(err.to_string().contains("Invariant violation"));

        let mut value = serde_json::to_value(&state).unwrap();
        value["step"] = serde_json::json!(5);
        assert!(serde_json::from_value::<LocalState>(value).is_err());
    }
}
