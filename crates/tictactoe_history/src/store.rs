//! Store variant: one application state, replaced only by [`reduce`].
//!
//! The state keeps nothing but the played positions; the board for any step
//! is rebuilt with [`replay`](crate::history::replay) each time it is read.
//! Presentation code reads the state through [`Store::state`] and changes it
//! only through [`Store::dispatch`].

use super::action::{Action, Rejection, check};
use super::history::replay;
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation, validated};
use super::model::GameModel;
use super::view::HistoryOrder;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Played positions, step pointer and display order.
///
/// Deserialization rejects values that break the history invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoreStateFields")]
pub struct StoreState {
    pub(crate) moves: Vec<Position>,
    pub(crate) step: usize,
    pub(crate) order: HistoryOrder,
}

#[derive(Deserialize)]
struct StoreStateFields {
    moves: Vec<Position>,
    step: usize,
    order: HistoryOrder,
}

impl TryFrom<StoreStateFields> for StoreState {
    type Error = InvariantViolation;

    fn try_from(fields: StoreStateFields) -> Result<Self, Self::Error> {
        validated(Self {
            moves: fields.moves,
            step: fields.step,
            order: fields.order,
        })
    }
}

impl StoreState {
    /// Creates the initial state with no moves.
    pub fn new(order: HistoryOrder) -> Self {
        Self {
            moves: Vec::new(),
            step: 0,
            order,
        }
    }

    /// Played positions, oldest first.
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// Current step; `step` moves have been applied to the board shown.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Display order of the move list.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Number of steps, the initial empty board included.
    pub fn history_len(&self) -> usize {
        self.moves.len() + 1
    }

    /// Board at the current step, rebuilt from the moves.
    pub fn board(&self) -> Board {
        replay(&self.moves, self.step)
    }

    /// The player whose mark the next accepted play places.
    pub fn next_player(&self) -> Player {
        Player::to_move_at(self.step)
    }
}

/// Validates `action` against `state`.
pub fn validate(state: &StoreState, action: &Action) -> Result<(), Rejection> {
    check(action, &state.board(), state.history_len())
}

/// Computes the state that follows `action`.
///
/// Pure: `state` is never modified. Rejected actions return an equal copy.
#[instrument(skip(state), fields(step = state.step, moves = state.moves.len()))]
pub fn reduce(state: &StoreState, action: &Action) -> StoreState {
    if let Err(rejection) = validate(state, action) {
        debug!(%action, %rejection, "Action ignored");
        return state.clone();
    }

    let next = match *action {
        Action::Play(pos) => {
            let mut moves = state.moves[..state.step].to_vec();
            moves.push(pos);
            StoreState {
                step: moves.len(),
                moves,
                order: state.order,
            }
        }
        Action::JumpTo(step) => StoreState {
            moves: state.moves.clone(),
            step,
            order: state.order,
        },
        Action::ToggleOrder => StoreState {
            moves: state.moves.clone(),
            step: state.step,
            order: state.order.toggle(),
        },
    };

    debug_assert!(HistoryInvariants::check_all(&next).is_ok());
    next
}

/// Callback run after every dispatch that changed the state.
pub type Listener = Box<dyn FnMut(&StoreState)>;

/// Owner of the one [`StoreState`].
pub struct Store {
    state: StoreState,
    listeners: Vec<Listener>,
}

impl Store {
    /// Creates a store holding `state`.
    #[instrument(skip(state))]
    pub fn new(state: StoreState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    /// The current state.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Registers a listener called with each new state.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replaces the state with `reduce(state, action)`.
    ///
    /// Returns true and notifies listeners when the state changed.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = reduce(&self.state, &action);
        if next == self.state {
            return false;
        }
        self.state = next;
        debug!(step = self.state.step, moves = self.state.moves.len(), "State replaced");
        for listener in &mut self.listeners {
            listener(&self.state);
        }
        true
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreState::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GameModel for Store {
    fn board(&self) -> Board {
        self.state.board()
    }

    fn step(&self) -> usize {
        self.state.step
    }

    fn history_len(&self) -> usize {
        self.state.history_len()
    }

    fn order(&self) -> HistoryOrder {
        self.state.order
    }

    fn played_at(&self, step: usize) -> Option<Position> {
        step.checked_sub(1)
            .and_then(|index| self.state.moves.get(index))
            .copied()
    }

    fn apply(&mut self, action: Action) -> bool {
        self.dispatch(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn reduce_all(actions: &[Action]) -> StoreState {
        actions
            .iter()
            .fold(StoreState::default(), |state, action| reduce(&state, action))
    }

    #[test]
    fn test_play_records_position_only() {
        let state = reduce_all(&[Action::Play(Position::Center), Action::Play(Position::TopLeft)]);
        assert_eq!(state.moves(), &[Position::Center, Position::TopLeft]);
        assert_eq!(state.step(), 2);
        assert_eq!(state.board().get(Position::TopLeft), Square::Occupied(Player::O));
    }

    #[test]
    fn test_reduce_is_pure() {
        let state = reduce_all(&[Action::Play(Position::Center)]);
        let copy = state.clone();
        let _next = reduce(&state, &Action::Play(Position::TopLeft));
        assert_eq!(state, copy);
    }

    #[test]
    fn test_toggle_leaves_game_alone() {
        let state = reduce_all(&[Action::Play(Position::Center)]);
        let toggled = reduce(&state, &Action::ToggleOrder);
        assert_eq!(toggled.order(), HistoryOrder::Descending);
        assert_eq!(toggled.moves(), state.moves());
        assert_eq!(toggled.step(), state.step());
    }

    #[test]
    fn test_jump_then_play_truncates() {
        let state = reduce_all(&[
            Action::Play(Position::Center),
            Action::Play(Position::TopLeft),
            Action::Play(Position::BottomRight),
            Action::JumpTo(1),
            Action::Play(Position::TopRight),
        ]);
        assert_eq!(state.moves(), &[Position::Center, Position::TopRight]);
        assert_eq!(state.step(), 2);
    }

    #[test]
    fn test_validate_names_reason() {
        let state = reduce_all(&[Action::Play(Position::Center)]);
        assert_eq!(
            validate(&state, &Action::JumpTo(5)),
            Err(Rejection::StepOutOfRange { step: 5, len: 2 })
        );
        assert_eq!(
            validate(&state, &Action::Play(Position::Center)),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_listeners_see_only_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.step()));

        assert!(store.dispatch(Action::Play(Position::Center)));
        assert!(!store.dispatch(Action::Play(Position::Center)));
        assert!(store.dispatch(Action::JumpTo(0)));

        assert_eq!(*seen.borrow(), vec![1, 0]);
    }

    #[test]
    fn test_played_at_offsets_initial_entry() {
        let mut store = Store::default();
        store.play(Position::Center);
        store.play(Position::TopLeft);
        assert_eq!(store.played_at(0), None);
        assert_eq!(store.played_at(1), Some(Position::Center));
        assert_eq!(store.played_at(2), Some(Position::TopLeft));
        assert_eq!(store.played_at(3), None);
    }

    #[test]
    fn test_deserialize_checks_invariants() {
        let json = r#"{"moves":["Center","TopLeft"],"step":1,"order":"desc"}"#;
        let state: StoreState = serde_json::from_str(json).unwrap();
        assert_eq!(state.step(), 1);
        assert_eq!(state.order(), HistoryOrder::Descending);

        let past_end = r#"{"moves":["Center"],"step":5,"order":"asc"}"#;
        let err = serde_json::from_str::<StoreState>(past_end).unwrap_err();
        assert!(err.to_string().contains("Step points into the history"));

        let repeated = r#"{"moves":["Center","Center"],"step":2,"order":"asc"}"#;
        assert!(serde_json::from_str::<StoreState>(repeated).is_err());
    }
}
