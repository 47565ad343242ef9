//! The read/write surface shared by both game variants.

use super::action::Action;
use super::rules::{WinnerInfo, winner_info};
use super::view::{self, GameView, HistoryOrder, MoveDescriptor, Status};
use super::{Board, Player, Position};

/// A tic-tac-toe game with a navigable move history.
///
/// Implementors provide the raw state; the derived view comes for free.
/// [`LocalGame`](crate::LocalGame) and [`Store`](crate::Store) implement it,
/// so front ends can drive either one.
pub trait GameModel {
    /// Board at the current step.
    fn board(&self) -> Board;

    /// Current step (0 is the empty board).
    fn step(&self) -> usize;

    /// Number of steps in the history, the initial empty board included.
    fn history_len(&self) -> usize;

    /// Display order of the move list.
    fn order(&self) -> HistoryOrder;

    /// Position played to reach `step`, `None` for step 0 or past the end.
    fn played_at(&self, step: usize) -> Option<Position>;

    /// Applies an action, replacing the held state.
    ///
    /// Returns false when the action was rejected and nothing changed.
    fn apply(&mut self, action: Action) -> bool;

    /// Winner of the current board.
    fn winner_info(&self) -> WinnerInfo {
        winner_info(&self.board())
    }

    /// The player whose mark the next accepted play places.
    fn next_player(&self) -> Player {
        Player::to_move_at(self.step())
    }

    /// Status line for the current step.
    fn status(&self) -> Status {
        view::status(&self.winner_info(), self.step())
    }

    /// Move list in display order.
    fn moves(&self) -> Vec<MoveDescriptor> {
        let played = (0..self.history_len()).map(|step| self.played_at(step));
        view::ordered(view::describe_moves(played, self.step()), self.order())
    }

    /// Complete derived view.
    fn view(&self) -> GameView {
        let played = (0..self.history_len()).map(|step| self.played_at(step));
        GameView::derive(self.board(), self.step(), played, self.order())
    }

    /// Plays the next mark at `pos`.
    fn play(&mut self, pos: Position) -> bool {
        self.apply(Action::Play(pos))
    }

    /// Moves to `step` of the history.
    fn jump_to(&mut self, step: usize) -> bool {
        self.apply(Action::JumpTo(step))
    }

    /// Flips the move list order.
    fn toggle_order(&mut self) -> bool {
        self.apply(Action::ToggleOrder)
    }
}
