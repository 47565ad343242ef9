//! Application state and logic.

use crate::input::{Command, Focus, move_cursor};
use crate::variant::Variant;
use tictactoe_history::{GameModel, GameView, HistoryOrder, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Holds no game state of its own; everything game-related lives in the
/// [`GameModel`] and is read back through [`App::view`].
pub struct App {
    game: Box<dyn GameModel>,
    variant: Variant,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(variant: Variant, order: HistoryOrder) -> Self {
        info!(%variant, %order, "Starting new game");
        Self {
            game: variant.new_game(order),
            variant,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            should_quit: false,
        }
    }

    /// Derived view of the current game.
    pub fn view(&self) -> GameView {
        self.game.view()
    }

    /// Architecture backing the current game.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the selected entry in the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one decoded key command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Command::PlayCursor => self.play(self.cursor),
            Command::PlayCell(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Command::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }
            Command::SelectNext => {
                let last = self.game.history_len().saturating_sub(1);
                self.selected = (self.selected + 1).min(last);
            }
            Command::JumpSelected => {
                if let Some(entry) = self.game.moves().get(self.selected) {
                    self.jump(entry.step);
                }
            }
            Command::StepBack => {
                if let Some(step) = self.game.step().checked_sub(1) {
                    self.jump(step);
                }
            }
            Command::StepForward => self.jump(self.game.step() + 1),
            Command::ToggleOrder => {
                self.game.toggle_order();
                self.select_current();
            }
            Command::SwitchFocus => {
                self.focus = self.focus.toggle();
                self.select_current();
            }
            Command::SwitchVariant => {
                self.variant = self.variant.toggle();
                info!(variant = %self.variant, "Switching variant");
                self.game = self.variant.new_game(self.game.order());
                self.cursor = Position::Center;
                self.select_current();
            }
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        if self.game.play(pos) {
            debug!(position = %pos, step = self.game.step(), "Move applied");
        } else {
            debug!(position = %pos, "Move ignored");
        }
        self.select_current();
    }

    fn jump(&mut self, step: usize) {
        if self.game.jump_to(step) {
            debug!(step, "Jumped");
        }
        self.select_current();
    }

    /// Points the selection at the entry for the current step.
    fn select_current(&mut self) {
        self.selected = self
            .game
            .moves()
            .iter()
            .position(|entry| entry.is_current)
            .unwrap_or(0);
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("variant", &self.variant)
            .field("step", &self.game.step())
            .field("cursor", &self.cursor)
            .field("focus", &self.focus)
            .field("selected", &self.selected)
            .finish()
    }
}
