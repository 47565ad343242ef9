//! Keyboard mapping and cursor movement.
//!
//! Kept free of terminal I/O so every binding is testable.

use crossterm::event::KeyCode;
use tictactoe_history::Position;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move the history selection.
    History,
}

impl Focus {
    /// Returns the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Cursor direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// A UI command decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Play the square under the cursor.
    PlayCursor,
    /// Play a square directly.
    PlayCell(Position),
    /// Select the entry above in the move list.
    SelectPrevious,
    /// Select the entry below in the move list.
    SelectNext,
    /// Jump to the selected move-list entry.
    JumpSelected,
    /// Jump one step back.
    StepBack,
    /// Jump one step forward.
    StepForward,
    /// Flip the move list order.
    ToggleOrder,
    /// Move focus to the other panel.
    SwitchFocus,
    /// Start a fresh game on the other architecture.
    SwitchVariant,
    /// Leave the application.
    Quit,
}

/// Moves cursor one square, staying put at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, column)),
        Direction::Down => Some((row + 1, column)),
        Direction::Left => column.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, column + 1)),
    };
    target
        .and_then(|(r, c)| Position::from_row_column(r, c))
        .unwrap_or(cursor)
}

/// Decodes a key for the focused panel.
pub fn map_key(key: KeyCode, focus: Focus) -> Option<Command> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Command::SwitchFocus),
        KeyCode::Char('s') => Some(Command::ToggleOrder),
        KeyCode::Char('v') => Some(Command::SwitchVariant),
        KeyCode::Char('[') => Some(Command::StepBack),
        KeyCode::Char(']') => Some(Command::StepForward),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Command::PlayCell),
        code => match focus {
            Focus::Board => map_board_key(code),
            Focus::History => map_history_key(code),
        },
    }
}

fn map_board_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up => Some(Command::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Command::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Command::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Command::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlayCursor),
        _ => None,
    }
}

fn map_history_key(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::JumpSelected),
        _ => None,
    }
}
