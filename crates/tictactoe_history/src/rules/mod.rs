//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are separated from
//! history bookkeeping so both game variants share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinnerInfo, check_winner, winner_info};
