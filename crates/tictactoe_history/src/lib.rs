//! Tic-tac-toe with a navigable, branch-pruning move history.
//!
//! Two functionally equivalent architectures share one set of rules:
//!
//! - **Local state**: [`LocalGame`] owns a [`LocalState`] holding a full
//!   board [`Snapshot`] for every step. Each transition builds a new value.
//! - **Store**: [`Store`] owns a [`StoreState`] holding only the played
//!   positions. Boards are rebuilt with [`replay`] on every read, and the
//!   state is replaced only by the pure [`reduce`] function in response to
//!   dispatched [`Action`]s.
//!
//! Both implement [`GameModel`], the complete read/write surface a front end
//! needs: current board, winner and winning line, status text, the ordered
//! move list, and the three actions (play, jump, toggle order).
//!
//! Illegal actions (an occupied square, a move after a win, a jump outside
//! the history) leave the state unchanged. X always moves first.
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameModel, HistoryOrder, Position, Store, StoreState};
//!
//! let mut store = Store::new(StoreState::new(HistoryOrder::Ascending));
//! for index in [0, 4, 1, 2, 7] {
//!     store.play(Position::from_index(index).unwrap());
//! }
//! assert_eq!(store.status().to_string(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod history;
pub mod invariants;
mod local;
mod model;
mod position;
pub mod rules;
mod store;
mod types;
pub mod view;

pub use action::{Action, Rejection, check};
pub use history::{Snapshot, replay};
pub use local::{LocalGame, LocalState};
pub use model::GameModel;
pub use position::{Position, PositionError};
pub use rules::{WinnerInfo, winner_info};
pub use store::{Listener, Store, StoreState, reduce, validate};
pub use types::{Board, Player, Square};
pub use view::{GameView, HistoryOrder, MoveDescriptor, Status};
