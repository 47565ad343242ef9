//! Which game architecture backs the UI.

use serde::{Deserialize, Serialize};
use tictactoe_history::{GameModel, HistoryOrder, LocalGame, Store, StoreState};
use tracing::{debug, instrument};

/// Game architecture selectable from the CLI and config file.
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
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// Root value holding full board snapshots.
    Local,
    /// Reducer-driven store holding played positions only.
    #[default]
    Store,
}

impl Variant {
    /// Returns the other variant.
    pub fn toggle(self) -> Self {
        match self {
            Self::Local => Self::Store,
            Self::Store => Self::Local,
        }
    }

    /// Creates a fresh game of this variant.
    #[instrument]
    pub fn new_game(self, order: HistoryOrder) -> Box<dyn GameModel> {
        match self {
            Self::Local => Box::new(LocalGame::new(order)),
            Self::Store => {
                let mut store = Store::new(StoreState::new(order));
                store.subscribe(|state| {
                    debug!(
                        step = state.step(),
                        moves = state.moves().len(),
                        order = %state.order(),
                        "Store updated"
                    );
                });
                Box::new(store)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use tictactoe_history::Position;

    #[test]
    fn test_parse_and_display() {
        assert_eq!(Variant::from_str("local"), Ok(Variant::Local));
        assert_eq!(Variant::Store.to_string(), "store");
        assert!(Variant::from_str("redux").is_err());
    }

    #[test]
    fn test_new_game_is_empty_for_both() {
        for variant in <Variant as strum::IntoEnumIterator>::iter() {
            let mut game = variant.new_game(HistoryOrder::Descending);
            assert_eq!(game.step(), 0);
            assert_eq!(game.order(), HistoryOrder::Descending);
            assert!(game.play(Position::Center));
            assert_eq!(variant.toggle().toggle(), variant);
        }
    }
}
