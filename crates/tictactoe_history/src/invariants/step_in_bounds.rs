//! Step pointer invariant: the current step names an existing history entry.

use super::Invariant;
use crate::{LocalState, StoreState};

/// Invariant: `step < history_len`.
pub struct StepInBoundsInvariant;

impl Invariant<LocalState> for StepInBoundsInvariant {
    fn holds(state: &LocalState) -> bool {
        state.step < state.snapshots.len()
    }

    fn description() -> &'static str {
        "Step points into the history"
    }
}

impl Invariant<StoreState> for StepInBoundsInvariant {
    fn holds(state: &StoreState) -> bool {
        state.step < state.history_len()
    }

    fn description() -> &'static str {
        "Step points into the history"
    }
}
