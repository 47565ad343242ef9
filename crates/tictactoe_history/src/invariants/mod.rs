//! First-class invariants for game history.
//!
//! Invariants are logical properties that every state value produced by a
//! transition must satisfy. Transitions check them with `debug_assert!`, and
//! each one is testable on its own.

pub mod alternating_turn;
pub mod history_consistent;
pub mod step_in_bounds;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invariant violation: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    #[error(not(source))]
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns `Ok(())` if all invariants hold, or every violation otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

/// Every invariant a history state must satisfy.
pub type HistoryInvariants = (
    StepInBoundsInvariant,
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
);

/// Returns `state` if every history invariant holds for it.
///
/// Gate for state values built from outside the transitions, such as
/// deserialized ones. Multiple violations are reported together.
pub(crate) fn validated<S>(state: S) -> Result<S, InvariantViolation>
where
    HistoryInvariants: InvariantSet<S>,
{
    HistoryInvariants::check_all(&state).map_err(|violations| {
        let descriptions: Vec<_> = violations.into_iter().map(|v| v.description).collect();
        InvariantViolation::new(descriptions.join("; "))
    })?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, LocalState, Position, StoreState, reduce};

    #[test]
    fn test_invariant_set_holds_for_empty_games() {
        assert!(HistoryInvariants::check_all(&LocalState::default()).is_ok());
        assert!(HistoryInvariants::check_all(&StoreState::default()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let local = LocalState::default()
            .play(Position::TopLeft)
            .play(Position::Center)
            .play(Position::TopRight)
            .jump_to(1);
        assert!(HistoryInvariants::check_all(&local).is_ok());

        let store = [Action::Play(Position::TopLeft), Action::Play(Position::Center)]
            .iter()
            .fold(StoreState::default(), |state, action| reduce(&state, action));
        assert!(HistoryInvariants::check_all(&store).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (StepInBoundsInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&LocalState::default()).is_ok());
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation::new("Step points into the history");
        assert_eq!(
            violation.to_string(),
            "Invariant violation: Step points into the history"
        );
    }
}
