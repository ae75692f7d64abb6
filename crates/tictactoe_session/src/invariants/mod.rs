//! First-class invariants for a game session.
//!
//! Invariants are logical properties of a [`GameSession`] that every
//! transition must preserve. They are checked after each play in debug
//! builds and can be tested on their own.

use crate::GameSession;

pub mod alternating_marks;
pub mod current_move_in_range;
pub mod single_cell_steps;

pub use alternating_marks::AlternatingMarks;
pub use current_move_in_range::CurrentMoveInRange;
pub use single_cell_steps::SingleCellSteps;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
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
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (CurrentMoveInRange, SingleCellSteps, AlternatingMarks);

/// Panics if any session invariant is violated.
#[cfg(debug_assertions)]
pub(crate) fn assert_invariants(session: &GameSession) {
    if let Err(violations) = SessionInvariants::check_all(session) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::warn!(%descriptions, "Session invariant violated");
        panic!("Session invariant violated: {}", descriptions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Mark, Position};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        assert!(SessionInvariants::check_all(&GameSession::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut session = GameSession::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            session.select(pos).expect("legal move");
        }
        session.jump_to(1);
        session.select(Position::BottomLeft).expect("legal move");
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_collects_every_violation() {
        // O moved first and the replay pointer is past the end.
        let first = Board::new().with_mark(Position::Center, Mark::O);
        let session = GameSession::from_parts(vec![Board::new(), first], 5);

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, CurrentMoveInRange::description());
        assert_eq!(violations[1].description, AlternatingMarks::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (CurrentMoveInRange, SingleCellSteps);
        assert!(TwoInvariants::check_all(&GameSession::new()).is_ok());
    }
}
