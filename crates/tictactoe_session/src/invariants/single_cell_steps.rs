//! Snapshot step invariant: each play fills exactly one empty square.

use super::Invariant;
use crate::GameSession;

/// Invariant: consecutive snapshots differ in exactly one square, which was
/// empty in the earlier snapshot.
pub struct SingleCellSteps;

impl Invariant<GameSession> for SingleCellSteps {
    fn holds(session: &GameSession) -> bool {
        session.history().windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            match before.diff(after).as_slice() {
                [pos] => before.is_empty(*pos),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}
