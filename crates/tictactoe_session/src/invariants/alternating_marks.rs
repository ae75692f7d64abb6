//! Turn order invariant: X places on odd steps, O on even steps.

use super::Invariant;
use crate::{GameSession, Mark, Square};

/// Invariant: the mark added by step `k` belongs to the player whose turn it
/// was after `k - 1` plays.
///
/// Steps that do not add exactly one mark are left to
/// [`SingleCellSteps`](super::SingleCellSteps).
pub struct AlternatingMarks;

impl Invariant<GameSession> for AlternatingMarks {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .windows(2)
            .enumerate()
            .all(|(plays, pair)| match pair[0].diff(&pair[1]).as_slice() {
                [pos] => pair[1].get(*pos) == Square::Occupied(Mark::for_turn(plays)),
                _ => true,
            })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
