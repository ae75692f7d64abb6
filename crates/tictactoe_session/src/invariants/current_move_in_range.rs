//! Replay pointer invariant.

use super::Invariant;
use crate::{Board, GameSession};

/// Invariant: history starts at the empty board and `current_move` indexes it.
pub struct CurrentMoveInRange;

impl Invariant<GameSession> for CurrentMoveInRange {
    fn holds(session: &GameSession) -> bool {
        session.history().first() == Some(&Board::new())
            && session.current_move() < session.history().len()
    }

    fn description() -> &'static str {
        "History starts empty and current move indexes it"
    }
}
