//! Serializable export of a session's visible state.

use crate::presenter::MoveEntry;
use crate::{Board, DisplayOrder, GameSession, Mark};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Everything a front end shows, captured at one instant.
///
/// Export only; sessions are never restored from it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct SessionSnapshot {
    /// Every recorded board, oldest first.
    history: Vec<Board>,
    /// Index of the displayed board.
    current_move: usize,
    /// Status line of the displayed board.
    status: String,
    /// Winning indices of the displayed board.
    winning_line: Option<[usize; 3]>,
    /// Winners recorded so far.
    winner_log: Vec<Mark>,
    /// Winners joined into one string.
    winner_string: String,
    /// Move list order.
    display_order: DisplayOrder,
    /// The move list as presented.
    moves: Vec<MoveEntry>,
}

impl SessionSnapshot {
    /// Captures the state of `session`.
    #[instrument(skip(session), fields(history_len = session.history().len()))]
    pub fn capture(session: &GameSession) -> Self {
        Self {
            history: session.history().to_vec(),
            current_move: session.current_move(),
            status: session.status().to_string(),
            winning_line: session.winning_line().map(|line| line.indices()),
            winner_log: session.winner_log().marks().to_vec(),
            winner_string: session.winner_log().to_string(),
            display_order: session.display_order(),
            moves: session.move_list().collect(),
        }
    }
}
