//! Input events accepted by a [`GameSession`](crate::GameSession).
//!
//! Front ends translate clicks and keys into these events and hand them to
//! [`GameSession::dispatch`](crate::GameSession::dispatch). Events are applied
//! one at a time, in the order they are dispatched.

use crate::{MoveError, Position};
use serde::{Deserialize, Serialize};

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum SessionEvent {
    /// Place the current mark on a square.
    #[display("select {}", _0)]
    SelectSquare(Position),
    /// Show the board after the given number of moves.
    #[display("jump to move #{}", _0)]
    JumpTo(usize),
    /// Flip the move list between ascending and descending.
    #[display("toggle display order")]
    ToggleDisplayOrder,
    /// Empty the winner log.
    #[display("clear winner log")]
    ClearWinnerLog,
}

/// Outcome of dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The session changed (or was already in the requested state).
    Applied,
    /// A move was rejected; the session is unchanged.
    Ignored(MoveError),
}
