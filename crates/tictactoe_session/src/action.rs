//! Move rejection reasons.

use crate::{Mark, Position};

/// Why a move was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already shows a winning line.
    #[display("Game is already over")]
    GameOver,

    /// The proposed board is not the displayed board plus one mark of the
    /// player to move.
    #[display("Board is not a single {} move from the displayed board", _0)]
    NotASuccessor(Mark),
}

impl std::error::Error for MoveError {}
