//! Status of the displayed board.

use super::{WinningLine, is_full, winning_line};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the status line reports for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No winner yet and empty squares remain.
    #[display("Next symbol: {}", next)]
    InProgress {
        /// Mark that moves next.
        next: Mark,
    },
    /// A line of three was completed.
    #[display("Winner: {}", winner)]
    Won {
        /// The winning mark.
        winner: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// Board full with no line.
    #[display("Draw!")]
    Draw,
}

impl GameStatus {
    /// Evaluates `board` with `next` as the mark to move.
    #[instrument(skip(board))]
    pub fn of(board: &Board, next: Mark) -> Self {
        match winning_line(board) {
            Some(line) => GameStatus::Won {
                winner: line.mark(),
                line,
            },
            None if is_full(board) => GameStatus::Draw,
            None => GameStatus::InProgress { next },
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// True once the board is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}
