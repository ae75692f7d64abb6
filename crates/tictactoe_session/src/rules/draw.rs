//! Draw detection logic for tic-tac-toe.

use super::win::winning_line;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winning line is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}
