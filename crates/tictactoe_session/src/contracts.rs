//! Move acceptance for tic-tac-toe.
//!
//! A move is legal when the displayed board has no winner yet and the target
//! square is empty. Each condition is its own check so the composite reads
//! like the rule it enforces.

use crate::rules::winning_line;
use crate::{Board, Mark, MoveError, Position};
use tracing::{debug, instrument};

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied squares.
    #[instrument(skip(board))]
    pub fn check(board: &Board, position: Position) -> Result<(), MoveError> {
        if board.is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(position))
        }
    }
}

/// Precondition: the board must not already show a winning line.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Rejects boards that are already won.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        match winning_line(board) {
            Some(line) => {
                debug!(winner = %line.mark(), "Board already won");
                Err(MoveError::GameOver)
            }
            None => Ok(()),
        }
    }
}

/// Composite precondition: no winner yet, then an empty square.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for placing a mark at `position`.
    #[instrument(skip(board))]
    pub fn check(board: &Board, position: Position) -> Result<(), MoveError> {
        NoWinnerYet::check(board)?;
        SquareIsEmpty::check(board, position)?;
        Ok(())
    }
}

/// Validates a move against `board` and returns the board that results.
///
/// `board` is not modified; on rejection nothing changes anywhere.
#[instrument(skip(board))]
pub fn accept_move(board: &Board, position: Position, mark: Mark) -> Result<Board, MoveError> {
    LegalMove::check(board, position)?;
    Ok(board.with_mark(position, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_empty_square() {
        let board = Board::new();
        let next = accept_move(&board, Position::Center, Mark::X).expect("legal move");
        assert_eq!(next.diff(&board), vec![Position::Center]);
    }

    #[test]
    fn test_rejects_occupied_square() {
        let board = Board::new().with_mark(Position::Center, Mark::X);
        assert_eq!(
            accept_move(&board, Position::Center, Mark::O),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_rejects_won_board_before_occupancy() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::TopCenter, Mark::X)
            .with_mark(Position::TopRight, Mark::X);
        assert_eq!(
            accept_move(&board, Position::Center, Mark::O),
            Err(MoveError::GameOver)
        );
        assert_eq!(
            accept_move(&board, Position::TopLeft, Mark::O),
            Err(MoveError::GameOver)
        );
    }
}
