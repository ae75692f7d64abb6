//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples, checked in this order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Three positions holding the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    positions: [Position; 3],
    mark: Mark,
}

impl WinningLine {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// The board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.positions.map(Position::to_index)
    }

    /// The mark occupying the line.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Whether `pos` is one of the line's cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Finds the first line holding three equal marks.
///
/// Returns `None` for boards without three in a row, including full boards.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(WinningLine {
                positions: [a, b, c],
                mark,
            })
        }
        _ => None,
    })
}
