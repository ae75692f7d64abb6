//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Mark X (moves first).
    #[display("X")]
    X,
    /// Mark O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark whose turn it is after `plays` moves.
    pub fn for_turn(plays: usize) -> Self {
        if plays % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Placing a mark produces a new board, so a
/// snapshot stored in history is never altered afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// Does not check occupancy; see [`crate::accept_move`] for the checked path.
    #[must_use]
    pub fn with_mark(self, pos: Position, mark: Mark) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(mark);
        Self { squares }
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Positions whose squares differ between `self` and `other`.
    pub fn diff(&self, other: &Board) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.get(*pos) != other.get(*pos))
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the text doubles as a keypad hint.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
