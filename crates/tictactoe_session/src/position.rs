//! Board positions for tic-tac-toe moves.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2) of this position.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2) of this position.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when text does not name a board position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown position {:?} (expected 0-8 or a label such as \"center\")", input)]
pub struct PositionParseError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl FromStr for Position {
    type Err = PositionParseError;

    /// Parses an index (`0`-`8`) or a label (`"top-left"`, `"Center"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.parse::<usize>() {
            Ok(index) => Self::from_index(index),
            Err(_) => <Position as strum::IntoEnumIterator>::iter()
                .find(|pos| pos.label().eq_ignore_ascii_case(trimmed)),
        };
        parsed.ok_or_else(|| PositionParseError {
            input: trimmed.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_index_round_trip() {
        assert_eq!(Position::TopLeft.to_index(), 0);
        assert_eq!(Position::Center.to_index(), 4);
        assert_eq!(Position::from_index(8), Some(Position::BottomRight));
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_row_and_col() {
        assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.col()), (1, 2));
        assert_eq!((Position::BottomLeft.row(), Position::BottomLeft.col()), (2, 0));
    }

    #[test]
    fn test_parse_number_and_label() {
        assert_eq!(" 4 ".parse::<Position>(), Ok(Position::Center));
        assert_eq!("top-RIGHT".parse::<Position>(), Ok(Position::TopRight));
        assert!("9".parse::<Position>().is_err());
        assert!("middle".parse::<Position>().is_err());
    }
}
