//! View models derived from a [`GameSession`](crate::GameSession).
//!
//! Nothing here holds state of its own. Both the move list and the board
//! view are recomputed from the session whenever a front end redraws.

use crate::rules::GameStatus;
use crate::{Board, DisplayOrder, Position, Square};
use derive_getters::Getters;
use serde::Serialize;
use std::iter::FusedIterator;
use std::ops::Range;

/// Label of the history entry for `move_index` while `current_move` is shown.
pub fn move_label(move_index: usize, current_move: usize) -> String {
    if move_index == 0 {
        "Go to the beginning of the game".to_string()
    } else if move_index == current_move {
        format!("You are at move #{}", move_index)
    } else {
        format!("Go to move #{}", move_index)
    }
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, derive_new::new)]
pub struct MoveEntry {
    /// History index this entry stands for.
    move_index: usize,
    /// Text shown for the entry.
    label: String,
    /// Whether this is the displayed snapshot.
    is_current: bool,
}

impl MoveEntry {
    /// Whether activating the entry should jump to it.
    pub fn is_interactive(&self) -> bool {
        !self.is_current
    }
}

/// Lazy sequence of [`MoveEntry`] values, one per history snapshot.
///
/// Cloning yields an independent iterator from the same position, so a
/// front end can walk the list as many times as it needs.
#[derive(Debug, Clone)]
pub struct MoveList {
    slots: Range<usize>,
    len: usize,
    current_move: usize,
    order: DisplayOrder,
}

impl MoveList {
    /// Move list over a history of `len` snapshots.
    pub fn new(len: usize, current_move: usize, order: DisplayOrder) -> Self {
        Self {
            slots: 0..len,
            len,
            current_move,
            order,
        }
    }

    fn entry(&self, slot: usize) -> MoveEntry {
        let move_index = match self.order {
            DisplayOrder::Ascending => slot,
            DisplayOrder::Descending => self.len - 1 - slot,
        };
        MoveEntry::new(
            move_index,
            move_label(move_index, self.current_move),
            move_index == self.current_move,
        )
    }
}

impl Iterator for MoveList {
    type Item = MoveEntry;

    fn next(&mut self) -> Option<MoveEntry> {
        self.slots.next().map(|slot| self.entry(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl DoubleEndedIterator for MoveList {
    fn next_back(&mut self) -> Option<MoveEntry> {
        self.slots.next_back().map(|slot| self.entry(slot))
    }
}

impl ExactSizeIterator for MoveList {}

impl FusedIterator for MoveList {}

/// A single square as drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    position: Position,
    square: Square,
    highlighted: bool,
}

impl CellView {
    /// Where the cell sits.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Contents of the cell.
    pub fn square(&self) -> Square {
        self.square
    }

    /// True when the cell is part of the winning line.
    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    /// Text for the cell: the mark, or blank.
    pub fn symbol(&self) -> String {
        self.square
            .mark()
            .map(|mark| mark.to_string())
            .unwrap_or_default()
    }
}

/// Render model for the displayed board and its status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    cells: [CellView; 9],
    status: GameStatus,
}

impl BoardView {
    /// Builds the view of `board` with its already-computed `status`.
    pub fn of(board: &Board, status: GameStatus) -> Self {
        let line = match status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        };
        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            highlighted: line.is_some_and(|line| line.contains(position)),
        });
        Self { cells, status }
    }

    /// All nine cells in row-major order.
    pub fn cells(&self) -> &[CellView; 9] {
        &self.cells
    }

    /// Cells grouped into three rows of three.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(3)
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(move_label(0, 0), "Go to the beginning of the game");
        assert_eq!(move_label(0, 3), "Go to the beginning of the game");
        assert_eq!(move_label(3, 3), "You are at move #3");
        assert_eq!(move_label(2, 3), "Go to move #2");
    }

    #[test]
    fn test_descending_from_both_ends() {
        let mut list = MoveList::new(3, 1, DisplayOrder::Descending);
        assert_eq!(list.len(), 3);
        assert_eq!(list.next().map(|e| *e.move_index()), Some(2));
        assert_eq!(list.next_back().map(|e| *e.move_index()), Some(0));
        let middle = list.next().expect("one entry left");
        assert!(*middle.is_current());
        assert!(!middle.is_interactive());
        assert_eq!(list.next(), None);
    }

    #[test]
    fn test_beginning_entry_is_current_at_start() {
        let entries: Vec<_> = MoveList::new(1, 0, DisplayOrder::Ascending).collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label(), "Go to the beginning of the game");
        assert!(*entries[0].is_current());
    }
}
