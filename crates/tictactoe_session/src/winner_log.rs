//! Session-wide record of finished games.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// Winning marks in the order the wins were played.
///
/// Grows by one entry per winning move and shrinks only when cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerLog {
    marks: Vec<Mark>,
}

impl WinnerLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a winner.
    pub fn record(&mut self, winner: Mark) {
        self.marks.push(winner);
    }

    /// Forgets every recorded winner.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Recorded winners, oldest first.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of recorded wins.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// True when no win has been recorded since the last clear.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// Marks joined with no separator, e.g. `XOX`.
impl std::fmt::Display for WinnerLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.marks.iter().try_for_each(|mark| write!(f, "{}", mark))
    }
}
