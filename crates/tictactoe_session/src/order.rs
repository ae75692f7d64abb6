//! Presentation order of the move list.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Whether the move list reads oldest-first or newest-first.
///
/// Purely a view setting; it never touches history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    /// Move 0 first.
    #[default]
    #[display("Ascending")]
    Ascending,
    /// Latest move first.
    #[display("Descending")]
    Descending,
}

impl DisplayOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Caption of the control that flips the order.
    pub fn control_label(self) -> String {
        format!("Change order: {}", self)
    }
}

/// Error for text that is neither `ascending` nor `descending`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown display order {:?} (expected ascending or descending)", input)]
pub struct DisplayOrderParseError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl FromStr for DisplayOrder {
    type Err = DisplayOrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("ascending") || trimmed.eq_ignore_ascii_case("asc") {
            Ok(Self::Ascending)
        } else if trimmed.eq_ignore_ascii_case("descending") || trimmed.eq_ignore_ascii_case("desc")
        {
            Ok(Self::Descending)
        } else {
            Err(DisplayOrderParseError {
                input: trimmed.to_string(),
            })
        }
    }
}
