//! Tic-tac-toe session logic with navigable history.
//!
//! A [`GameSession`] keeps every board snapshot of the current line of play,
//! lets a front end jump back to any of them, and records the winner of each
//! won game. Front ends talk to the session through [`SessionEvent`]s and
//! draw from the [`MoveList`] and [`BoardView`] view models.
//!
//! # Example
//!
//! ```
//! use tictactoe_session::{GameSession, Position, SessionEvent};
//!
//! let mut session = GameSession::new();
//! for pos in [0, 3, 1, 4, 2] {
//!     let pos = Position::from_index(pos).unwrap();
//!     session.dispatch(SessionEvent::SelectSquare(pos));
//! }
//! assert_eq!(session.status().to_string(), "Winner: X");
//! assert_eq!(session.winner_log().to_string(), "X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod event;
pub mod invariants;
mod order;
mod position;
mod presenter;
pub mod rules;
mod session;
mod snapshot;
mod types;
mod winner_log;

pub use action::MoveError;
pub use contracts::{LegalMove, NoWinnerYet, SquareIsEmpty, accept_move};
pub use event::{SessionEvent, Transition};
pub use order::{DisplayOrder, DisplayOrderParseError};
pub use position::{Position, PositionParseError};
pub use presenter::{BoardView, CellView, MoveEntry, MoveList, move_label};
pub use rules::{GameStatus, WinningLine, winning_line};
pub use session::GameSession;
pub use snapshot::SessionSnapshot;
pub use types::{Board, Mark, Square};
pub use winner_log::WinnerLog;
