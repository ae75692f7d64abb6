//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). Rules know nothing
//! about history or turn bookkeeping; the session composes them.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::GameStatus;
pub use win::{LINES, WinningLine, winning_line};
