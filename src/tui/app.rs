//! Application state and logic.

use super::input::{Direction, Intent, move_cursor};
use std::ops::ControlFlow;
use tictactoe_session::{DisplayOrder, GameSession, MoveEntry, Position, SessionEvent};
use tracing::{debug, info, instrument};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    MoveList,
}

impl Focus {
    /// Returns the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::MoveList,
            Self::MoveList => Self::Board,
        }
    }
}

/// Main application state.
///
/// Holds the session plus the purely visual state around it (cursor,
/// focus, list selection). Session changes only happen through
/// [`GameSession::dispatch`].
#[derive(Debug, Clone)]
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    selected_entry: usize,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(display_order: DisplayOrder) -> Self {
        Self {
            session: GameSession::with_display_order(display_order),
            cursor: Position::Center,
            focus: Focus::default(),
            selected_entry: 0,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Row of the move list currently highlighted.
    pub fn selected_entry(&self) -> usize {
        self.selected_entry
    }

    /// Handles one intent; breaks when the user quits.
    #[instrument(skip(self))]
    pub fn handle(&mut self, intent: Intent) -> ControlFlow<()> {
        match intent {
            Intent::Quit => {
                info!("User quit");
                return ControlFlow::Break(());
            }
            Intent::SwitchFocus => self.focus = self.focus.toggle(),
            Intent::Move(direction) => self.move_selection(direction),
            Intent::Cell(position) => {
                self.cursor = position;
                self.dispatch(SessionEvent::SelectSquare(position));
            }
            Intent::Activate => {
                if let Some(event) = self.activation_event() {
                    self.dispatch(event);
                }
            }
            Intent::ToggleOrder => self.dispatch(SessionEvent::ToggleDisplayOrder),
            Intent::ClearWinners => self.dispatch(SessionEvent::ClearWinnerLog),
            Intent::Nothing => {}
        }
        ControlFlow::Continue(())
    }

    /// Event that Enter stands for in the focused panel, if any.
    ///
    /// The current move-list entry is not interactive and yields nothing.
    fn activation_event(&self) -> Option<SessionEvent> {
        match self.focus {
            Focus::Board => Some(SessionEvent::SelectSquare(self.cursor)),
            Focus::MoveList => self
                .selected_move()
                .filter(MoveEntry::is_interactive)
                .map(|entry| SessionEvent::JumpTo(*entry.move_index())),
        }
    }

    /// The highlighted move-list entry.
    pub fn selected_move(&self) -> Option<MoveEntry> {
        self.session.move_list().nth(self.selected_entry)
    }

    fn move_selection(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::MoveList => {
                let last = self.session.move_list().len().saturating_sub(1);
                self.selected_entry = match direction {
                    Direction::Up | Direction::Left => self.selected_entry.saturating_sub(1),
                    Direction::Down | Direction::Right => (self.selected_entry + 1).min(last),
                };
            }
        }
    }

    fn dispatch(&mut self, event: SessionEvent) {
        let transition = self.session.dispatch(event);
        debug!(%event, ?transition, "Event dispatched");
        let last = self.session.move_list().len().saturating_sub(1);
        self.selected_entry = self.selected_entry.min(last);
    }
}
