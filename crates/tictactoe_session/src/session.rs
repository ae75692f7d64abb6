//! The game session: history snapshots, replay position and winner log.

use crate::contracts::accept_move;
use crate::event::{SessionEvent, Transition};
use crate::presenter::{BoardView, MoveList};
use crate::rules::{GameStatus, WinningLine, winning_line};
use crate::{Board, DisplayOrder, Mark, MoveError, Position, WinnerLog};
use tracing::{debug, info, instrument};

/// State of one play session.
///
/// `history[0]` is the empty board and `history[k]` the board after `k`
/// plays. `current_move` selects the displayed snapshot; the mark to move is
/// derived from it. Playing from an earlier snapshot discards every later one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: Vec<Board>,
    current_move: usize,
    winner_log: WinnerLog,
    display_order: DisplayOrder,
}

impl GameSession {
    /// Starts a session at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_display_order(DisplayOrder::default())
    }

    /// Starts a session with the move list in the given order.
    #[instrument]
    pub fn with_display_order(display_order: DisplayOrder) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            winner_log: WinnerLog::new(),
            display_order,
        }
    }

    /// Builds a session from raw parts without any checks.
    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Board>, current_move: usize) -> Self {
        Self {
            history,
            current_move,
            winner_log: WinnerLog::new(),
            display_order: DisplayOrder::default(),
        }
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Mark that plays next from the displayed board.
    pub fn next_mark(&self) -> Mark {
        Mark::for_turn(self.current_move)
    }

    /// Status line for the displayed board.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current_board(), self.next_mark())
    }

    /// Winning line of the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(self.current_board())
    }

    /// Winners recorded in this session.
    pub fn winner_log(&self) -> &WinnerLog {
        &self.winner_log
    }

    /// Current move list order.
    pub fn display_order(&self) -> DisplayOrder {
        self.display_order
    }

    /// Records `next` as the board after the displayed one.
    ///
    /// `next` must be the displayed board plus one mark of the current turn
    /// on an empty square, with no winner on the displayed board. Anything
    /// else is rejected and the session is left untouched.
    ///
    /// Snapshots after the displayed one are dropped first. If `next` has a
    /// winning line its mark is appended to the winner log.
    #[instrument(skip(self, next), fields(from_move = self.current_move))]
    pub fn play(&mut self, next: Board) -> Result<(), MoveError> {
        let mark = self.next_mark();
        let current = self.current_board();
        let changed = current.diff(&next);
        let [position] = changed.as_slice() else {
            return Err(MoveError::NotASuccessor(mark));
        };
        if accept_move(current, *position, mark)? != next {
            return Err(MoveError::NotASuccessor(mark));
        }
        self.commit(next);
        Ok(())
    }

    /// Places the current mark at `position` if the move is legal.
    ///
    /// The move is checked against the displayed board every time. A
    /// rejected move leaves the session untouched.
    #[instrument(skip(self))]
    pub fn select(&mut self, position: Position) -> Result<(), MoveError> {
        let mark = self.next_mark();
        let next = accept_move(self.current_board(), position, mark)?;
        info!(%mark, %position, move_number = self.current_move + 1, "Move accepted");
        self.commit(next);
        Ok(())
    }

    fn commit(&mut self, next: Board) {
        let discarded = self.history.len() - (self.current_move + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding snapshots after replay point");
        }
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        if let Some(line) = winning_line(&next) {
            info!(winner = %line.mark(), line = ?line.indices(), "Game won");
            self.winner_log.record(line.mark());
        }

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(self);
    }

    /// Displays the snapshot after `step` moves. History is not altered.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not an index into [`history`](Self::history).
    /// Callers only offer steps taken from [`move_list`](Self::move_list).
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "jump to move {} outside a history of {} snapshots",
            step,
            self.history.len()
        );
        self.current_move = step;
    }

    /// Empties the winner log.
    #[instrument(skip(self), fields(cleared = self.winner_log.len()))]
    pub fn clear_winner_log(&mut self) {
        self.winner_log.clear();
    }

    /// Flips the move list order.
    #[instrument(skip(self))]
    pub fn toggle_display_order(&mut self) {
        self.display_order = self.display_order.toggle();
        debug!(order = %self.display_order, "Display order changed");
    }

    /// Applies one input event.
    #[instrument(skip(self), fields(event = %event))]
    pub fn dispatch(&mut self, event: SessionEvent) -> Transition {
        match event {
            SessionEvent::SelectSquare(position) => match self.select(position) {
                Ok(()) => Transition::Applied,
                Err(err) => {
                    debug!(%err, "Move ignored");
                    Transition::Ignored(err)
                }
            },
            SessionEvent::JumpTo(step) => {
                self.jump_to(step);
                Transition::Applied
            }
            SessionEvent::ToggleDisplayOrder => {
                self.toggle_display_order();
                Transition::Applied
            }
            SessionEvent::ClearWinnerLog => {
                self.clear_winner_log();
                Transition::Applied
            }
        }
    }

    /// Move list entries in the current display order.
    pub fn move_list(&self) -> MoveList {
        MoveList::new(self.history.len(), self.current_move, self.display_order)
    }

    /// Render model of the displayed board.
    pub fn board_view(&self) -> BoardView {
        BoardView::of(self.current_board(), self.status())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.history(), &[Board::new()]);
        assert_eq!(session.current_move(), 0);
        assert_eq!(session.next_mark(), Mark::X);
        assert!(session.winner_log().is_empty());
        assert_eq!(session.display_order(), DisplayOrder::Ascending);
    }

    #[test]
    fn test_select_advances_turn() {
        let mut session = GameSession::new();
        session.select(Position::Center).expect("legal move");
        assert_eq!(session.current_move(), 1);
        assert_eq!(session.next_mark(), Mark::O);
        assert_eq!(session.status().to_string(), "Next symbol: O");
    }

    #[test]
    fn test_play_rejects_non_successor_boards() {
        let mut session = GameSession::new();
        let before = session.clone();

        assert_eq!(
            session.play(Board::new()),
            Err(MoveError::NotASuccessor(Mark::X))
        );
        assert_eq!(
            session.play(Board::new().with_mark(Position::Center, Mark::O)),
            Err(MoveError::NotASuccessor(Mark::X))
        );
        let two_marks = Board::new()
            .with_mark(Position::Center, Mark::X)
            .with_mark(Position::TopLeft, Mark::X);
        assert_eq!(
            session.play(two_marks),
            Err(MoveError::NotASuccessor(Mark::X))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_play_overwrite_is_rejected() {
        let mut session = GameSession::new();
        session.select(Position::Center).expect("legal move");
        let overwrite = session.current_board().with_mark(Position::Center, Mark::O);
        assert_eq!(
            session.play(overwrite),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_play_after_win_is_game_over() {
        let mut session = GameSession::new();
        for index in [0, 3, 1, 4, 2] {
            let pos = Position::from_index(index).expect("index in range");
            session.select(pos).expect("legal move");
        }
        let next = session.current_board().with_mark(Position::BottomRight, Mark::O);
        assert_eq!(session.play(next), Err(MoveError::GameOver));
        assert_eq!(session.history().len(), 6);
    }

    #[test]
    #[should_panic(expected = "outside a history")]
    fn test_jump_out_of_range_panics() {
        let mut session = GameSession::new();
        session.jump_to(1);
    }

    #[test]
    fn test_dispatch_reports_ignored_move() {
        let mut session = GameSession::new();
        assert_eq!(
            session.dispatch(SessionEvent::SelectSquare(Position::TopLeft)),
            Transition::Applied
        );
        let before = session.clone();
        assert_eq!(
            session.dispatch(SessionEvent::SelectSquare(Position::TopLeft)),
            Transition::Ignored(MoveError::SquareOccupied(Position::TopLeft))
        );
        assert_eq!(session, before);
    }
}
