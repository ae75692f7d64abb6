//! Property tests for the win detector and draw detection.

use proptest::prelude::*;
use tictactoe_session::rules::{LINES, is_draw, is_full};
use tictactoe_session::{Board, GameStatus, Mark, Position, Square, winning_line};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Mark::X)),
        Just(Square::Occupied(Mark::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(square()).prop_map(Board::from_squares)
}

fn has_three_in_a_row(board: &Board) -> bool {
    LINES.iter().any(|&[a, b, c]| {
        board.get(a) != Square::Empty && board.get(a) == board.get(b) && board.get(b) == board.get(c)
    })
}

proptest! {
    #[test]
    fn reported_line_is_three_equal_marks(board in board()) {
        if let Some(line) = winning_line(&board) {
            let [a, b, c] = line.positions();
            prop_assert_eq!(board.get(a), Square::Occupied(line.mark()));
            prop_assert_eq!(board.get(b), Square::Occupied(line.mark()));
            prop_assert_eq!(board.get(c), Square::Occupied(line.mark()));
            prop_assert!(LINES.contains(&line.positions()));
        }
    }

    #[test]
    fn line_reported_iff_three_in_a_row(board in board()) {
        prop_assert_eq!(winning_line(&board).is_some(), has_three_in_a_row(&board));
    }

    #[test]
    fn full_board_without_line_is_draw(board in board()) {
        let status = GameStatus::of(&board, Mark::X);
        if is_full(&board) && winning_line(&board).is_none() {
            prop_assert!(is_draw(&board));
            prop_assert_eq!(status, GameStatus::Draw);
        } else {
            prop_assert!(!is_draw(&board));
        }
    }

    #[test]
    fn winning_triple_is_found_on_any_line(line_index in 0usize..8, o_wins in any::<bool>()) {
        let mark = if o_wins { Mark::O } else { Mark::X };
        let line = LINES[line_index];
        let board = line.iter().fold(Board::new(), |b, &pos| b.with_mark(pos, mark));
        let found = winning_line(&board).map(|l| l.positions());
        prop_assert_eq!(found, Some(line));
    }
}

#[test]
fn empty_board_has_no_winner() {
    assert_eq!(winning_line(&Board::new()), None);
    assert!(Position::ALL.iter().all(|p| Board::new().is_empty(*p)));
}
