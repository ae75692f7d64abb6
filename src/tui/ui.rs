//! Stateless UI rendering for the session.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe_session::{BoardView, CellView, GameStatus, Mark, MoveEntry, Square};

use super::app::{App, Focus};

/// Draws the whole screen from the application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(14),   // Board + history
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe - Replay")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_game(frame, columns[0], app);
    draw_info(frame, columns[1], app);

    let help = Paragraph::new(
        "←↑↓→: Move | Enter/1-9: Play | Tab: Board/History | o: Order | c: Clear winners | q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.session().board_view();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(focus_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(11)])
        .split(inner);

    let status = Paragraph::new(Line::from(Span::styled(
        view.status().to_string(),
        status_style(view.status()),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(status, rows[0]);

    draw_board(frame, rows[1], &view, app);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &BoardView, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, cells) in view.rows().enumerate() {
        draw_row(frame, rows[i * 2], cells, app);
        if i < 2 {
            draw_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, cells: &[CellView], app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, cell) in cells.iter().enumerate() {
        draw_cell(frame, cols[i * 2], cell, app);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, app: &App) {
    let base_style = match cell.square() {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if app.focus() == Focus::Board && cell.position() == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if cell.highlighted() {
        base_style.bg(Color::Green).fg(Color::Black)
    } else {
        base_style
    };

    let symbol = match cell.square() {
        Square::Empty => format!(" {} ", cell.position().to_index() + 1),
        Square::Occupied(_) => format!(" {} ", cell.symbol()),
    };

    // Vertically center the symbol in the three-line cell.
    let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    let controls = vec![
        Line::from(vec![
            Span::styled("[o] ", Style::default().fg(Color::Yellow)),
            Span::raw(session.display_order().control_label()),
        ]),
        Line::from(vec![
            Span::styled("[c] ", Style::default().fg(Color::Yellow)),
            Span::raw("Clear winner string"),
        ]),
        Line::from(vec![
            Span::styled("Winners: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                session.winner_log().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let controls = Paragraph::new(controls).block(Block::default().borders(Borders::ALL));
    frame.render_widget(controls, chunks[0]);

    let items: Vec<ListItem> = session
        .move_list()
        .enumerate()
        .map(|(row, entry)| move_item(row + 1, &entry))
        .collect();
    let focused = app.focus() == Focus::MoveList;
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("History")
                .border_style(focus_style(focused)),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected_entry()));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn move_item(number: usize, entry: &MoveEntry) -> ListItem<'static> {
    let style = if entry.is_interactive() {
        Style::default()
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    };
    ListItem::new(format!("{}. {}", number, entry.label())).style(style)
}

fn status_style(status: GameStatus) -> Style {
    match status {
        GameStatus::Won { .. } => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        GameStatus::InProgress { .. } => Style::default().fg(Color::Yellow),
    }
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Intent;
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_session::{DisplayOrder, Position};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("test backend");
        terminal.draw(|f| draw(f, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_status_controls_and_history() {
        let mut app = App::new(DisplayOrder::Ascending);
        for pos in [0, 3, 1, 4, 2] {
            let _ = app.handle(Intent::Cell(Position::from_index(pos).expect("in range")));
        }
        let text = screen_text(&app);
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Change order: Ascending"));
        assert!(text.contains("Clear winner string"));
        assert!(text.contains("Winners: X"));
        assert!(text.contains("1. Go to the beginning of the game"));
        assert!(text.contains("6. You are at move #5"));
    }

    #[test]
    fn test_descending_rows_are_numbered_by_position() {
        let mut app = App::new(DisplayOrder::Descending);
        for pos in [4, 0] {
            let _ = app.handle(Intent::Cell(Position::from_index(pos).expect("in range")));
        }
        let text = screen_text(&app);
        assert!(text.contains("1. You are at move #2"));
        assert!(text.contains("2. Go to move #1"));
        assert!(text.contains("3. Go to the beginning of the game"));
    }
}
