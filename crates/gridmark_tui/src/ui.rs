//! Stateless UI rendering for NxN tic-tac-toe.

use crate::app::App;
use crate::config::TuiConfig;
use crate::layout::BoardLayout;
use gridmark::Player;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

/// Renders title, board and status. Returns where the board was placed so
/// the next mouse click can be mapped to a cell.
pub fn draw(frame: &mut Frame, app: &App, config: &TuiConfig) -> BoardLayout {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(1),    // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    draw_title(frame, chunks[0], app);

    let layout = BoardLayout::centered(
        chunks[1],
        app.game().size(),
        *config.cell_width(),
        *config.cell_height(),
    );
    draw_board(frame, app, &layout);

    let status_style = if app.outcome().is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    layout
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let size = app.game().size();
    let title = Line::from(Span::styled(
        format!("Gridmark - {size}x{size} Tic Tac Toe"),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));

    let mut help: Vec<Span> = Player::iter()
        .flat_map(|player| {
            [
                Span::styled(player.to_string(), mark_style(player)),
                Span::raw(" "),
            ]
        })
        .collect();
    help.push(Span::styled(
        "| click or arrows + Enter to play, r rematch, q quit",
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Text::from(vec![title, Line::from(help)]))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, app: &App, layout: &BoardLayout) {
    let grid = app.game().grid();
    let size = grid.size();
    let width = usize::from(layout.cell_width());
    let height = layout.cell_height();
    let mark_row = height / 2;

    let winning = if app.outcome().is_over() {
        app.game().winning_line()
    } else {
        None
    };
    let grid_style = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::new();
    for row in 0..size {
        if row > 0 {
            let separator = vec!["─".repeat(width); size].join("┼");
            lines.push(Line::from(Span::styled(separator, grid_style)));
        }
        for text_row in 0..height {
            let mut spans = Vec::with_capacity(size * 2);
            for col in 0..size {
                if col > 0 {
                    spans.push(Span::styled("│", grid_style));
                }
                let index = row * size + col;
                let square = grid.get(index).unwrap_or_default();
                let symbol = match square.player() {
                    Some(player) if text_row == mark_row => player.to_string(),
                    _ => String::new(),
                };

                let mut style = square.player().map(mark_style).unwrap_or_default();
                if winning.is_some_and(|line| line.contains(index)) {
                    style = style.bg(Color::Green);
                }
                if index == app.cursor() {
                    style = style.bg(Color::White).fg(Color::Black);
                }
                spans.push(Span::styled(format!("{symbol:^width$}"), style));
            }
            lines.push(Line::from(spans));
        }
    }

    let board_area = layout.visible();
    if board_area.is_empty() {
        return;
    }
    frame.render_widget(Paragraph::new(Text::from(lines)), board_area);
}

fn mark_style(player: Player) -> Style {
    match player {
        Player::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Player::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

