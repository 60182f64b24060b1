//! Render smoke tests against ratatui's test backend.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use gridmark_tui::{App, TuiConfig, ui};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

fn rows(buffer: &Buffer) -> Vec<String> {
    let width = usize::from(buffer.area.width);
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

#[test]
fn test_draw_places_marks_where_layout_says() {
    let config = TuiConfig::default();
    let mut app = App::new(3).unwrap();
    app.play(4).unwrap();
    app.play(0).unwrap();

    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    let mut layout = None;
    terminal
        .draw(|f| layout = Some(ui::draw(f, &app, &config)))
        .unwrap();
    let layout = layout.unwrap();

    let text = rows(terminal.backend().buffer());
    let center = layout.cell_rect(4).unwrap();
    let mark_row = &text[usize::from(center.y + center.height / 2)];
    let mark: String = mark_row
        .chars()
        .skip(usize::from(center.x))
        .take(usize::from(center.width))
        .collect();
    assert_eq!(mark.trim(), "X");

    assert!(text.iter().any(|row| row.contains("Gridmark - 3x3 Tic Tac Toe")));
    assert!(text.iter().any(|row| row.contains("Player X to move")));
    assert!(text.iter().any(|row| row.contains('┼')));
}

#[test]
fn test_draw_reports_win() {
    let config = TuiConfig::default();
    let mut app = App::new(3).unwrap();
    for index in [0, 1, 3, 4, 6] {
        app.play(index).unwrap();
    }

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal
        .draw(|f| {
            ui::draw(f, &app, &config);
        })
        .unwrap();

    let text = rows(terminal.backend().buffer());
    assert!(text.iter().any(|row| row.contains("X wins on the column 0!")));
}

#[test]
fn test_draw_survives_tiny_terminal() {
    let config = TuiConfig::default();
    let app = App::new(9).unwrap();
    let mut terminal = Terminal::new(TestBackend::new(12, 6)).unwrap();
    terminal
        .draw(|f| {
            ui::draw(f, &app, &config);
        })
        .unwrap();
}

#[test]
fn test_click_on_status_bar_over_clipped_board_is_ignored() {
    let config = TuiConfig::default();
    let mut app = App::new(5).unwrap();
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let mut layout = None;
    terminal
        .draw(|f| layout = Some(ui::draw(f, &app, &config)))
        .unwrap();
    let layout = layout.unwrap();

    // The status box occupies the last three rows.
    let status_row = 18;
    assert!(layout.rect().y + layout.rect().height > status_row);
    assert_eq!(layout.cell_at(layout.rect().x + 1, status_row), None);

    let click = MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column: layout.rect().x + 1,
        row: status_row,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse(click, &layout).unwrap();
    assert_eq!(app.game().grid().empty_cells().len(), 25);
}
