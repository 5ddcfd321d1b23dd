//! Rendering tests against ratatui's in-memory backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use velha::{App, Config, Intent, ui};
use velha_engine::Position;

fn render_buffer(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn render(app: &App) -> String {
    render_buffer(app)
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_renders_title_and_status() {
    let app = App::new(Config::default());
    let screen = render(&app);
    assert!(screen.contains("Jogo da Velha"));
    assert!(screen.contains("Current player: X"));
}

#[test]
fn test_renders_marks() {
    let mut app = App::new(Config::default());
    app.handle(Intent::Select(Position::TopLeft));
    app.handle(Intent::Select(Position::Center));

    let screen = render(&app);
    assert!(screen.contains(" X "));
    assert!(screen.contains(" O "));
    assert!(screen.contains("Current player: X"));
}

#[test]
fn test_renders_alert_on_win() {
    let mut app = App::new(Config::default());
    for index in [0, 1, 4, 2, 8] {
        app.handle(Intent::Select(Position::from_index(index).unwrap()));
    }

    let screen = render(&app);
    assert!(screen.contains("Game over"));
    assert!(screen.contains("Player X wins!"));

    app.handle(Intent::Dismiss);
    let screen = render(&app);
    assert!(!screen.contains("Player X wins!"));
    assert!(screen.contains("Winner: X"));
}

#[test]
fn test_whole_winning_line_highlighted_under_cursor() {
    let mut app = App::new(Config::default().with_show_alert(false));
    for index in [0, 1, 4, 2, 8] {
        app.handle(Intent::Select(Position::from_index(index).unwrap()));
    }
    // The cursor sits on the last move, which is part of the line.
    assert_eq!(app.cursor(), Position::BottomRight);

    let buffer = render_buffer(&app);
    let highlighted = buffer
        .content()
        .iter()
        .filter(|cell| cell.symbol() == "X" && cell.bg == Color::Green)
        .count();
    assert_eq!(highlighted, 3);
}
