//! Tests for the application state machine around the engine.

use velha::{App, Config, Direction, Intent};
use velha_engine::{Cell, GameState, Outcome, Player, Position};

fn play(app: &mut App, cells: &[usize]) {
    for &index in cells {
        app.handle(Intent::Select(Position::from_index(index).unwrap()));
    }
}

#[test]
fn test_new_app_shows_x_to_move() {
    let app = App::new(Config::default());
    assert_eq!(app.state(), &GameState::new());
    assert_eq!(app.status_line(), "Current player: X");
    assert_eq!(app.alert(), None);
    assert!(!app.should_quit());
}

#[test]
fn test_cursor_then_place() {
    let mut app = App::new(Config::default());
    app.handle(Intent::MoveCursor(Direction::Up));
    app.handle(Intent::MoveCursor(Direction::Left));
    app.handle(Intent::PlaceAtCursor);

    assert_eq!(app.cursor(), Position::TopLeft);
    assert_eq!(
        app.state().board().get(Position::TopLeft),
        Cell::Occupied(Player::X)
    );
    assert_eq!(app.status_line(), "Current player: O");
}

#[test]
fn test_stale_tap_is_ignored() {
    let mut app = App::new(Config::default());
    play(&mut app, &[4]);
    let before = *app.state();
    play(&mut app, &[4]);
    assert_eq!(app.state(), &before);
}

#[test]
fn test_win_raises_alert() {
    let mut app = App::new(Config::default());
    play(&mut app, &[0, 1, 4, 2, 8]);

    assert_eq!(app.state().outcome(), Outcome::Win(Player::X));
    assert_eq!(app.alert(), Some(Outcome::Win(Player::X)));
    assert_eq!(app.status_line(), "Winner: X");
    assert_eq!(App::alert_message(Outcome::Win(Player::X)), "Player X wins!");
}

#[test]
fn test_draw_raises_alert() {
    let mut app = App::new(Config::default());
    play(&mut app, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(app.alert(), Some(Outcome::Draw));
    assert_eq!(app.status_line(), "Winner: Draw!");
    assert_eq!(App::alert_message(Outcome::Draw), "Draw!");
}

#[test]
fn test_alert_blocks_other_input() {
    let mut app = App::new(Config::default());
    play(&mut app, &[0, 1, 4, 2, 8]);
    let cursor = app.cursor();

    app.handle(Intent::MoveCursor(Direction::Up));
    assert_eq!(app.cursor(), cursor);

    app.handle(Intent::Dismiss);
    assert_eq!(app.alert(), None);
    // Game stays over after the alert is gone.
    assert_eq!(app.state().outcome(), Outcome::Win(Player::X));

    let finished = *app.state();
    play(&mut app, &[3]);
    assert_eq!(app.state(), &finished);
}

#[test]
fn test_reset_from_alert() {
    let mut app = App::new(Config::default());
    play(&mut app, &[0, 1, 4, 2, 8]);

    app.handle(Intent::Reset);
    assert_eq!(app.state(), &GameState::new());
    assert_eq!(app.alert(), None);
    assert_eq!(app.cursor(), Position::Center);
    assert_eq!(app.status_line(), "Current player: X");
}

#[test]
fn test_alert_disabled_by_config() {
    let mut app = App::new(Config::default().with_show_alert(false));
    play(&mut app, &[0, 1, 4, 2, 8]);

    assert_eq!(app.alert(), None);
    assert_eq!(app.status_line(), "Winner: X");
}

#[test]
fn test_quit() {
    let mut app = App::new(Config::default());
    app.handle(Intent::Quit);
    assert!(app.should_quit());
}
