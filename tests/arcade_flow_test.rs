//! Screen flow through the facade, driven by synthetic terminal events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use secret_arcade::app::{App, Screen};
use secret_arcade::term::{FrameBuffer, Viewport};
use secret_arcade::types::GameStatus;

const KONAMI: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('B'),
    KeyCode::Char('A'),
];

fn keys(app: &mut App, codes: &[KeyCode]) {
    for &code in codes {
        app.handle_key(KeyEvent::from(code));
    }
}

fn click(app: &mut App, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

#[test]
fn konami_after_noise_opens_tetris() {
    let mut app = App::new(1, Viewport::new(80, 30));
    keys(&mut app, &[KeyCode::Char('x'), KeyCode::Up, KeyCode::Enter]);
    assert_eq!(app.screen(), Screen::Home);

    keys(&mut app, &KONAMI);
    assert_eq!(app.screen(), Screen::Tetris);
    assert!(app.konami_activated());

    let mut fb = FrameBuffer::new(80, 30);
    app.render_into(&mut fb);
    assert!(fb.text().contains("Konami code status: Activated"));
}

#[test]
fn konami_is_not_tracked_during_tetris() {
    let mut app = App::new(1, Viewport::new(80, 30));
    keys(&mut app, &KONAMI);
    app.game_mut().unwrap().spawn(secret_arcade::types::PieceKind::O);

    // Typing the code again plays it as game input instead.
    keys(&mut app, &KONAMI);
    let game = app.game().unwrap();
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.active().y, 2, "two soft drops from the sequence");
}

#[test]
fn closing_and_reopening_starts_fresh() {
    let mut app = App::new(3, Viewport::new(80, 30));
    keys(&mut app, &KONAMI);
    for _ in 0..30 {
        keys(&mut app, &[KeyCode::Down]);
    }
    assert!(app.game().unwrap().board().filled() > 0);

    keys(&mut app, &[KeyCode::Esc]);
    assert_eq!(app.screen(), Screen::Home);
    assert!(app.game().is_none());

    keys(&mut app, &KONAMI);
    let game = app.game().unwrap();
    assert_eq!(game.board().filled(), 0);
    assert_eq!(game.score(), 0);
}

#[test]
fn restart_key_resets_a_finished_game() {
    let mut app = App::new(3, Viewport::new(80, 30));
    app.open(Screen::Tetris);
    for _ in 0..2000 {
        keys(&mut app, &[KeyCode::Down]);
        if app.game().unwrap().game_over() {
            break;
        }
    }
    assert!(app.game().unwrap().game_over());

    keys(&mut app, &[KeyCode::Char('r')]);
    assert_eq!(app.game().unwrap().status(), GameStatus::Playing);
    assert_eq!(app.game().unwrap().board().filled(), 0);
}

#[test]
fn secret_clicks_open_canvas_and_escape_closes_it() {
    let mut app = App::new(1, Viewport::new(80, 30));
    click(&mut app, 20, 10);
    for _ in 0..4 {
        click(&mut app, 0, 1);
    }
    assert_eq!(app.screen(), Screen::Home);

    click(&mut app, 3, 0);
    assert_eq!(app.screen(), Screen::Canvas);

    keys(&mut app, &[KeyCode::Esc]);
    assert_eq!(app.screen(), Screen::Home);
}

#[test]
fn quit_key_works_everywhere() {
    for screen in [Screen::Home, Screen::Tetris, Screen::Canvas] {
        let mut app = App::new(1, Viewport::new(80, 30));
        app.open(screen);
        keys(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit(), "{:?}", screen);
    }
}
