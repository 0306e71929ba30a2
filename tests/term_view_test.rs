use secret_arcade::core::{Canvas, GameState};
use secret_arcade::term::{CanvasView, FrameBuffer, GameView, HomeView, Viewport};
use secret_arcade::types::{GameAction, PieceKind, EMPTY_COLOR, LOCKED_COLOR};

// 22x22 frame plus 2 header and 4 footer rows.
const VP: Viewport = Viewport {
    width: 60,
    height: 28,
};

fn board_origin() -> (u16, u16) {
    GameView::default().frame_origin(VP)
}

#[test]
fn board_frame_is_centred_with_corners() {
    let fb = GameView::default().render(&GameState::new(1).snapshot(), false, VP);
    let (x, y) = board_origin();

    assert_eq!((x, y), (19, 2));
    assert_eq!(fb.get(x, y).unwrap().ch, '┌');
    assert_eq!(fb.get(x + 21, y).unwrap().ch, '┐');
    assert_eq!(fb.get(x, y + 21).unwrap().ch, '└');
    assert_eq!(fb.get(x + 21, y + 21).unwrap().ch, '┘');
}

#[test]
fn locked_cells_use_locked_color_two_columns_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = true;
    snap.active = None;

    let fb = GameView::default().render(&snap, false, VP);
    let (x, y) = board_origin();
    let (cx, cy) = (x + 1, y + 1 + 19);

    for dx in 0..2 {
        let cell = fb.get(cx + dx, cy).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, LOCKED_COLOR);
    }
    let empty = fb.get(cx + 2, cy).unwrap();
    assert_eq!(empty.ch, ' ');
    assert_eq!(empty.style.bg, EMPTY_COLOR);
}

#[test]
fn active_piece_uses_its_own_color() {
    let mut game = GameState::new(1);
    game.spawn(PieceKind::O);
    let fb = GameView::default().render(&game.snapshot(), false, VP);
    let (x, y) = board_origin();

    // O spawns at column 4, row 0.
    let cell = fb.get(x + 1 + 4 * 2, y + 1).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, PieceKind::O.color());
}

#[test]
fn header_shows_score_and_status() {
    let mut game = GameState::new(1);
    let (_, y) = board_origin();

    let fb = GameView::default().render(&game.snapshot(), false, VP);
    assert!(fb.row_text(y - 2).contains("Tetris"));
    assert!(fb.row_text(y - 2).contains("[p]Pause"));
    assert!(fb.row_text(y - 1).contains("Score: 0"));
    assert!(fb.row_text(y - 1).contains("Playing"));

    game.apply_action(GameAction::Pause);
    let fb = GameView::default().render(&game.snapshot(), false, VP);
    assert!(fb.row_text(y - 2).contains("[p]Resume"));
    assert!(fb.row_text(y - 1).contains("Paused"));
    assert!(fb.text().contains("PAUSED"));
}

#[test]
fn konami_badge_only_when_activated() {
    let snap = GameState::new(1).snapshot();

    let plain = GameView::default().render(&snap, false, VP).text();
    assert!(plain.contains("You activated the Konami code!"));
    assert!(!plain.contains("Konami code status: Activated"));

    let badged = GameView::default().render(&snap, true, VP).text();
    assert!(badged.contains("Konami code status: Activated"));
}

#[test]
fn tiny_viewport_does_not_panic() {
    let snap = GameState::new(1).snapshot();
    let mut fb = FrameBuffer::new(0, 0);
    for (w, h) in [(0, 0), (1, 1), (10, 3), (22, 22)] {
        GameView::default().render_into(&snap, true, Viewport::new(w, h), &mut fb);
        CanvasView.render_into(&Canvas::new(0, 0), Viewport::new(w, h), &mut fb);
        HomeView.render_into(Viewport::new(w, h), &mut fb);
    }
}

#[test]
fn canvas_view_draws_ink_inside_area() {
    let vp = Viewport::new(50, 20);
    let area = CanvasView.area(vp);
    assert_eq!((area.width, area.height), (40, 14));

    let mut canvas = Canvas::new(area.width, area.height);
    canvas.start_stroke(0, 0);
    canvas.draw_to(2, 0);

    let fb = CanvasView.render(&canvas, vp);
    for dx in 0..3 {
        assert_eq!(fb.get(area.x + dx, area.y).unwrap().ch, '█');
    }
    assert_eq!(fb.get(area.x + 3, area.y).unwrap().ch, ' ');
    assert!(fb.text().contains("Hidden Drawing Canvas"));
}

#[test]
fn home_view_lists_hints() {
    let text = HomeView.render(Viewport::new(80, 24)).text();
    assert!(text.contains("Easter Eggs Hunt Guide"));
    assert!(text.contains("Click in the top-left corner 5 times"));
}

#[test]
fn canvas_header_never_overlaps_title() {
    let canvas = Canvas::new(0, 0);

    let narrow = CanvasView.render(&canvas, Viewport::new(50, 20));
    assert!(narrow.row_text(1).contains("Hidden Drawing Canvas"));
    assert!(narrow.row_text(0).contains("[c]Clear  [Esc]Close"));

    let wide = CanvasView.render(&canvas, Viewport::new(80, 24));
    assert!(wide.row_text(1).contains("Hidden Drawing Canvas"));
    assert!(wide.row_text(1).contains("[c]Clear  [Esc]Close"));
}
