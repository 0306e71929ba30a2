//! Screen state machine for the arcade.
//!
//! The landing screen listens for the two easter-egg triggers. The Konami
//! sequence opens Tetris; five clicks in the top-left corner open the drawing
//! canvas. `Esc` returns to the landing screen and `q` quits from anywhere.

use clap::ValueEnum;
use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, info};

use crate::core::{Canvas, GameSnapshot, GameState};
use crate::input::{
    handle_key_event, should_clear_canvas, should_close, should_quit, KonamiDetector, SecretClicks,
};
use crate::term::{CanvasView, FrameBuffer, GameView, HomeView, Viewport};
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Screen {
    #[default]
    Home,
    Tetris,
    Canvas,
}

pub struct App {
    screen: Screen,
    /// Only exists while the Tetris overlay is open.
    game: Option<GameState>,
    canvas: Canvas,
    konami: KonamiDetector,
    clicks: SecretClicks,
    konami_activated: bool,
    seed: u32,
    games_started: u32,
    viewport: Viewport,
    snapshot: GameSnapshot,
    quit: bool,
}

impl App {
    pub fn new(seed: u32, viewport: Viewport) -> Self {
        Self {
            screen: Screen::Home,
            game: None,
            canvas: Canvas::new(0, 0),
            konami: KonamiDetector::new(),
            clicks: SecretClicks::new(),
            konami_activated: false,
            seed,
            games_started: 0,
            viewport,
            snapshot: GameSnapshot::default(),
            quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut GameState> {
        self.game.as_mut()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn konami_activated(&self) -> bool {
        self.konami_activated
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Switch screens directly (startup `--open`, tests).
    pub fn open(&mut self, screen: Screen) {
        match screen {
            Screen::Home => self.close(),
            Screen::Tetris => self.open_tetris(false),
            Screen::Canvas => self.open_canvas(),
        }
    }

    fn open_tetris(&mut self, konami_activated: bool) {
        // Each opening gets its own deterministic seed.
        let seed = self.seed.wrapping_add(self.games_started);
        self.games_started = self.games_started.wrapping_add(1);
        self.game = Some(GameState::new(seed));
        self.konami_activated = konami_activated;
        self.konami.reset();
        self.screen = Screen::Tetris;
        info!(seed, konami_activated, "tetris opened");
    }

    fn open_canvas(&mut self) {
        self.game = None;
        self.konami_activated = false;
        let area = CanvasView.area(self.viewport);
        self.canvas.resize(area.width, area.height);
        self.screen = Screen::Canvas;
        info!(width = area.width, height = area.height, "canvas opened");
    }

    fn close(&mut self) {
        if self.screen != Screen::Home {
            info!(from = ?self.screen, "overlay closed");
        }
        self.game = None;
        self.konami_activated = false;
        self.canvas.end_stroke();
        self.screen = Screen::Home;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if should_quit(key) {
            self.quit = true;
            return;
        }

        match self.screen {
            Screen::Home => {
                if self.konami.push(key.code) {
                    self.open_tetris(true);
                }
            }
            Screen::Tetris => {
                if should_close(key) {
                    self.close();
                    return;
                }
                let (Some(action), Some(game)) = (handle_key_event(key), self.game.as_mut()) else {
                    return;
                };
                if game.apply_action(action) && matches!(action, GameAction::Pause | GameAction::Restart) {
                    debug!(action = action.as_str(), status = game.status().label(), "game control");
                }
                self.drain_game_events();
            }
            Screen::Canvas => {
                if should_close(key) {
                    self.close();
                } else if should_clear_canvas(key) {
                    self.canvas.clear();
                } else if self.konami.push(key.code) {
                    self.open_tetris(true);
                }
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match (self.screen, mouse.kind) {
            (Screen::Home, MouseEventKind::Down(MouseButton::Left)) => {
                if self.clicks.click(column, row) {
                    self.open_canvas();
                }
            }
            (Screen::Canvas, MouseEventKind::Down(MouseButton::Left)) => {
                let area = CanvasView.area(self.viewport);
                if area.contains(column, row) {
                    let (x, y) = area.to_canvas(column, row);
                    self.canvas.start_stroke(x, y);
                }
            }
            (Screen::Canvas, MouseEventKind::Drag(MouseButton::Left)) => {
                let area = CanvasView.area(self.viewport);
                let (x, y) = area.to_canvas(column, row);
                self.canvas.draw_to(x, y);
                if !area.contains(column, row) {
                    self.canvas.end_stroke();
                }
            }
            (Screen::Canvas, MouseEventKind::Up(MouseButton::Left)) => {
                self.canvas.end_stroke();
            }
            _ => {}
        }
    }

    /// Terminal resized. An open canvas is re-sized and blanked.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.screen == Screen::Canvas {
            let area = CanvasView.area(viewport);
            self.canvas.resize(area.width, area.height);
        }
    }

    /// Advance one fixed frame step.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some(game) = self.game.as_mut() {
            game.tick(elapsed_ms);
            self.drain_game_events();
        }
    }

    fn drain_game_events(&mut self) {
        let Some(event) = self.game.as_mut().and_then(|g| g.take_last_event()) else {
            return;
        };
        if event.topped_out {
            info!(score = event.score, "game over");
        } else if event.lines_cleared > 0 {
            info!(
                lines = event.lines_cleared,
                score = event.score,
                drop_interval_ms = event.drop_interval_ms,
                "rows cleared"
            );
        }
    }

    pub fn render_into(&mut self, fb: &mut FrameBuffer) {
        let viewport = self.viewport;
        match (self.screen, self.game.as_ref()) {
            (Screen::Tetris, Some(game)) => {
                game.snapshot_into(&mut self.snapshot);
                GameView::default().render_into(&self.snapshot, self.konami_activated, viewport, fb);
            }
            (Screen::Canvas, _) => CanvasView.render_into(&self.canvas, viewport, fb),
            _ => HomeView.render_into(viewport, fb),
        }
    }
}
