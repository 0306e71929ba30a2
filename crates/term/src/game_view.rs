//! GameView: maps a Tetris snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_COLOR, LOCKED_COLOR};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rows above the board frame: title, score/status.
const HEADER_ROWS: u16 = 2;
/// Rows below the board frame: controls, konami banner, badge.
const FOOTER_ROWS: u16 = 4;

pub(crate) const TEXT: CellStyle = CellStyle::new(Rgb::new(229, 231, 235), Rgb::new(0, 0, 0));
pub(crate) const MUTED: CellStyle = CellStyle::new(Rgb::new(156, 163, 175), Rgb::new(0, 0, 0));
const GAME_OVER_TEXT: CellStyle = CellStyle::new(Rgb::new(248, 113, 113), Rgb::new(0, 0, 0)).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(55, 65, 81), Rgb::new(0, 0, 0));

/// Renders the Tetris overlay: title and buttons, score and status, the
/// board, the controls legend and the Konami banner.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the board including its border.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Top-left corner of the board frame for a viewport.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let total_h = HEADER_ROWS + frame_h + FOOTER_ROWS;
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = viewport.height.saturating_sub(total_h) / 2 + HEADER_ROWS;
        (x, y)
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        konami_activated: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        self.draw_header(fb, snap, start_x, start_y, frame_w);
        draw_border(fb, start_x, start_y, frame_w, frame_h, BORDER);

        let empty = CellStyle::new(EMPTY_COLOR, EMPTY_COLOR);
        let locked = CellStyle::new(LOCKED_COLOR, EMPTY_COLOR);
        let piece = snap
            .active
            .map(|a| CellStyle::new(a.kind.color(), EMPTY_COLOR).bold());

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let (ch, style) = if snap.board[y as usize][x as usize] {
                    ('█', locked)
                } else if snap.active_at(x as i8, y as i8) {
                    ('█', piece.unwrap_or(locked))
                } else {
                    (' ', empty)
                };
                self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, ch, style);
            }
        }

        match snap.status {
            GameStatus::Paused => self.draw_overlay_text(fb, start_x, start_y, "PAUSED"),
            GameStatus::GameOver => self.draw_overlay_text(fb, start_x, start_y, "GAME OVER"),
            GameStatus::Playing => {}
        }

        self.draw_footer(fb, konami_activated, viewport, start_y + frame_h);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, konami_activated: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, konami_activated, viewport, &mut fb);
        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let (Some(title_y), Some(score_y)) = (start_y.checked_sub(2), start_y.checked_sub(1)) else {
            return;
        };
        let right = start_x + frame_w;

        fb.put_str(start_x, title_y, "Tetris", TEXT.bold());
        let pause_label = if snap.status == GameStatus::Paused {
            "[p]Resume"
        } else {
            "[p]Pause"
        };
        fb.put_str_right(right, title_y, pause_label, MUTED);

        let x = fb.put_str(start_x, score_y, "Score: ", TEXT.bold());
        fb.put_u32(x, score_y, snap.score, TEXT.bold());

        let status_style = if snap.status == GameStatus::GameOver {
            GAME_OVER_TEXT
        } else {
            TEXT.bold()
        };
        fb.put_str_right(right, score_y, snap.status.label(), status_style);
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, konami_activated: bool, viewport: Viewport, y: u16) {
        let w = viewport.width;
        fb.put_str_centered(0, w, y, "↑ Rotate  ← Left  → Right  ↓ Down  P Pause", MUTED);
        fb.put_str_centered(0, w, y + 1, "r Restart  Esc Close", MUTED);
        fb.put_str_centered(0, w, y + 2, "You activated the Konami code! ↑↑↓↓←→←→BA", TEXT);
        if konami_activated {
            fb.put_str_centered(0, w, y + 3, "Konami code status: Activated", MUTED);
        }
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, text: &str) {
        let (frame_w, frame_h) = self.frame_size();
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(start_x, frame_w, start_y + frame_h / 2, text, style);
    }
}

pub(crate) fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
