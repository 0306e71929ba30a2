//! CanvasView: draws the hidden drawing canvas overlay.

use crate::core::Canvas;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{draw_border, Viewport, MUTED, TEXT};

/// Drawing surface background (slate).
pub const CANVAS_BG: Rgb = Rgb::hex(0x1f2937);
/// Ink color.
pub const INK: Rgb = Rgb::hex(0xffffff);

const TITLE: &str = "Hidden Drawing Canvas";
const LEGEND: &str = "[c]Clear  [Esc]Close";

/// Area of the viewport covered by the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasArea {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CanvasArea {
    /// Translate a terminal position into canvas coordinates.
    ///
    /// Positions outside the area still translate (possibly negative) so a
    /// stroke dragged past the edge is clipped rather than dropped.
    pub fn to_canvas(&self, column: u16, row: u16) -> (i32, i32) {
        (column as i32 - self.x as i32, row as i32 - self.y as i32)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && column < self.x.saturating_add(self.width)
            && row < self.y.saturating_add(self.height)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CanvasView;

impl CanvasView {
    /// 80% of the width and 70% of the height, below a two-row header.
    pub fn area(&self, viewport: Viewport) -> CanvasArea {
        let width = (viewport.width as u32 * 8 / 10) as u16;
        let height = ((viewport.height as u32 * 7 / 10) as u16).min(viewport.height.saturating_sub(6));
        CanvasArea {
            x: viewport.width.saturating_sub(width) / 2,
            y: 3,
            width,
            height,
        }
    }

    pub fn render_into(&self, canvas: &Canvas, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let area = self.area(viewport);
        let right = area.x + area.width;

        fb.put_str(area.x, 1, TITLE, TEXT.bold());
        // The legend moves up a row when it would overwrite the title.
        let title_w = TITLE.chars().count() as u16;
        let legend_w = LEGEND.chars().count() as u16;
        let legend_y = if title_w + 1 + legend_w <= area.width { 1 } else { 0 };
        fb.put_str_right(right, legend_y, LEGEND, MUTED);

        draw_border(
            fb,
            area.x.saturating_sub(1),
            area.y - 1,
            area.width + 2,
            area.height + 2,
            MUTED,
        );

        let blank = CellStyle::new(CANVAS_BG, CANVAS_BG);
        let ink = CellStyle::new(INK, CANVAS_BG);
        for y in 0..area.height {
            for x in 0..area.width {
                let (ch, style) = if canvas.is_inked(x, y) {
                    ('█', ink)
                } else {
                    (' ', blank)
                };
                fb.put_char(area.x + x, area.y + y, ch, style);
            }
        }

        let footer_y = area.y + area.height + 1;
        fb.put_str_centered(
            0,
            viewport.width,
            footer_y,
            "You found the hidden drawing canvas! Have fun sketching.",
            TEXT,
        );
        fb.put_str_centered(
            0,
            viewport.width,
            footer_y + 1,
            "Easter egg: Click in the top-left corner 5 times to reveal this canvas",
            MUTED.dim(),
        );
    }

    pub fn render(&self, canvas: &Canvas, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, viewport, &mut fb);
        fb
    }
}
