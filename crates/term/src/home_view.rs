//! HomeView: the landing screen that hides the mini-games.

use crate::fb::{CellStyle, FrameBuffer};
use crate::game_view::{Viewport, MUTED, TEXT};

const LINES: [(&str, bool); 8] = [
    ("~/portfolio", true),
    ("", false),
    ("Easter Eggs Hunt Guide", true),
    ("1. Try the Konami code somewhere on this site...", false),
    ("   ↑ ↑ ↓ ↓ ← → ← → B A", false),
    ("2. Click in the top-left corner 5 times", false),
    ("3. There might be more hidden surprises...", false),
    ("Keep exploring!  (q to quit)", false),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct HomeView;

impl HomeView {
    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let top = viewport.height.saturating_sub(LINES.len() as u16) / 2;
        for (i, (line, heading)) in LINES.iter().enumerate() {
            let style = if *heading { TEXT.bold() } else { MUTED };
            fb.put_str_centered(0, viewport.width, top + i as u16, line, style);
        }
    }

    pub fn render(&self, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(viewport, &mut fb);
        fb
    }
}
