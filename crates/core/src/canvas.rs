//! Canvas module - the hidden freehand drawing board
//!
//! A grid of inked/blank cells. A stroke starts on press, every drag inks a
//! straight segment from the previous pen position, and release (or the pointer
//! leaving the canvas) ends it. Points outside the grid are clipped per cell,
//! so a segment that leaves and re-enters still draws its visible parts.

/// Freehand drawing surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<bool>,
    pen: Option<(i32, i32)>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width as usize) * (height as usize)],
            pen: None,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Is a stroke in progress?
    pub fn is_drawing(&self) -> bool {
        self.pen.is_some()
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn is_inked(&self, x: u16, y: u16) -> bool {
        self.idx(x as i32, y as i32)
            .map(|i| self.cells[i])
            .unwrap_or(false)
    }

    /// Number of inked cells
    pub fn inked(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    fn ink(&mut self, x: i32, y: i32) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = true;
        }
    }

    /// Put the pen down at (x, y)
    pub fn start_stroke(&mut self, x: i32, y: i32) {
        self.pen = Some((x, y));
        self.ink(x, y);
    }

    /// Drag the pen to (x, y), inking the segment. Ignored when the pen is up.
    pub fn draw_to(&mut self, x: i32, y: i32) {
        let Some((x0, y0)) = self.pen else {
            return;
        };

        // Bresenham, all octants.
        let dx = (x - x0).abs();
        let dy = -(y - y0).abs();
        let sx = if x0 < x { 1 } else { -1 };
        let sy = if y0 < y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut cx, mut cy) = (x0, y0);
        loop {
            self.ink(cx, cy);
            if cx == x && cy == y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                cx += sx;
            }
            if e2 <= dx {
                err += dx;
                cy += sy;
            }
        }

        self.pen = Some((x, y));
    }

    /// Lift the pen
    pub fn end_stroke(&mut self) {
        self.pen = None;
    }

    /// Blank every cell. A stroke in progress keeps going.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Change the drawing area; the drawing is discarded.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize((width as usize) * (height as usize), false);
        self.pen = None;
    }
}
