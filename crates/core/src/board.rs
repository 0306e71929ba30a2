//! Board module - the 10x20 occupancy grid
//!
//! Each cell is either empty or occupied; locked cells do not remember which
//! piece they came from. Storage is a flat row-major array; the board never
//! allocates.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Rows above the board (y < 0) exist for collision purposes
//! only: they are never occupied.

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Upper bound on rows removed by one clear pass
pub const MAX_CLEARED_ROWS: usize = BOARD_HEIGHT as usize;

/// Result of committing a piece into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockResult {
    /// All cells written
    Locked,
    /// At least one occupied cell sits above row 0; nothing was written
    AboveTop,
}

/// The game board - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y); None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Would `shape` placed with its top-left corner at (x, y) be illegal?
    ///
    /// Illegal means some occupied cell lands left or right of the walls, at or
    /// below the floor, or on an occupied cell of a visible row. Rows above the
    /// board are never checked for occupancy.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.minos().any(|(dx, dy)| {
            let bx = x + dx;
            let by = y + dy;
            bx < 0
                || bx >= BOARD_WIDTH as i8
                || by >= BOARD_HEIGHT as i8
                || (by >= 0 && self.is_occupied(bx, by))
        })
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    /// Remove every full row, shifting the rows above down and inserting empty
    /// rows at the top. Returns the removed row indices, bottom to top.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    self.cells.copy_within(src..src + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(false);
        cleared
    }

    /// Commit `shape` at (x, y) into the grid.
    ///
    /// If any occupied cell is above row 0 the board is left unchanged and
    /// [`LockResult::AboveTop`] is returned.
    pub fn lock(&mut self, shape: &Shape, x: i8, y: i8) -> LockResult {
        if shape.minos().any(|(_, dy)| y + dy < 0) {
            return LockResult::AboveTop;
        }
        for (dx, dy) in shape.minos() {
            self.set(x + dx, y + dy, true);
        }
        LockResult::Locked
    }

    /// Number of occupied cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Flat row-major view of the cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy into a row-major 2D grid
    pub fn write_grid(&self, out: &mut [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * BOARD_WIDTH as usize;
            row.copy_from_slice(&self.cells[start..start + BOARD_WIDTH as usize]);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Build a board from text rows, bottom-aligned: `#` is occupied, anything
    /// else empty. Missing rows above are empty.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = (BOARD_HEIGHT as usize).saturating_sub(rows.len());
        for (i, row) in rows.iter().take(BOARD_HEIGHT as usize).enumerate() {
            for (x, ch) in row.chars().take(BOARD_WIDTH as usize).enumerate() {
                board.set(x as i8, (offset + i) as i8, ch == '#');
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
