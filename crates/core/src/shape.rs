//! Shape module - tetromino occupancy matrices and matrix rotation
//!
//! A shape is a small row-major grid of occupied/empty cells. Rotation turns the
//! whole matrix 90° clockwise, so the bounding box swaps width and height.
//! There is no kick table: a rotation either fits where the piece is or it
//! does not happen.

use crate::types::PieceKind;

/// Largest side of any tetromino bounding box
pub const MAX_SHAPE_SIDE: usize = 4;

/// Occupancy matrix of a piece, stored in a fixed 4x4 array.
///
/// Only the top-left `rows x cols` corner is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build a shape from rows of `0`/`1` values.
    ///
    /// Rows longer than 4 or more than 4 rows are truncated.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let height = rows.len().min(MAX_SHAPE_SIDE);
        let mut width = 0;
        for (r, row) in rows.iter().take(height).enumerate() {
            width = width.max(row.len().min(MAX_SHAPE_SIDE));
            for (c, &v) in row.iter().take(MAX_SHAPE_SIDE).enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        }
    }

    /// Spawn orientation of a piece kind
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::J => Self::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Is the cell at (row, col) occupied? Out of range is empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// The matrix turned 90° clockwise.
    ///
    /// `rotated[r][c] = self[rows - 1 - c][r]`
    pub fn rotated_cw(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let rows = self.rows as usize;
        for (r, out_row) in cells.iter_mut().take(self.cols as usize).enumerate() {
            for (c, out) in out_row.iter_mut().take(rows).enumerate() {
                *out = self.cells[rows - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Offsets `(dx, dy)` of every occupied cell, row-major.
    pub fn minos(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_four_minos() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::of(kind).minos().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn i_piece_rotates_to_vertical() {
        let i = Shape::of(PieceKind::I);
        assert_eq!((i.rows(), i.cols()), (1, 4));

        let v = i.rotated_cw();
        assert_eq!((v.rows(), v.cols()), (4, 1));
        assert_eq!(v.minos().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn t_piece_rotates_clockwise() {
        // 010      10
        // 111  ->  11
        //          10
        let t = Shape::of(PieceKind::T).rotated_cw();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert!(t.get(0, 0) && !t.get(0, 1));
        assert!(t.get(1, 0) && t.get(1, 1));
        assert!(t.get(2, 0) && !t.get(2, 1));
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let s = Shape::of(kind);
            assert_eq!(s.rotated_cw().rotated_cw().rotated_cw().rotated_cw(), s);
        }
    }

    #[test]
    fn o_piece_is_rotation_invariant() {
        let o = Shape::of(PieceKind::O);
        assert_eq!(o.rotated_cw(), o);
    }
}
