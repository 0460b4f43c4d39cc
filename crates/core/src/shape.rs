//! Shape masks and rotation.
//!
//! A shape is a small boolean mask with its own width and height. Rotation
//! builds a new mask by transposing and reversing, so the bounding box swaps
//! its dimensions (the I bar turns from 4x1 into 1x4). There are no wall kicks:
//! a rotated mask is either legal at the piece origin or the rotation fails.

use arrayvec::ArrayVec;

use crate::types::ShapeKind;

/// Largest side of any mask
pub const MAX_SHAPE_SIDE: usize = 4;

/// Occupied cells of a mask as (x, y) offsets from its top-left corner.
pub type Minos = ArrayVec<(i8, i8), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>;

/// 2D boolean mask, `rows[y][x]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    rows: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build a mask from rows of 0/1 values.
    ///
    /// Returns `None` for empty, ragged or oversized input.
    pub fn from_bits(bits: &[&[u8]]) -> Option<Self> {
        let height = bits.len();
        let width = bits.first()?.len();
        if height == 0 || width == 0 || height > MAX_SHAPE_SIDE || width > MAX_SHAPE_SIDE {
            return None;
        }

        let mut rows = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (y, row) in bits.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (x, &bit) in row.iter().enumerate() {
                rows[y][x] = bit != 0;
            }
        }

        Some(Self {
            width: width as u8,
            height: height as u8,
            rows,
        })
    }

    /// Spawn orientation of a tetromino kind.
    pub fn of(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::I => mask(4, 1, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]),
            ShapeKind::O => mask(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
            ShapeKind::T => mask(3, 2, [[1, 1, 1, 0], [0, 1, 0, 0], [0; 4], [0; 4]]),
            ShapeKind::L => mask(3, 2, [[1, 1, 1, 0], [1, 0, 0, 0], [0; 4], [0; 4]]),
            ShapeKind::J => mask(3, 2, [[1, 1, 1, 0], [0, 0, 1, 0], [0; 4], [0; 4]]),
            ShapeKind::S => mask(3, 2, [[1, 1, 0, 0], [0, 1, 1, 0], [0; 4], [0; 4]]),
            ShapeKind::Z => mask(3, 2, [[0, 1, 1, 0], [1, 1, 0, 0], [0; 4], [0; 4]]),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the mask cell at (x, y) is occupied. Out of range is empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.rows[y][x]
    }

    /// Rotate 90° clockwise: `new[i][j] = old[h - 1 - j][i]`.
    pub fn rotated_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut rows = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (i, row) in rows.iter_mut().enumerate().take(w) {
            for (j, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.rows[h - 1 - j][i];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            rows,
        }
    }

    /// Occupied cells in row-major order.
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.rows[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }
}

/// Const constructor for the built-in masks.
const fn mask(width: u8, height: u8, bits: [[u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE]) -> Shape {
    let mut rows = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
    let mut y = 0;
    while y < MAX_SHAPE_SIDE {
        let mut x = 0;
        while x < MAX_SHAPE_SIDE {
            rows[y][x] = bits[y][x] != 0;
            x += 1;
        }
        y += 1;
    }
    Shape {
        width,
        height,
        rows,
    }
}
