//! The falling piece: a shape mask placed on the board with a color.

use crate::shape::{Minos, Shape};
use crate::types::{Color, ShapeKind, BOARD_WIDTH};

/// Active or pending falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub color: Color,
    /// Board column of the mask's left edge
    pub x: i8,
    /// Board row of the mask's top edge
    pub y: i8,
}

impl Piece {
    /// Create a piece horizontally centered on row 0.
    ///
    /// `x = floor(W / 2) - floor(shape_width / 2)`
    pub fn spawn(kind: ShapeKind) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            shape,
            color: kind.color(),
            x: (BOARD_WIDTH / 2) as i8 - (shape.width() / 2) as i8,
            y: 0,
        }
    }

    /// Occupied cells relative to the piece origin.
    pub fn minos(&self) -> Minos {
        self.shape.minos()
    }

    /// Occupied cells in board coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        self.shape
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
    }

    /// Same piece shifted by (dx, dy), or `None` if the origin would leave
    /// the `i8` range.
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            ..*self
        })
    }

    /// Same piece with a different mask at the same origin.
    pub fn with_shape(&self, shape: Shape) -> Self {
        Self { shape, ..*self }
    }
}
