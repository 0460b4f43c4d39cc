//! Collision check - the single legality test for every placement.

use crate::board::Board;
use crate::piece::Piece;
use crate::shape::Shape;

/// Whether `piece`, shifted by (dx, dy) and optionally wearing `candidate`
/// instead of its own mask, would overlap a wall, the floor or a locked block.
///
/// Cells above the top row are never blocked, which lets pieces spawn and
/// rotate partially off-board.
pub fn collides(
    board: &Board,
    piece: &Piece,
    dx: i8,
    dy: i8,
    candidate: Option<&Shape>,
) -> bool {
    let shape = candidate.unwrap_or(&piece.shape);
    shape.minos().iter().any(|&(mx, my)| {
        let x = i16::from(piece.x) + i16::from(mx) + i16::from(dx);
        let y = i16::from(piece.y) + i16::from(my) + i16::from(dy);
        // Targets outside the i8 coordinate space count as off the board.
        match (i8::try_from(x), i8::try_from(y)) {
            (Ok(x), Ok(y)) => board.blocks(x, y),
            _ => true,
        }
    })
}
