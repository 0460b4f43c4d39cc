//! Board tests: bounds, collision and row clearing

use blockfall::core::{collides, Board, Piece};
use blockfall::types::{Color, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.filled_count(), 0);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();
    assert!(!board.set(-1, 0, Some(Color::Rose)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(Color::Rose)));
    assert!(board.set(9, 19, Some(Color::Rose)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_blocks_walls_floor_but_not_sky() {
    let mut board = Board::new();
    board.set(4, 4, Some(Color::Mint));

    assert!(board.blocks(-1, 5));
    assert!(board.blocks(BOARD_WIDTH as i8, 5));
    assert!(board.blocks(3, BOARD_HEIGHT as i8));
    assert!(board.blocks(4, 4));
    assert!(!board.blocks(3, -2));
    assert!(!board.blocks(5, 5));
}

#[test]
fn test_collides_matches_blocks_for_every_cell() {
    let mut board = Board::new();
    board.set(5, 1, Some(Color::Gold));

    for kind in ShapeKind::ALL {
        let piece = Piece::spawn(kind);
        for dx in -6..8i8 {
            for dy in -3..21i8 {
                let expected = piece
                    .cells()
                    .any(|(x, y)| board.blocks(x + dx, y + dy));
                assert_eq!(
                    collides(&board, &piece, dx, dy, None),
                    expected,
                    "{kind:?} at offset ({dx}, {dy})"
                );
            }
        }
    }
}

#[test]
fn test_clear_preserves_order_of_remaining_rows() {
    let mut board = Board::from_rows(
        &[
            "#.........",
            "##########",
            ".#........",
            "##########",
            "..#.......",
        ],
        Color::Azure,
    );

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[18, 16]);

    // Survivors keep their relative order and sink by two.
    assert_eq!(board.get(2, 19), Some(Some(Color::Azure)));
    assert_eq!(board.get(1, 18), Some(Some(Color::Azure)));
    assert_eq!(board.get(0, 17), Some(Some(Color::Azure)));
    assert_eq!(board.filled_count(), 3);
    for y in 0..17 {
        assert!(board.row(y).unwrap().iter().all(Option::is_none));
    }
}

#[test]
fn test_clear_nothing_when_no_row_full() {
    let mut board = Board::from_rows(&["#########."], Color::Rose);
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board.filled_count(), 9);
}

#[test]
fn test_merge_skips_cells_above_top() {
    let mut board = Board::new();
    let piece = Piece::spawn(ShapeKind::O);
    let merged = board.merge(&piece.minos(), 0, -1, Color::Violet);
    assert_eq!(merged, 2);
    assert_eq!(board.get(0, 0), Some(Some(Color::Violet)));
    assert_eq!(board.get(1, 0), Some(Some(Color::Violet)));
}
