//! Render tests: snapshot -> canvas -> terminal byte stream

use blockfall::core::{Board, GameState, ShapeGenerator};
use blockfall::term::{changed_runs, encode_diff_into, BoardView, Canvas, Viewport};
use blockfall::types::{Color, Difficulty, ShapeKind};

fn text(canvas: &Canvas) -> String {
    (0..canvas.height())
        .map(|y| canvas.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_panel_shows_score_and_difficulty() {
    let board = Board::from_rows(&["..########"], Color::Gold);
    let mut state = GameState::from_parts(
        board,
        ShapeGenerator::scripted(&[ShapeKind::O]),
        Difficulty::Medium,
    );
    while state.move_left() {}
    state.hard_drop();

    let canvas = BoardView::default().render(&state.snapshot(), Viewport::new(80, 30));
    let text = text(&canvas);
    assert!(text.contains("100"));
    assert!(text.contains("medium"));
}

#[test]
fn test_moving_piece_redraws_only_changed_cells() {
    let generator = ShapeGenerator::scripted(&[ShapeKind::T]);
    let mut state = GameState::with_generator(generator, Difficulty::Easy);
    let view = BoardView::default();
    let viewport = Viewport::new(80, 30);

    let before = view.render(&state.snapshot(), viewport);
    let unchanged = view.render(&state.snapshot(), viewport);
    assert!(changed_runs(&before, &unchanged).is_empty());

    state.move_right();
    let after = view.render(&state.snapshot(), viewport);
    let runs = changed_runs(&before, &after);
    assert!(!runs.is_empty());
    // Only board rows change: the piece at rows 0-1 and its ghost at 18-19.
    assert!(runs.len() <= 8, "{runs:?}");

    let mut out = Vec::new();
    encode_diff_into(&before, &after, &mut out).unwrap();
    assert!(!out.is_empty());
}

#[test]
fn test_render_into_reuses_canvas_across_resizes() {
    let state = GameState::new(3);
    let view = BoardView::default();
    let mut canvas = Canvas::new(0, 0);

    view.render_into(&state.snapshot(), Viewport::new(60, 24), &mut canvas);
    assert_eq!((canvas.width(), canvas.height()), (60, 24));
    view.render_into(&state.snapshot(), Viewport::new(100, 40), &mut canvas);
    assert_eq!((canvas.width(), canvas.height()), (100, 40));
}
