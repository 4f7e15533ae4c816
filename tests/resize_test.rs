//! Grid resync when the terminal grows or shrinks.

use clife::core::{Grid, Session, ViewportGeometry};
use clife::term::{FrameBuffer, GameView};
use clife::types::Cell;
use pretty_assertions::assert_eq;

fn block_at(width: usize, height: usize, x: usize, y: usize) -> Grid {
    let mut g = Grid::new(width, height);
    for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        g.set(x + dx, y + dy, Cell::Alive);
    }
    g
}

fn draw(view: &GameView, session: &mut Session, cols: u16, rows: u16) {
    let mut fb = FrameBuffer::new(0, 0);
    view.draw(session, cols, rows, &mut fb);
}

#[test]
fn test_growth_pads_with_dead_cells() {
    let view = GameView::default();
    let mut s = Session::new("Block", block_at(6, 4, 2, 1));

    // 20x12 terminal -> 16x6 interior.
    draw(&view, &mut s, 20, 12);
    assert_eq!(s.last_viewport(), Some(ViewportGeometry::new(16, 6)));
    assert_eq!((s.grid().width(), s.grid().height()), (16, 6));

    draw(&view, &mut s, 40, 20);
    assert_eq!((s.grid().width(), s.grid().height()), (36, 14));
    assert_eq!(s.grid(), &block_at(36, 14, 2, 1));
}

#[test]
fn test_shrink_keeps_cells_inside_the_new_interior() {
    let view = GameView::default();
    let mut s = Session::new("Block", block_at(36, 14, 3, 2));

    draw(&view, &mut s, 20, 12);
    assert_eq!(s.grid(), &block_at(16, 6, 3, 2));
}

#[test]
fn test_shrink_discards_cells_outside_the_new_interior() {
    let view = GameView::default();
    let mut s = Session::new("Block", block_at(36, 14, 30, 10));

    // The block itself still fits a 16x6 interior, so nothing blocks the
    // resync, but it sits outside it and is gone for good.
    draw(&view, &mut s, 20, 12);
    assert_eq!(s.grid(), &Grid::new(16, 6));

    draw(&view, &mut s, 40, 20);
    assert_eq!(s.grid(), &Grid::new(36, 14));
}

#[test]
fn test_partially_visible_pattern_is_cut_at_the_border() {
    let view = GameView::default();
    // Block straddling column 15/16 of a 36-wide grid.
    let mut s = Session::new("Block", block_at(36, 14, 15, 0));

    draw(&view, &mut s, 20, 12);
    let mut expected = Grid::new(16, 6);
    expected.set(15, 0, Cell::Alive);
    expected.set(15, 1, Cell::Alive);
    assert_eq!(s.grid(), &expected);
}

#[test]
fn test_too_small_viewport_does_not_touch_the_grid() {
    let view = GameView::default();
    let original = block_at(36, 14, 1, 1);
    let mut s = Session::new("Block", original.clone());

    // 8x8 terminal -> 4x2 interior; the block needs 4x4.
    let mut fb = FrameBuffer::new(0, 0);
    let report = view.draw(&mut s, 8, 8, &mut fb);
    assert!(report.size_check.is_too_small());
    assert_eq!(s.grid(), &original);
}
