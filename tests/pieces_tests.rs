//! Piece tests: spawn layouts, movement and pivot rotation

use blockfall::core::{Board, Piece, PieceFactory};
use blockfall::types::{Block, ShapeKind, PIVOT_INDEX, SPAWN_TEMPLATES};

fn sorted(cells: &[Block; 4]) -> Vec<(i8, i8)> {
    let mut v: Vec<_> = cells.iter().map(|b| (b.row, b.col)).collect();
    v.sort();
    v
}

#[test]
fn test_spawn_templates() {
    let line = Piece::spawn(ShapeKind::I);
    assert_eq!(
        sorted(line.cells()),
        vec![(0, 4), (1, 4), (2, 4), (3, 4)]
    );

    let square = Piece::spawn(ShapeKind::O);
    assert_eq!(
        sorted(square.cells()),
        vec![(0, 4), (0, 5), (1, 4), (1, 5)]
    );

    for (i, shape) in ShapeKind::ALL.iter().enumerate() {
        let piece = Piece::spawn(*shape);
        assert_eq!(piece.cells(), &SPAWN_TEMPLATES[i]);
        assert_eq!(piece.pivot_index(), PIVOT_INDEX);
        for b in piece.cells() {
            assert!((0..=3).contains(&b.row), "{:?} spawns below row 3", shape);
            assert!((3..=5).contains(&b.col), "{:?} spawns outside cols 3-5", shape);
        }
    }
}

#[test]
fn test_every_spawn_fits_empty_board() {
    let board = Board::new();
    let mut factory = PieceFactory::seeded(99);
    for _ in 0..50 {
        assert!(factory.spawn().fits(&board));
    }
}

#[test]
fn test_square_rotate_is_a_no_op() {
    let board = Board::new();
    let mut square = Piece::spawn(ShapeKind::O);
    let before = *square.cells();

    assert!(!square.try_rotate(&board));
    assert_eq!(square.cells(), &before);
}

#[test]
fn test_four_rotations_restore_cells() {
    let board = Board::new();
    for shape in ShapeKind::ALL.into_iter().filter(|s| *s != ShapeKind::O) {
        let mut piece = Piece::spawn(shape);
        for _ in 0..4 {
            assert!(piece.try_move(1, 0, &board));
        }
        let start = *piece.cells();
        let pivot = piece.pivot();

        for turn in 1..=4 {
            assert!(piece.try_rotate(&board), "{:?} turn {} rejected", shape, turn);
            assert_eq!(piece.pivot(), pivot);
        }
        assert_eq!(piece.cells(), &start, "{:?}", shape);
    }
}

#[test]
fn test_rotation_blocked_leaves_piece_unchanged() {
    // Line at spawn would rotate onto row 1, cols 3-6.
    let mut board = Board::new();
    board.set(1, 6, true);
    let mut line = Piece::spawn(ShapeKind::I);
    let before = *line.cells();

    assert!(!line.try_rotate(&board));
    assert_eq!(line.cells(), &before);
}

#[test]
fn test_move_left_until_wall() {
    let board = Board::new();
    for shape in ShapeKind::ALL {
        let mut piece = Piece::spawn(shape);
        let mut last = *piece.cells();
        while piece.try_move(0, -1, &board) {
            last = *piece.cells();
        }
        assert_eq!(piece.leftmost_col(), 0, "{:?}", shape);
        assert_eq!(piece.cells(), &last);
    }
}

#[test]
fn test_move_blocked_by_settled_cell() {
    let mut board = Board::new();
    board.set(0, 3, true);
    let mut line = Piece::spawn(ShapeKind::I);
    let before = *line.cells();

    assert!(!line.try_move(0, -1, &board));
    assert_eq!(line.cells(), &before);
    assert!(line.try_move(0, 1, &board));
    assert_eq!(line.leftmost_col(), 5);
}

#[test]
fn test_move_down_stops_on_floor() {
    let board = Board::new();
    let mut square = Piece::spawn(ShapeKind::O);
    let mut falls = 0;
    while square.try_move(1, 0, &board) {
        falls += 1;
    }
    assert_eq!(falls, 18);
    assert_eq!(square.lowest_row(), 19);
}

#[test]
fn test_extreme_deltas_are_rejected_not_wrapped() {
    let board = Board::new();
    for (dr, dc) in [(127, 0), (-128, 0), (0, 127), (0, -128), (i8::MAX, i8::MIN)] {
        for shape in ShapeKind::ALL {
            let mut piece = Piece::spawn(shape);
            let before = *piece.cells();
            assert!(!piece.try_move(dr, dc, &board), "{:?} moved by ({}, {})", shape, dr, dc);
            assert_eq!(piece.cells(), &before);
        }
    }

    // The line reaches row 3, so a full-range drop overflows row 3 + 127.
    assert_eq!(Piece::spawn(ShapeKind::I).moved_cells(127, 0), None);
}
