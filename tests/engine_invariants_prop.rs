//! Property tests for the engine's transition rules.
//!
//! Generated seeds and command streams drive whole sessions; after every step
//! the active piece must sit on free in-bound cells, rejected commands must
//! leave it untouched, and the score must track cleared lines exactly.

use proptest::prelude::*;

use blockfall::core::{Board, Engine, Piece};
use blockfall::types::{Command, ShapeKind, SCORE_PER_ROW};

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::Left),
        Just(Command::Right),
        Just(Command::Down),
        Just(Command::Rotate),
    ]
}

fn shape() -> impl Strategy<Value = ShapeKind> {
    (0usize..7).prop_map(|i| ShapeKind::ALL[i])
}

fn assert_active_is_placed(engine: &Engine) {
    if let Some(piece) = engine.active() {
        for b in piece.cells() {
            assert!(b.in_bounds(), "active cell {:?} out of bounds", b);
            assert!(!engine.board().is_occupied(b.row, b.col), "active cell {:?} overlaps", b);
        }
    } else {
        assert!(engine.game_over());
    }
}

proptest! {
    #[test]
    fn generated_sessions_keep_invariants(
        seed in any::<u64>(),
        steps in prop::collection::vec((command(), any::<bool>()), 1..400),
    ) {
        let mut engine = Engine::seeded(seed);
        let mut last_score = 0;

        for (cmd, tick) in steps {
            let before = engine.active().copied();
            let moved = engine.apply_command(cmd);
            if !moved {
                prop_assert_eq!(engine.active().copied(), before);
            }
            assert_active_is_placed(&engine);

            if tick {
                let outcome = engine.tick();
                prop_assert!(outcome.score >= last_score);
                prop_assert_eq!(outcome.score_delta, outcome.lines_cleared * SCORE_PER_ROW);
                last_score = outcome.score;
                assert_active_is_placed(&engine);
            }
            prop_assert_eq!(engine.score(), engine.lines() * SCORE_PER_ROW);
        }
    }

    #[test]
    fn rejected_moves_leave_cells_unchanged(
        shape in shape(),
        filled in prop::collection::vec((0i8..20, 0i8..10), 0..60),
        moves in prop::collection::vec((-1i8..=1, -1i8..=1), 1..40),
    ) {
        let mut board = Board::new();
        for (row, col) in filled {
            // Keep the spawn area clear so the piece starts on free cells.
            if row >= 4 {
                board.set(row, col, true);
            }
        }
        let mut piece = Piece::spawn(shape);

        for (dr, dc) in moves {
            let before = *piece.cells();
            if piece.try_move(dr, dc, &board) {
                prop_assert!(board.fits(piece.cells()));
            } else {
                prop_assert_eq!(piece.cells(), &before);
            }
        }
    }

    #[test]
    fn rotation_is_all_or_nothing(
        shape in shape(),
        drop in 0i8..16,
        shift in -4i8..=4,
        filled in prop::collection::vec((0i8..20, 0i8..10), 0..40),
    ) {
        let empty = Board::new();
        let mut piece = Piece::spawn(shape);
        for _ in 0..drop {
            piece.try_move(1, 0, &empty);
        }
        piece.try_move(0, shift, &empty);

        let mut board = Board::new();
        for (row, col) in filled {
            if !piece.cells().iter().any(|b| b.row == row && b.col == col) {
                board.set(row, col, true);
            }
        }

        let before = *piece.cells();
        if piece.try_rotate(&board) {
            prop_assert!(board.fits(piece.cells()));
            prop_assert_eq!(piece.pivot(), before[piece.pivot_index()]);
        } else {
            prop_assert_eq!(piece.cells(), &before);
        }
    }
}
