//! Engine module - owns the board, the active piece and the score
//!
//! The engine has exactly two mutating entry points:
//!
//! - [`Engine::tick`]: gravity. Moves the piece down one row, or, when it
//!   cannot move, locks it, clears full rows, scores them and spawns the next
//!   piece.
//! - [`Engine::apply_command`]: player input. Moves or rotates the active
//!   piece; never locks and never scores.
//!
//! Both take `&mut self`, so a caller can never interleave them. A spawned
//! piece that overlaps the stack ends the session: the engine flips to game
//! over and every later call is a no-op.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use crate::board::Board;
use crate::error::EngineError;
use crate::factory::PieceFactory;
use crate::pieces::Piece;
use crate::snapshot::{ActiveSnapshot, Snapshot};
use crate::types::{Command, SCORE_PER_ROW};

/// What a single [`Engine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The active piece could not fall and was merged into the board.
    pub locked: bool,
    /// Full rows removed by the lock.
    pub lines_cleared: u32,
    /// Points gained on this tick (0 unless rows were cleared).
    pub score_delta: u32,
    /// Score after this tick.
    pub score: u32,
    /// A new active piece was spawned.
    pub spawned: bool,
    /// The session is over (spawn blocked on this or an earlier tick).
    pub game_over: bool,
}

impl TickOutcome {
    /// True when the score changed on this tick
    pub fn score_changed(&self) -> bool {
        self.score_delta > 0
    }
}

/// The falling-block engine
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    board: Board,
    /// `None` only once the game is over.
    active: Option<Piece>,
    factory: PieceFactory<R>,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    game_over: bool,
}

impl Engine<StdRng> {
    /// Create an engine whose piece sequence is fixed by `seed`
    pub fn seeded(seed: u64) -> Self {
        Self::new(PieceFactory::seeded(seed))
    }
}

impl<R: Rng> Engine<R> {
    /// Start a session on an empty board.
    pub fn new(mut factory: PieceFactory<R>) -> Self {
        // Every spawn template fits an empty board.
        let active = factory.spawn();
        Self {
            board: Board::new(),
            active: Some(active),
            factory,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            game_over: false,
        }
    }

    /// Start a session on a pre-filled board.
    pub fn with_board(board: Board, mut factory: PieceFactory<R>) -> Result<Self, EngineError> {
        let active = factory.spawn();
        Self::from_parts(board, active, factory)
    }

    /// Start a session with an explicit board and active piece.
    pub fn from_parts(
        board: Board,
        active: Piece,
        factory: PieceFactory<R>,
    ) -> Result<Self, EngineError> {
        if !active.fits(&board) {
            return Err(EngineError::SpawnBlocked {
                shape: active.shape(),
            });
        }
        Ok(Self {
            board,
            active: Some(active),
            factory,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            game_over: false,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Advance gravity by one row.
    pub fn tick(&mut self) -> TickOutcome {
        let Some(active) = self.active.as_mut() else {
            return self.halted();
        };

        if active.try_move(1, 0, &self.board) {
            return TickOutcome {
                score: self.score,
                ..TickOutcome::default()
            };
        }

        self.lock_active()
    }

    /// Apply a player command to the active piece.
    ///
    /// Returns true if the piece moved. `Down` is a one-row nudge that never
    /// locks; only [`Engine::tick`] locks pieces.
    pub fn apply_command(&mut self, command: Command) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        match command.delta() {
            Some((delta_row, delta_col)) => active.try_move(delta_row, delta_col, &self.board),
            None => active.try_rotate(&self.board),
        }
    }

    /// Like [`Engine::apply_command`] but reports a finished session as an error.
    pub fn try_apply(&mut self, command: Command) -> Result<bool, EngineError> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }
        Ok(self.apply_command(command))
    }

    pub fn snapshot_into(&self, out: &mut Snapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(|p| ActiveSnapshot {
            shape: p.shape(),
            cells: *p.cells(),
        });
        out.score = self.score;
        out.lines = self.lines;
        out.pieces_locked = self.pieces_locked;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Lock the active piece, clear rows, score, and spawn the next piece.
    fn lock_active(&mut self) -> TickOutcome {
        let Some(active) = self.active.take() else {
            return self.halted();
        };

        // The piece only ever reaches a position through `try_move`/`try_rotate`,
        // both of which keep it on free cells.
        let merged = self.board.lock_piece(&active);
        debug_assert!(merged, "active piece overlapped the board");
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let lines_cleared = self.board.clear_full_rows();
        let score_delta = lines_cleared * SCORE_PER_ROW;
        self.lines += lines_cleared;
        self.score += score_delta;
        debug!(
            "locked {} piece, cleared {} rows, score {}",
            active.shape().as_str(),
            lines_cleared,
            self.score
        );

        let next = self.factory.spawn();
        let spawned = next.fits(&self.board);
        if spawned {
            self.active = Some(next);
        } else {
            self.game_over = true;
            info!(
                "{}; final score {}",
                EngineError::SpawnBlocked {
                    shape: next.shape()
                },
                self.score
            );
        }

        TickOutcome {
            locked: true,
            lines_cleared,
            score_delta,
            score: self.score,
            spawned,
            game_over: self.game_over,
        }
    }

    fn halted(&self) -> TickOutcome {
        TickOutcome {
            score: self.score,
            game_over: true,
            ..TickOutcome::default()
        }
    }
}
