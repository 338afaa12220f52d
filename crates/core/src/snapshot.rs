//! Snapshot module - plain copies of engine state for renderers
//!
//! A snapshot owns its data, so a renderer can hold one while the engine
//! keeps running. [`Engine::snapshot_into`](crate::Engine::snapshot_into)
//! refills an existing one in place.

use serde::{Deserialize, Serialize};

use crate::pieces::PieceCells;
use crate::types::{ShapeKind, BOARD_COLS, BOARD_ROWS};

/// Occupancy rows, top to bottom
pub type Grid = [[bool; BOARD_COLS as usize]; BOARD_ROWS as usize];

/// The falling piece: its shape and four cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub shape: ShapeKind,
    pub cells: PieceCells,
}

/// Read-only view of the engine for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Grid,
    /// `None` once the game is over.
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub game_over: bool,
}

impl Snapshot {
    /// Check if (row, col) is covered by the active piece
    pub fn is_active_cell(&self, row: i8, col: i8) -> bool {
        self.active
            .map(|a| a.cells.iter().any(|b| b.row == row && b.col == col))
            .unwrap_or(false)
    }

    pub fn occupied_count(&self) -> usize {
        self.board.iter().flatten().filter(|&&c| c).count()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            board: [[false; BOARD_COLS as usize]; BOARD_ROWS as usize],
            active: None,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            game_over: false,
        }
    }
}
