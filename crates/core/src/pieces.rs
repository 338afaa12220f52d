//! Pieces module - shape templates, movement and pivot rotation
//!
//! A piece is four blocks plus a pivot index. Movement translates all four
//! blocks; rotation turns every block 90° around the pivot block. Both are
//! all-or-nothing: if any resulting block is out of bounds or lands on an
//! occupied cell the piece is left exactly as it was.
//!
//! There are no wall kicks and no per-shape rotation centres: the pivot is
//! always `cells[PIVOT_INDEX]` of the spawn template.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{Block, ShapeKind, PIVOT_INDEX};

/// The four blocks of a piece
pub type PieceCells = [Block; 4];

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    shape: ShapeKind,
    cells: PieceCells,
    pivot: usize,
}

impl Piece {
    /// Create a piece at its spawn position
    pub fn spawn(shape: ShapeKind) -> Self {
        Self {
            shape,
            cells: shape.template(),
            pivot: PIVOT_INDEX,
        }
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn cells(&self) -> &PieceCells {
        &self.cells
    }

    pub fn pivot_index(&self) -> usize {
        self.pivot
    }

    pub fn pivot(&self) -> Block {
        self.cells[self.pivot]
    }

    /// Smallest column occupied by the piece
    pub fn leftmost_col(&self) -> i8 {
        self.cells.iter().map(|b| b.col).min().unwrap_or(0)
    }

    /// Largest row occupied by the piece
    pub fn lowest_row(&self) -> i8 {
        self.cells.iter().map(|b| b.row).max().unwrap_or(0)
    }

    /// Check if all blocks are in bounds and on empty cells
    pub fn fits(&self, board: &Board) -> bool {
        board.fits(&self.cells)
    }

    /// Cells after a translation, without committing.
    /// `None` if a coordinate would overflow.
    pub fn moved_cells(&self, delta_row: i8, delta_col: i8) -> Option<PieceCells> {
        map_cells(&self.cells, |b| b.offset(delta_row, delta_col))
    }

    /// Cells after a quarter turn around the pivot, without committing
    pub fn rotated_cells(&self) -> Option<PieceCells> {
        let pivot = self.pivot();
        map_cells(&self.cells, |b| b.rotated_about(pivot))
    }

    /// Try to translate the piece.
    /// Returns true and commits if every candidate block is free, otherwise
    /// returns false and leaves the piece unchanged.
    pub fn try_move(&mut self, delta_row: i8, delta_col: i8, board: &Board) -> bool {
        match self.moved_cells(delta_row, delta_col) {
            Some(candidate) => self.commit_if_fits(candidate, board),
            None => false,
        }
    }

    /// Try to rotate the piece 90° around its pivot.
    ///
    /// The square has no distinct rotated state; turning it around a corner
    /// block would only slide it sideways, so it never rotates.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        if self.shape == ShapeKind::O {
            return false;
        }

        match self.rotated_cells() {
            Some(candidate) => self.commit_if_fits(candidate, board),
            None => false,
        }
    }

    fn commit_if_fits(&mut self, candidate: PieceCells, board: &Board) -> bool {
        if !board.fits(&candidate) {
            return false;
        }
        self.cells = candidate;
        true
    }

    /// Build a piece from explicit cells (for tests and replays)
    pub fn from_cells(shape: ShapeKind, cells: PieceCells) -> Self {
        Self {
            shape,
            cells,
            pivot: PIVOT_INDEX,
        }
    }
}

fn map_cells(cells: &PieceCells, f: impl Fn(Block) -> Option<Block>) -> Option<PieceCells> {
    let mut out = *cells;
    for (dst, &src) in out.iter_mut().zip(cells) {
        *dst = f(src)?;
    }
    Some(out)
}
