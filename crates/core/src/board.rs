//! Board module - manages the occupancy grid
//!
//! The board is a 20x10 grid where each cell is either empty or filled by a
//! block that settled there. Uses a flat array for cache locality and no
//! allocation. Coordinates: (row, col) where row ranges 0..19 (top to bottom)
//! and col ranges 0..9 (left to right).

use crate::pieces::Piece;
use crate::types::{Block, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_ROWS as usize) * (BOARD_COLS as usize);

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if !Block::new(row, col).in_bounds() {
            return None;
        }
        Some((row as usize) * (BOARD_COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn cols(&self) -> u8 {
        BOARD_COLS
    }

    /// Check if (row, col) is filled.
    ///
    /// Out-of-bounds coordinates count as occupied so that a caller which
    /// forgets its bounds check still cannot place anything there.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        match Self::index(row, col) {
            Some(idx) => self.cells[idx],
            None => true,
        }
    }

    /// Check if a block can hold a piece cell (in bounds and empty)
    pub fn is_free(&self, block: Block) -> bool {
        matches!(Self::index(block.row, block.col), Some(idx) if !self.cells[idx])
    }

    /// Check if every block is free
    pub fn fits(&self, blocks: &[Block]) -> bool {
        blocks.iter().all(|&b| self.is_free(b))
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, filled: bool) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Fill a whole row (columns listed in `skip` stay empty).
    pub fn fill_row(&mut self, row: usize, skip: &[i8]) {
        if row >= BOARD_ROWS as usize {
            return;
        }
        for col in 0..BOARD_COLS as i8 {
            self.set(row as i8, col, !skip.contains(&col));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_ROWS as usize {
            return false;
        }
        let start = row * BOARD_COLS as usize;
        let end = start + BOARD_COLS as usize;
        self.cells[start..end].iter().all(|&filled| filled)
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&filled| filled).count()
    }

    /// Clear a row and shift all rows above it down by one.
    /// Row 0 becomes empty.
    pub fn clear_row(&mut self, row: usize) {
        if row >= BOARD_ROWS as usize {
            return;
        }

        let width = BOARD_COLS as usize;

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, r * width);
        }

        self.cells[..width].fill(false);
    }

    /// Clear full rows in a single top-to-bottom sweep.
    ///
    /// Each row index is visited once, in ascending order, and its fullness is
    /// judged against the grid as it stands at that moment (earlier clears in
    /// the same sweep have already shifted the rows above it). Returns the
    /// number of rows cleared.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        for row in 0..BOARD_ROWS as usize {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            }
        }
        cleared
    }

    /// Merge a piece's cells into the grid.
    /// Returns false (and leaves the board untouched) if any cell is out of
    /// bounds or already occupied.
    pub fn lock_piece(&mut self, piece: &Piece) -> bool {
        if !self.fits(piece.cells()) {
            return false;
        }

        for b in piece.cells() {
            self.set(b.row, b.col, true);
        }

        true
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Write the grid as rows of booleans
    pub fn write_grid(&self, out: &mut [[bool; BOARD_COLS as usize]; BOARD_ROWS as usize]) {
        for (row, chunk) in out.iter_mut().zip(self.cells.chunks_exact(BOARD_COLS as usize)) {
            row.copy_from_slice(chunk);
        }
    }

    /// Build a board from a text picture, one line per row from the bottom up.
    ///
    /// `#` marks a filled cell, anything else is empty. Rows not covered by
    /// the picture stay empty.
    ///
    /// ```
    /// use blockfall_core::Board;
    ///
    /// let board = Board::from_rows_bottom_up(&["#########."]);
    /// assert!(board.is_occupied(19, 0));
    /// assert!(!board.is_occupied(19, 9));
    /// ```
    pub fn from_rows_bottom_up(rows: &[&str]) -> Self {
        let mut board = Self::new();
        for (i, line) in rows.iter().enumerate().take(BOARD_ROWS as usize) {
            let row = BOARD_ROWS as i8 - 1 - i as i8;
            for (col, ch) in line.chars().enumerate().take(BOARD_COLS as usize) {
                board.set(row, col as i8, ch == '#');
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
