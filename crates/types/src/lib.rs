//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behaviour beyond small conversions, so they
//! can be used from the engine, the terminal frontend and tests alike.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn area**: rows 0-3, columns 3-5
//!
//! Coordinates are always `(row, col)`.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 200 | Gravity interval used by the driver |
//! | `FRAME_MS` | 16 | Input poll / redraw interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Block, Command, ShapeKind, BOARD_COLS, BOARD_ROWS};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! let b = Block::new(2, 5).offset(1, -1);
//! assert_eq!(b, Some(Block::new(3, 4)));
//!
//! assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
//! assert_eq!((BOARD_ROWS, BOARD_COLS), (20, 10));
//! ```

use serde::{Deserialize, Serialize};

/// Board height in cells (20 rows)
pub const BOARD_ROWS: u8 = 20;

/// Board width in cells (10 columns)
pub const BOARD_COLS: u8 = 10;

/// Points awarded per cleared row
pub const SCORE_PER_ROW: u32 = 100;

/// Index of the rotation pivot inside every piece's cell list
pub const PIVOT_INDEX: usize = 1;

/// Gravity interval in milliseconds
pub const DEFAULT_TICK_MS: u32 = 200;

/// Frame interval in milliseconds (input poll + redraw, ~60 FPS)
pub const FRAME_MS: u32 = 16;

/// A single grid coordinate.
///
/// Rows grow downward, columns grow to the right. Values are signed so that
/// candidate positions produced by moves and rotations can fall outside the
/// board and be rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub row: i8,
    pub col: i8,
}

impl Block {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Translate by `(delta_row, delta_col)`.
    /// Returns `None` if either coordinate leaves the `i8` range.
    pub const fn offset(self, delta_row: i8, delta_col: i8) -> Option<Self> {
        match (self.row.checked_add(delta_row), self.col.checked_add(delta_col)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// Rotate this block 90° around `pivot`.
    ///
    /// `new_row = pivot.row - (col - pivot.col)`, `new_col = pivot.col + (row - pivot.row)`.
    /// The pivot itself maps to itself. Returns `None` on `i8` overflow.
    ///
    /// ```
    /// use blockfall_types::Block;
    ///
    /// let pivot = Block::new(1, 4);
    /// assert_eq!(Block::new(0, 4).rotated_about(pivot), Some(Block::new(1, 3)));
    /// assert_eq!(pivot.rotated_about(pivot), Some(pivot));
    /// ```
    pub const fn rotated_about(self, pivot: Block) -> Option<Self> {
        let (Some(dc), Some(dr)) = (self.col.checked_sub(pivot.col), self.row.checked_sub(pivot.row))
        else {
            return None;
        };
        match (pivot.row.checked_sub(dc), pivot.col.checked_add(dr)) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }

    /// Check if the block lies within `[0, BOARD_ROWS) x [0, BOARD_COLS)`
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_ROWS as i8 && self.col >= 0 && self.col < BOARD_COLS as i8
    }
}

/// The seven piece shapes
///
/// - **L**: vertical bar with a foot to the right
/// - **O**: 2x2 square
/// - **I**: vertical bar of four
/// - **Z**: Z-shaped, stood upright
/// - **S**: S-shaped (mirror of Z)
/// - **T**: T-shaped, nose to the right
/// - **J**: vertical bar with a foot to the left (mirror of L)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    L,
    O,
    I,
    Z,
    S,
    T,
    J,
}

impl ShapeKind {
    /// The shape catalog, in catalog-index order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::I,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::J,
    ];

    /// Look up a shape by catalog index.
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_index(1), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Spawn cells for this shape, pivot at [`PIVOT_INDEX`].
    pub const fn template(self) -> [Block; 4] {
        SPAWN_TEMPLATES[self as usize]
    }

    /// Parse shape kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "l" => Some(ShapeKind::L),
            "o" => Some(ShapeKind::O),
            "i" => Some(ShapeKind::I),
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::L => "l",
            ShapeKind::O => "o",
            ShapeKind::I => "i",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::J => "j",
        }
    }
}

/// Spawn layout of every shape, indexed by catalog order (see [`ShapeKind::ALL`]).
pub const SPAWN_TEMPLATES: [[Block; 4]; 7] = [
    // L
    [Block::new(0, 4), Block::new(1, 4), Block::new(2, 4), Block::new(2, 5)],
    // O
    [Block::new(0, 4), Block::new(0, 5), Block::new(1, 4), Block::new(1, 5)],
    // I
    [Block::new(0, 4), Block::new(1, 4), Block::new(2, 4), Block::new(3, 4)],
    // Z
    [Block::new(0, 4), Block::new(1, 4), Block::new(1, 5), Block::new(2, 5)],
    // S
    [Block::new(0, 5), Block::new(1, 5), Block::new(1, 4), Block::new(2, 4)],
    // T
    [Block::new(0, 4), Block::new(1, 4), Block::new(1, 5), Block::new(2, 4)],
    // J
    [Block::new(0, 4), Block::new(1, 4), Block::new(2, 4), Block::new(2, 3)],
];

/// Commands an input source can issue to the engine
///
/// Pausing is not a command: the driver pauses by withholding ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move piece one cell left
    Left,
    /// Move piece one cell right
    Right,
    /// Nudge piece one cell down (never locks)
    Down,
    /// Rotate piece 90° around its pivot
    Rotate,
}

impl Command {
    /// Row/column delta for the translating commands.
    pub fn delta(&self) -> Option<(i8, i8)> {
        match self {
            Command::Left => Some((0, -1)),
            Command::Right => Some((0, 1)),
            Command::Down => Some((1, 0)),
            Command::Rotate => None,
        }
    }

    /// Parse command from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Command::Left),
            "right" => Some(Command::Right),
            "down" => Some(Command::Down),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Down => "down",
            Command::Rotate => "rotate",
        }
    }
}
