//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules: the occupancy grid, piece
//! movement and rotation, line clears and scoring. It has **no dependencies**
//! on terminals, timers or files, making it:
//!
//! - **Deterministic**: a seeded [`PieceFactory`] replays the same session
//! - **Testable**: every rule is exercised by unit and property tests
//! - **Portable**: any driver that can call `tick` and `apply_command` can run it
//!
//! # Module Structure
//!
//! - [`board`]: 20x10 occupancy grid with bounds checks and line clearing
//! - [`pieces`]: the active piece, translation and pivot rotation
//! - [`factory`]: uniform random shape selection
//! - [`engine`]: the orchestrator owning board, piece and score
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Game Rules
//!
//! - **Gravity**: each `tick` moves the piece down a row; a piece that cannot
//!   fall locks immediately (no lock delay)
//! - **Rotation**: 90° around the piece's second block, rejected outright when
//!   blocked (no wall kicks); the square never rotates
//! - **Scoring**: 100 points per cleared row
//! - **Game over**: the next piece spawns on occupied cells
//!
//! # Example
//!
//! ```
//! use blockfall_core::Engine;
//! use blockfall_core::types::Command;
//!
//! let mut engine = Engine::seeded(12345);
//!
//! engine.apply_command(Command::Left);
//! engine.apply_command(Command::Rotate);
//!
//! // Gravity until the first piece locks.
//! let outcome = loop {
//!     let outcome = engine.tick();
//!     if outcome.locked {
//!         break outcome;
//!     }
//! };
//! assert!(outcome.spawned);
//! assert_eq!(engine.snapshot().occupied_count(), 4);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod factory;
pub mod pieces;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{Engine, TickOutcome};
pub use error::EngineError;
pub use factory::PieceFactory;
pub use pieces::{Piece, PieceCells};
pub use snapshot::{ActiveSnapshot, Grid, Snapshot};
