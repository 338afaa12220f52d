//! Engine error types.

use crate::types::ShapeKind;

/// Failures the engine reports to its driver.
///
/// Rejected moves and rotations are not errors; they return `false` and leave
/// the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A freshly spawned piece overlaps settled blocks.
    #[error("spawn blocked: {} piece overlaps the stack", .shape.as_str())]
    SpawnBlocked { shape: ShapeKind },
    /// The session has ended; no further input is accepted.
    #[error("game over")]
    GameOver,
}
