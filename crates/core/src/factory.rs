//! Piece factory - uniform random shape selection
//!
//! Every spawn picks one of the seven catalog shapes with equal probability
//! and places it at that shape's fixed spawn layout. Only the choice of
//! shape is random.
//!
//! The factory is generic over the RNG so sessions and tests can be made
//! reproducible with a seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pieces::Piece;
use crate::types::ShapeKind;

/// Uniform random piece generator
#[derive(Debug, Clone)]
pub struct PieceFactory<R = StdRng> {
    rng: R,
}

impl PieceFactory<StdRng> {
    /// Create a factory with a deterministic seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create a factory seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> PieceFactory<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draw the next shape from the catalog
    pub fn next_shape(&mut self) -> ShapeKind {
        let index = self.rng.gen_range(0..ShapeKind::ALL.len());
        ShapeKind::ALL[index]
    }

    /// Produce a new piece at its spawn position
    pub fn spawn(&mut self) -> Piece {
        Piece::spawn(self.next_shape())
    }
}

impl Default for PieceFactory<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}
