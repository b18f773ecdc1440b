//! RNG module - random piece selection
//!
//! Selection is uniform over the seven kinds with replacement: there is no
//! bag, so arbitrary consecutive repeats of the same piece are in-contract.
//! The source sits behind [`PieceSource`] so tests can inject scripted
//! sequences instead of the seeded generator.

use crate::core::pieces::Tetromino;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Source of upcoming tetrominoes for the state machine.
pub trait PieceSource {
    fn next_piece(&mut self) -> Tetromino;
}

/// Uniform draw from the full catalog, with replacement.
#[derive(Debug, Clone)]
pub struct UniformPieces {
    rng: SimpleRng,
}

impl UniformPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for UniformPieces {
    fn next_piece(&mut self) -> Tetromino {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        Tetromino::of(PieceKind::ALL[idx])
    }
}

impl Default for UniformPieces {
    fn default() -> Self {
        Self::new(1)
    }
}
