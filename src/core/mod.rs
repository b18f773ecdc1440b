//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O, so the whole engine can be driven
//! deterministically from tests with a scripted piece source and synthetic
//! timestamps.
//!
//! - [`board`]: 10x20 grid with pure collision, merge, and line compaction
//! - [`pieces`]: tetromino catalog and the clockwise rotation transform
//! - [`rng`]: uniform random piece selection behind the [`rng::PieceSource`] seam
//! - [`scoring`]: line-clear points, level curve, and gravity intervals
//! - [`game`]: the timed state machine tying the pieces together

pub mod board;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use board::Board;
pub use game::{Game, GamePiece};
pub use pieces::{Shape, Tetromino};
pub use rng::{PieceSource, SimpleRng, UniformPieces};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_score};
pub use snapshot::GameSnapshot;
