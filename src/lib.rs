//! Blockfall: a terminal falling-block puzzle.
//!
//! The [`core`] module is the deterministic engine - board, piece catalog,
//! rotation, scoring, and the timed state machine. [`input`] and [`term`] are
//! thin collaborators that map key events to engine actions and render the
//! engine's read-only snapshot; neither contains game logic.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
