//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] 1:1. All
//! action guard logic lives in the engine.

pub mod map;

pub use map::{action_for_key, should_quit};
