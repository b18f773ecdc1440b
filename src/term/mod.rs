//! Terminal presentation module.
//!
//! Consumes [`crate::core::GameSnapshot`] only; contains no engine logic.

pub mod screen;
pub mod view;

pub use screen::{Screen, TextStyle};
pub use view::GameView;
