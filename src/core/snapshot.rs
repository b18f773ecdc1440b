//! Read-only state snapshot for presentation and audio collaborators.

use crate::core::game::GamePiece;
use crate::core::pieces::Tetromino;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Owned copy of everything a collaborator may render or react to.
///
/// Collaborators consume this instead of reaching into the state machine, so
/// they can never mutate engine state or observe a half-applied transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub current: Option<GamePiece>,
    pub next: Option<Tetromino>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::Game;

    #[test]
    fn snapshot_mirrors_game_state() {
        let mut game = Game::new(12345);
        game.toggle_pause();

        let snap = game.snapshot();
        assert!(snap.paused);
        assert!(!snap.game_over);
        assert!(!snap.playable());
        assert_eq!(snap.current, game.current());
        assert_eq!(snap.next, game.next_piece());
        assert_eq!(snap.score, game.score());
        assert_eq!(snap.board, game.board().grid());
    }
}
