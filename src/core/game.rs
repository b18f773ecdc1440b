//! Game module - the timed state machine
//!
//! Ties together the board, piece catalog, rotation, scoring, and the random
//! piece source. One `Game` value is the single owner of all game state;
//! every action and the automatic gravity tick apply synchronously and leave
//! the state in its unique successor, so a game can be replayed exactly from
//! a seed plus an action/timestamp log.
//!
//! Invalid requests (moving with no active piece, rotating into a collision,
//! acting while paused or after game over) are no-ops, never errors.

use crate::core::board::Board;
use crate::core::pieces::Tetromino;
use crate::core::rng::{PieceSource, UniformPieces};
use crate::core::scoring;
use crate::core::snapshot::GameSnapshot;
use crate::types::{GameAction, LockEvent};

/// A tetromino anchored on the board.
///
/// (x, y) locate the shape matrix's top-left corner; y may be negative while
/// part of the matrix sits above the visible board. Validity is judged from
/// occupied cells only, never the full bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamePiece {
    pub tetromino: Tetromino,
    pub x: i8,
    pub y: i8,
}

impl GamePiece {
    /// Anchor a tetromino at its spawn position (centered, row 0).
    pub fn spawn(tetromino: Tetromino) -> Self {
        Self {
            tetromino,
            x: tetromino.spawn_x(),
            y: 0,
        }
    }

    /// Absolute board coordinates of the piece's occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.tetromino
            .shape
            .offsets()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// The piece shifted by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The piece rotated 90 degrees clockwise in place
    pub fn rotated_cw(&self) -> Self {
        Self {
            tetromino: self.tetromino.rotated_cw(),
            ..*self
        }
    }

    /// Whether every occupied cell is admitted by the board
    pub fn fits(&self, board: &Board) -> bool {
        self.cells().all(|(x, y)| board.admits(x, y))
    }
}

/// Wall-clock reference for automatic gravity.
///
/// An explicit field of the state machine, never a module-level global: it is
/// cleared on lock, resume, and restart, and re-armed from the next tick's
/// timestamp, so a pause can never produce a catch-up drop and tests can
/// drive it with synthetic timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DropClock {
    last_drop_ms: Option<u64>,
}

impl DropClock {
    /// Whether a drop is due at `now_ms`. Arms itself on first use after a
    /// reset without firing.
    fn due(&mut self, now_ms: u64, interval_ms: u64) -> bool {
        match self.last_drop_ms {
            Some(last) => now_ms.saturating_sub(last) > interval_ms,
            None => {
                self.last_drop_ms = Some(now_ms);
                false
            }
        }
    }

    fn mark(&mut self, now_ms: u64) {
        self.last_drop_ms = Some(now_ms);
    }

    fn clear(&mut self) {
        self.last_drop_ms = None;
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<S = UniformPieces> {
    board: Board,
    current: Option<GamePiece>,
    next: Option<Tetromino>,
    score: u32,
    level: u32,
    lines: u32,
    paused: bool,
    game_over: bool,
    drop_clock: DropClock,
    /// Last lock outcome (consumed by observers).
    last_event: Option<LockEvent>,
    pieces: S,
}

impl Game<UniformPieces> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(UniformPieces::new(seed))
    }
}

impl<S: PieceSource> Game<S> {
    /// Create a new game drawing pieces from `pieces`
    pub fn with_source(pieces: S) -> Self {
        let mut game = Self {
            board: Board::new(),
            current: None,
            next: None,
            score: 0,
            level: 0,
            lines: 0,
            paused: false,
            game_over: false,
            drop_clock: DropClock::default(),
            last_event: None,
            pieces,
        };
        game.restart();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<GamePiece> {
        self.current
    }

    pub fn next_piece(&self) -> Option<Tetromino> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Read-only snapshot for presentation/audio collaborators
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.grid(),
            current: self.current,
            next: self.next,
            score: self.score,
            level: self.level,
            lines: self.lines,
            paused: self.paused,
            game_over: self.game_over,
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Whether actions on the current piece are allowed right now
    fn playable(&self) -> bool {
        self.current.is_some() && !self.paused && !self.game_over
    }

    /// Fresh state: empty board, zeroed counters, first piece spawned and a
    /// second drawn as preview. Valid from any state, including game over.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.paused = false;
        self.game_over = false;
        self.current = Some(GamePiece::spawn(self.pieces.next_piece()));
        self.next = Some(self.pieces.next_piece());
        self.drop_clock.clear();
        self.last_event = None;
    }

    /// Try to shift the current piece; reject silently on collision.
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(piece) = self.current else {
            return false;
        };

        let moved = piece.translated(dx, dy);
        if moved.fits(&self.board) {
            self.current = Some(moved);
            return true;
        }
        false
    }

    pub fn move_left(&mut self) {
        self.try_shift(-1, 0);
    }

    pub fn move_right(&mut self) {
        self.try_shift(1, 0);
    }

    /// Manual single-row drop. Unlike the gravity tick this never locks: a
    /// rejected move is simply a no-op.
    pub fn move_down(&mut self) {
        self.try_shift(0, 1);
    }

    /// Rotate clockwise; an invalid rotation is discarded wholesale (no
    /// wall-kick offset search).
    pub fn rotate(&mut self) {
        if !self.playable() {
            return;
        }
        let Some(piece) = self.current else {
            return;
        };

        let turned = piece.rotated_cw();
        if turned.fits(&self.board) {
            self.current = Some(turned);
        }
    }

    /// Drop the current piece to its lowest valid row and lock it, all in one
    /// transition.
    pub fn hard_drop(&mut self) {
        if !self.playable() {
            return;
        }
        let Some(mut piece) = self.current else {
            return;
        };

        while piece.translated(0, 1).fits(&self.board) {
            piece = piece.translated(0, 1);
        }
        self.current = Some(piece);
        self.lock_current();
    }

    /// Toggle pause. A no-op once the game is over. Resuming clears the
    /// gravity reference so time spent paused never converts into drops.
    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
        if !self.paused {
            self.drop_clock.clear();
        }
    }

    /// Automatic gravity tick, fired once per frame with a monotonic
    /// millisecond timestamp. Drops the piece one row when the level's drop
    /// interval has elapsed; locks it when it can no longer fall.
    pub fn tick(&mut self, now_ms: u64) {
        if self.paused || self.game_over {
            return;
        }
        let Some(piece) = self.current else {
            return;
        };

        let interval = scoring::drop_interval_ms(self.level);
        if !self.drop_clock.due(now_ms, interval) {
            return;
        }

        let dropped = piece.translated(0, 1);
        if dropped.fits(&self.board) {
            self.current = Some(dropped);
            self.drop_clock.mark(now_ms);
        } else {
            self.lock_current();
        }
    }

    /// Lock sequence: merge the piece, compact full rows, account score and
    /// lines (score uses the pre-clear level), recompute the level, promote
    /// the preview piece, and detect game over at the spawn check.
    fn lock_current(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        let merged = self.board.place(piece.cells(), piece.tetromino.color);
        let (board, cleared_rows) = merged.clear_lines();
        self.board = board;

        let cleared = cleared_rows.len() as u32;
        self.score += scoring::line_clear_score(cleared as usize, self.level);
        self.lines += cleared;
        self.level = scoring::level_for_lines(self.lines);

        let spawned = self.next.map(GamePiece::spawn);
        let blocked = match &spawned {
            Some(piece) => !piece.fits(&self.board),
            None => true,
        };

        if blocked {
            self.game_over = true;
            self.current = None;
            self.next = None;
        } else {
            self.current = spawned;
            self.next = Some(self.pieces.next_piece());
        }

        self.drop_clock.clear();
        self.last_event = Some(LockEvent {
            lines_cleared: cleared,
            game_over: blocked,
        });
    }

    /// Apply a game action
    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
        }
    }
}

impl Default for Game<UniformPieces> {
    fn default() -> Self {
        Self::new(1)
    }
}
