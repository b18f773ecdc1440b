//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Frame pacing for the cooperative loop (milliseconds, ~60 FPS)
pub const FRAME_MS: u64 = 16;

/// Gravity curve anchors (milliseconds between automatic drops)
pub const BASE_DROP_MS: u64 = 800;
pub const DROP_FLOOR_MS: u64 = 40;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

}

/// Opaque display color of an occupied cell (`"#rrggbb"`).
///
/// The engine never interprets this value; presentation decodes it.
pub type CellColor = &'static str;

/// Cell on the board (None = empty, Some = locked piece color)
pub type Cell = Option<CellColor>;

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    HardDrop,
    Pause,
    Restart,
}

/// Outcome of a lock transition (consumed once by observers).
///
/// Presence of the record means a piece locked; `lines_cleared` and
/// `game_over` let audio/presentation collaborators fire one-shot cues
/// without diffing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub game_over: bool,
}

/// Line clear scoring, indexed by simultaneously cleared rows (0..=4)
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];
