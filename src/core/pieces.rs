//! Pieces module - tetromino catalog and rotation transform
//!
//! Each tetromino is a square occupancy matrix (2x2 for O, 3x3 for T/S/Z/J/L,
//! 4x4 for I) plus a type tag and a fixed display color. Rotation is a pure
//! 90-degree clockwise transform of the matrix; there is no wall-kick offset
//! search, so callers validate the rotated piece and discard it wholesale if
//! it does not fit.

use crate::types::{CellColor, PieceKind};

/// Largest matrix side used by any piece (the I piece).
pub const MAX_SHAPE: usize = 4;

/// Square occupancy matrix of side `size` (2..=4).
///
/// Stored in a fixed 4x4 grid; cells outside `size` are always false, so
/// derived equality compares shapes correctly across sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE]; MAX_SHAPE],
}

impl Shape {
    const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        let mut cells = [[false; MAX_SHAPE]; MAX_SHAPE];
        let mut y = 0;
        while y < N {
            let mut x = 0;
            while x < N {
                cells[y][x] = rows[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Matrix side length
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether the matrix cell at (x, y) is occupied
    pub fn filled(&self, x: usize, y: usize) -> bool {
        self.cells[y][x]
    }

    /// Rotate 90 degrees clockwise: `dst[x][N-1-y] = src[y][x]`.
    pub fn rotated_cw(&self) -> Shape {
        let n = self.size as usize;
        let mut cells = [[false; MAX_SHAPE]; MAX_SHAPE];
        for y in 0..n {
            for x in 0..n {
                if self.cells[y][x] {
                    cells[x][n - 1 - y] = true;
                }
            }
        }
        Shape {
            size: self.size,
            cells,
        }
    }

    /// Iterate the occupied cells as (x, y) offsets from the matrix origin.
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| self.cells[y][x].then_some((x as i8, y as i8)))
        })
    }
}

/// A catalog tetromino: shape matrix, type tag, display color.
///
/// Immutable once defined; [`Tetromino::rotated_cw`] returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: CellColor,
}

const I: Tetromino = Tetromino {
    kind: PieceKind::I,
    color: "#00f0f0",
    shape: Shape::from_rows([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
};

const O: Tetromino = Tetromino {
    kind: PieceKind::O,
    color: "#f0f000",
    shape: Shape::from_rows([[1, 1], [1, 1]]),
};

const T: Tetromino = Tetromino {
    kind: PieceKind::T,
    color: "#a000f0",
    shape: Shape::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
};

const S: Tetromino = Tetromino {
    kind: PieceKind::S,
    color: "#00f000",
    shape: Shape::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
};

const Z: Tetromino = Tetromino {
    kind: PieceKind::Z,
    color: "#f00000",
    shape: Shape::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
};

const J: Tetromino = Tetromino {
    kind: PieceKind::J,
    color: "#0000f0",
    shape: Shape::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
};

const L: Tetromino = Tetromino {
    kind: PieceKind::L,
    color: "#f0a000",
    shape: Shape::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
};

impl Tetromino {
    /// Look up the catalog definition for a piece kind.
    pub fn of(kind: PieceKind) -> Tetromino {
        match kind {
            PieceKind::I => I,
            PieceKind::O => O,
            PieceKind::T => T,
            PieceKind::S => S,
            PieceKind::Z => Z,
            PieceKind::J => J,
            PieceKind::L => L,
        }
    }

    /// New tetromino rotated 90 degrees clockwise. Type and color preserved.
    pub fn rotated_cw(&self) -> Tetromino {
        Tetromino {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Spawn column: the matrix horizontally centered on the board.
    pub fn spawn_x(&self) -> i8 {
        (crate::types::BOARD_WIDTH / 2) as i8 - (self.shape.size() / 2) as i8
    }
}
