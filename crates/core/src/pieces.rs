//! Pieces module - the static piece catalog and the falling piece
//!
//! Every piece is four blocks given as (dx, dy) offsets from a pivot. Index 0
//! is always the pivot itself and doubles as the rotation center. Offsets use
//! the board's y-up frame.

use crate::board::Board;
use crate::types::{Coord, PieceColor, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

/// Offset of a single block relative to the pivot
pub type BlockOffset = (i8, i8);

/// Shape of a piece - 4 block offsets, pivot first
pub type PieceShape = [BlockOffset; 4];

/// Get the spawn shape for a piece kind
pub fn get_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(0, 0), (-1, 0), (1, 0), (2, 0)],
        PieceKind::J => [(0, 0), (-1, 0), (1, 0), (1, -1)],
        PieceKind::L => [(0, 0), (-1, 0), (-1, -1), (1, 0)],
        PieceKind::O => [(0, 0), (1, 0), (0, -1), (1, -1)],
        PieceKind::S => [(0, 0), (1, 0), (0, -1), (-1, -1)],
        PieceKind::T => [(0, 0), (-1, 0), (1, 0), (0, -1)],
        PieceKind::Z => [(0, 0), (-1, 0), (0, -1), (1, -1)],
    }
}

/// Absolute block coordinates for `kind` with its pivot at `(x, y)`
pub fn blocks_at(kind: PieceKind, x: i8, y: i8) -> [Coord; 4] {
    get_shape(kind).map(|(dx, dy)| (x + dx, y + dy))
}

/// Block coordinates of `kind` at the spawn anchor
pub fn spawn_blocks(kind: PieceKind) -> [Coord; 4] {
    blocks_at(kind, SPAWN_X, SPAWN_Y)
}

/// Rotate blocks 90° around block 0: offset (dx, dy) becomes (-dy, dx)
pub fn rotated_blocks(blocks: &[Coord; 4]) -> [Coord; 4] {
    let (cx, cy) = blocks[0];
    blocks.map(|(x, y)| {
        let (dx, dy) = (x - cx, y - cy);
        (cx - dy, cy + dx)
    })
}

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Absolute coordinates, pivot first
    pub blocks: [Coord; 4],
}

impl ActivePiece {
    /// Create a piece at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            blocks: spawn_blocks(kind),
        }
    }

    pub fn pivot(&self) -> Coord {
        self.blocks[0]
    }

    pub fn color(&self) -> PieceColor {
        self.kind.color()
    }

    /// Blocks shifted by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> [Coord; 4] {
        self.blocks.map(|(x, y)| (x + dx, y + dy))
    }

    /// Can the piece be translated by (dx, dy)?
    ///
    /// Translations stay within the columns and above the floor. There is no
    /// ceiling check: pieces never move up.
    pub fn can_translate(&self, board: &Board, dx: i8, dy: i8) -> bool {
        self.translated(dx, dy).iter().all(|&(x, y)| {
            x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && !board.is_blocked(x, y, &self.blocks)
        })
    }

    /// Rotation target, if every rotated block is on the board and free.
    ///
    /// Rotation may reach the overflow rows but never beyond them.
    pub fn rotation_target(&self, board: &Board) -> Option<[Coord; 4]> {
        let target = rotated_blocks(&self.blocks);
        let fits = target.iter().all(|&(x, y)| {
            x >= 0
                && x < BOARD_WIDTH as i8
                && y >= 0
                && y < BOARD_HEIGHT as i8
                && !board.is_blocked(x, y, &self.blocks)
        });
        fits.then_some(target)
    }

    /// Rows the piece can still descend before landing
    pub fn drop_distance(&self, board: &Board) -> i8 {
        let mut distance = 0;
        while self.can_translate(board, 0, -(distance + 1)) {
            distance += 1;
        }
        distance
    }
}
