use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_COLUMN_COUNT, PIECE_DATA};

/// The seven piece types, in shape-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Index into the shape table.
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Looks up a kind by shape-table index.
    pub fn from_index(index: usize) -> Option<PieceKind> {
        PieceKind::ALL.get(index).copied()
    }

    /// Uniform pick over the seven kinds. This is not the bag draw: it
    /// carries no once-per-seven guarantee.
    pub fn random<R: Rng>(rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())]
    }
}

/// A tetromino instance: fixed shape, mutable position and rotation.
///
/// `cell_x`/`cell_y` is the top-left origin of the piece's 4x4 bounding
/// box in grid coordinates. `cell_y` may address hidden rows while the
/// piece spawns. `rotation` is kept in `0..4` by all mutators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub cell_x: i32,
    pub cell_y: i32,
    pub rotation: u8,
}

impl Piece {
    /// Creates a piece at the spawn position (centered, top row, rotation 0).
    pub fn spawn(kind: PieceKind) -> Piece {
        Piece {
            kind,
            cell_x: FIELD_COLUMN_COUNT as i32 / 2 - 2,
            cell_y: 0,
            rotation: 0,
        }
    }

    /// Creates a piece of uniformly random kind at the spawn position.
    pub fn random<R: Rng>(rng: &mut R) -> Piece {
        Piece::spawn(PieceKind::random(rng))
    }

    /// The 4x4 occupancy mask of this piece at its current rotation.
    /// Non-zero entries are the cell color index.
    pub fn cells(&self) -> &'static [u8; 16] {
        Piece::mask(self.kind, self.rotation)
    }

    /// Shape-table lookup for an arbitrary kind and rotation. `rotation`
    /// must already be reduced modulo 4 by the caller.
    pub fn mask(kind: PieceKind, rotation: u8) -> &'static [u8; 16] {
        &PIECE_DATA[kind.index()][rotation as usize]
    }
}
