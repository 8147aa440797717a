use thiserror::Error;

use crate::constants::{FIELD_COLUMN_COUNT, FIELD_ROW_COUNT, MAX_LEVEL};

/// Errors produced when loading a replay instruction stream. Gameplay
/// conditions (blocked moves, failed rotations, game over) are never
/// errors; only malformed replay data is.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to parse replay data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("instruction {index}: timestamp {timestamp} precedes {previous}")]
    OutOfOrder {
        index: usize,
        timestamp: f32,
        previous: f32,
    },

    #[error("instruction {index}: piece type {type_index} is out of range")]
    InvalidPieceType { index: usize, type_index: i32 },

    #[error("instruction {index}: rotation {rotation} is out of range")]
    InvalidRotation { index: usize, rotation: u8 },

    #[error("instruction {index}: piece instruction is missing position or rotation")]
    IncompletePiece { index: usize },

    #[error(
        "instruction {index}: cells payload has {len} cells, expected {}",
        FIELD_COLUMN_COUNT * FIELD_ROW_COUNT
    )]
    BadCellCount { index: usize, len: usize },

    #[error("instruction {index}: cell value out of range")]
    BadCellValue { index: usize },

    #[error("instruction {index}: level {level} is outside 1..={MAX_LEVEL}")]
    InvalidLevel { index: usize, level: u32 },

    #[error("instruction {index}: field instruction is missing score, lines or level")]
    IncompleteFieldState { index: usize },
}
