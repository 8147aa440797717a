//! Time-driven replay playback.
//!
//! A recorded session is an ordered stream of timestamped instructions:
//! piece-state snapshots and whole-field snapshots. Playback paints the
//! field directly from the stream; none of the simulation physics run, so
//! fidelity depends entirely on the granularity of the recording.

use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_COLUMN_COUNT, FIELD_ROW_COUNT, MAX_LEVEL};
use crate::error::ReplayError;
use crate::grid::Grid;
use crate::piece::{Piece, PieceKind};
use crate::view::{FieldView, ScoreData};

/// One replay instruction. A piece snapshot carries `type_index` (with
/// `-1` meaning "no active piece") plus position and rotation; a field
/// snapshot carries `cells` plus score, lines and level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayInstruction {
    pub timestamp: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

/// Parses a JSON instruction array and validates it for playback.
pub fn parse_instructions(json: &str) -> Result<Vec<ReplayInstruction>, ReplayError> {
    let instructions: Vec<ReplayInstruction> = serde_json::from_str(json)?;
    validate_instructions(&instructions)?;
    Ok(instructions)
}

/// Checks the stream invariants: non-decreasing timestamps, piece indices
/// in `-1..=6` with complete position data, rotations in `0..=3`, and
/// field snapshots with a full-size cell payload and complete score data.
pub fn validate_instructions(instructions: &[ReplayInstruction]) -> Result<(), ReplayError> {
    let mut previous = f32::NEG_INFINITY;
    for (index, instruction) in instructions.iter().enumerate() {
        if instruction.timestamp < previous {
            return Err(ReplayError::OutOfOrder {
                index,
                timestamp: instruction.timestamp,
                previous,
            });
        }
        previous = instruction.timestamp;

        if let Some(type_index) = instruction.type_index {
            if !(-1..=6).contains(&type_index) {
                return Err(ReplayError::InvalidPieceType { index, type_index });
            }
            if type_index >= 0 {
                let (Some(_), Some(_), Some(rotation)) =
                    (instruction.x, instruction.y, instruction.rotation)
                else {
                    return Err(ReplayError::IncompletePiece { index });
                };
                if rotation > 3 {
                    return Err(ReplayError::InvalidRotation { index, rotation });
                }
            }
        } else if let Some(cells) = &instruction.cells {
            if cells.len() != FIELD_COLUMN_COUNT * FIELD_ROW_COUNT {
                return Err(ReplayError::BadCellCount {
                    index,
                    len: cells.len(),
                });
            }
            if cells.iter().any(|&c| c > 7) {
                return Err(ReplayError::BadCellValue { index });
            }
            let (Some(_), Some(_), Some(level)) =
                (instruction.score, instruction.lines, instruction.level)
            else {
                return Err(ReplayError::IncompleteFieldState { index });
            };
            if !(1..=MAX_LEVEL).contains(&level) {
                return Err(ReplayError::InvalidLevel { index, level });
            }
        }
    }
    Ok(())
}

enum PlaybackState {
    /// Waiting for the replay fetch to deliver data.
    Loading,
    Playing,
    Failed(ReplayError),
}

/// A playfield painted purely from a replay stream. Exposes the same
/// read-only view as [`crate::field::SimulatedField`] but accepts no
/// commands and runs no physics; recorded state is applied as-is,
/// bypassing collision checks.
pub struct ReplayedField {
    grid: Grid,
    active: Option<Piece>,
    ghost: Option<Piece>,
    score: u32,
    level: u32,
    lines: u32,
    instructions: Vec<ReplayInstruction>,
    elapsed: f32,
    index: usize,
    state: PlaybackState,
}

impl ReplayedField {
    /// A field waiting for replay data; `update` is a no-op until data is
    /// loaded.
    pub fn new() -> ReplayedField {
        ReplayedField {
            grid: Grid::new(),
            active: None,
            ghost: None,
            score: 0,
            level: 1,
            lines: 0,
            instructions: Vec::new(),
            elapsed: 0.0,
            index: 0,
            state: PlaybackState::Loading,
        }
    }

    /// Loads replay data from a JSON instruction array. On failure the
    /// field enters the failed state instead of silently stalling.
    pub fn load(&mut self, json: &str) {
        match parse_instructions(json) {
            Ok(instructions) => self.load_instructions(instructions),
            Err(error) => {
                tracing::warn!(%error, "replay data rejected");
                self.state = PlaybackState::Failed(error);
            }
        }
    }

    /// Loads already-parsed instructions, validating them first.
    pub fn load_instructions(&mut self, instructions: Vec<ReplayInstruction>) {
        if let Err(error) = validate_instructions(&instructions) {
            tracing::warn!(%error, "replay data rejected");
            self.state = PlaybackState::Failed(error);
            return;
        }
        tracing::debug!(count = instructions.len(), "replay loaded");
        self.instructions = instructions;
        self.elapsed = 0.0;
        self.index = 0;
        self.state = PlaybackState::Playing;
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, PlaybackState::Loading)
    }

    /// The error that rejected the replay data, if loading failed.
    pub fn load_error(&self) -> Option<&ReplayError> {
        match &self.state {
            PlaybackState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// True once every instruction has been applied.
    pub fn finished(&self) -> bool {
        matches!(self.state, PlaybackState::Playing) && self.index >= self.instructions.len()
    }

    /// Advances playback time and applies every instruction whose
    /// timestamp has been reached, preserving the rest for later ticks.
    pub fn update(&mut self, step: f32) {
        if !matches!(self.state, PlaybackState::Playing) || self.index >= self.instructions.len() {
            return;
        }
        self.elapsed += step;
        while self.index < self.instructions.len() {
            let instruction = self.instructions[self.index].clone();
            if instruction.timestamp > self.elapsed {
                break;
            }
            self.apply(&instruction);
            self.index += 1;
        }
    }

    fn apply(&mut self, instruction: &ReplayInstruction) {
        if let Some(type_index) = instruction.type_index {
            if type_index < 0 {
                self.active = None;
                self.ghost = None;
                return;
            }
            let Some(kind) = PieceKind::from_index(type_index as usize) else {
                return; // rejected at load
            };
            self.active = Some(Piece {
                kind,
                cell_x: instruction.x.unwrap_or(0),
                cell_y: instruction.y.unwrap_or(0),
                rotation: instruction.rotation.unwrap_or(0) % 4,
            });
            self.update_ghost();
        } else if let Some(cells) = &instruction.cells {
            if let Some(grid) = Grid::from_cells(cells.clone()) {
                self.grid = grid;
            }
            self.score = instruction.score.unwrap_or(self.score);
            self.lines = instruction.lines.unwrap_or(self.lines);
            self.level = instruction.level.unwrap_or(self.level);
            // The ghost is only recomputed on piece instructions; a field
            // snapshot leaves it where the last piece instruction put it.
        }
    }

    fn update_ghost(&mut self) {
        let grid = &self.grid;
        self.ghost = self.active.map(|mut ghost| {
            while !grid.collides(&ghost, 0, 1, 0) {
                ghost.cell_y += 1;
            }
            ghost
        });
    }
}

impl Default for ReplayedField {
    fn default() -> Self {
        ReplayedField::new()
    }
}

impl FieldView for ReplayedField {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn active_piece(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    fn ghost_piece(&self) -> Option<&Piece> {
        self.ghost.as_ref()
    }

    fn next_piece(&self) -> Option<&Piece> {
        None
    }

    fn score_data(&self) -> ScoreData {
        ScoreData {
            score: self.score,
            level: self.level,
            lines: self.lines,
        }
    }

    fn is_game_over(&self) -> bool {
        false
    }
}
