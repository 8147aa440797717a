use serde::{Deserialize, Serialize};

use crate::constants::{FIELD_COLUMN_COUNT, FIELD_ROW_COUNT};
use crate::piece::Piece;

/// The field's cell grid: a flat `columns x rows` array of color indices,
/// indexed as `row * columns + col`. `0` is an empty cell, `1..=7` are
/// locked piece cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: Vec<u8>,
}

impl Grid {
    /// An empty grid at the standard field dimensions.
    pub fn new() -> Grid {
        Grid {
            cells: vec![0; FIELD_COLUMN_COUNT * FIELD_ROW_COUNT],
        }
    }

    /// Builds a grid from a flat cell array, rejecting wrong lengths and
    /// out-of-range color values.
    pub fn from_cells(cells: Vec<u8>) -> Option<Grid> {
        if cells.len() != FIELD_COLUMN_COUNT * FIELD_ROW_COUNT {
            return None;
        }
        if cells.iter().any(|&c| c > 7) {
            return None;
        }
        Some(Grid { cells })
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn cell(&self, col: usize, row: usize) -> u8 {
        self.cells[row * FIELD_COLUMN_COUNT + col]
    }

    pub fn clear_cell(&mut self, col: usize, row: usize) {
        self.cells[row * FIELD_COLUMN_COUNT + col] = 0;
    }

    /// Reports whether `piece`, displaced by the given column/row deltas
    /// and rotation delta, would overlap the field bounds or a non-empty
    /// cell. No displacement is committed by this test.
    pub fn collides(&self, piece: &Piece, d_col: i32, d_row: i32, d_rotation: u8) -> bool {
        let rotation = (piece.rotation + d_rotation) % 4;
        let mask = Piece::mask(piece.kind, rotation);

        for y in 0..4 {
            for x in 0..4 {
                if mask[y * 4 + x] == 0 {
                    continue;
                }
                let col = piece.cell_x + d_col + x as i32;
                let row = piece.cell_y + d_row + y as i32;
                if col < 0
                    || col >= FIELD_COLUMN_COUNT as i32
                    || row < 0
                    || row >= FIELD_ROW_COUNT as i32
                {
                    return true;
                }
                if self.cells[row as usize * FIELD_COLUMN_COUNT + col as usize] != 0 {
                    return true;
                }
            }
        }
        false
    }

    /// Locks a piece into the grid: every non-zero mask cell is written at
    /// its absolute position, keeping its color value. The caller must have
    /// verified the piece is in bounds via `collides`.
    pub fn merge(&mut self, piece: &Piece) {
        let mask = piece.cells();
        for y in 0..4 {
            for x in 0..4 {
                let cell = mask[y * 4 + x];
                if cell != 0 {
                    let col = (piece.cell_x + x as i32) as usize;
                    let row = (piece.cell_y + y as i32) as usize;
                    self.cells[row * FIELD_COLUMN_COUNT + col] = cell;
                }
            }
        }
    }

    /// True when every cell of `row` is occupied.
    pub fn row_full(&self, row: usize) -> bool {
        let start = row * FIELD_COLUMN_COUNT;
        self.cells[start..start + FIELD_COLUMN_COUNT]
            .iter()
            .all(|&c| c != 0)
    }

    /// Removes `row` by shifting every row above it down one, leaving the
    /// top row empty.
    pub fn collapse_row(&mut self, row: usize) {
        for r in (1..=row).rev() {
            let src = (r - 1) * FIELD_COLUMN_COUNT;
            let dst = r * FIELD_COLUMN_COUNT;
            self.cells.copy_within(src..src + FIELD_COLUMN_COUNT, dst);
        }
        self.cells[..FIELD_COLUMN_COUNT].fill(0);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}
