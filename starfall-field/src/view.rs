use serde::Serialize;

use crate::grid::Grid;
use crate::piece::Piece;

/// Score, level and line count snapshot for score-box rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreData {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

/// Read-only queries shared by the simulated and replayed fields. The
/// rendering collaborator draws from this interface alone and never
/// mutates field state.
pub trait FieldView {
    /// The locked cell grid, hidden rows included.
    fn grid(&self) -> &Grid;

    /// The piece currently falling, if any.
    fn active_piece(&self) -> Option<&Piece>;

    /// Preview of where the active piece would land on a hard drop.
    /// Present exactly when an active piece is present.
    fn ghost_piece(&self) -> Option<&Piece>;

    /// The pre-rolled piece that spawns after the active piece locks.
    fn next_piece(&self) -> Option<&Piece>;

    fn score_data(&self) -> ScoreData;

    fn is_game_over(&self) -> bool;

    /// Vertical offset (in cell-fraction units) of the game-over text
    /// bounce animation. Zero while the game is running.
    fn game_over_bounce(&self) -> f32 {
        0.0
    }
}
