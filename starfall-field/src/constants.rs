//! Fixed gameplay data: grid dimensions, timing, scoring, piece shapes
//! and wall-kick tables.

/// Length of one fixed simulation step (seconds). The host accumulates
/// wall-clock time and calls `update` once per elapsed step.
pub const TIME_STEP: f32 = 1.0 / 60.0;

/// Number of cell columns in the game field.
pub const FIELD_COLUMN_COUNT: usize = 10;

/// Number of cell rows in the game field, including hidden rows.
pub const FIELD_ROW_COUNT: usize = 22;

/// Rows at the top of the field which are simulated but not rendered.
/// Pieces spawn in and move through them.
pub const FIELD_HIDDEN_ROW_COUNT: usize = 2;

/// Duration of the row clearing animation (seconds).
pub const FIELD_ROW_CLEAR_TIME: f32 = 0.4;

/// Grace period before a resting piece is merged into the field (seconds).
pub const LOCK_DELAY: f32 = 0.5;

/// Score multiplied by level when the player clears 1 line.
pub const SCORE_SINGLE_LINES: u32 = 100;

/// Score multiplied by level when the player clears 2 lines.
pub const SCORE_DOUBLE_LINES: u32 = 300;

/// Score multiplied by level when the player clears 3 lines.
pub const SCORE_TRIPLE_LINES: u32 = 500;

/// Score multiplied by level when the player clears 4 lines (a tetris).
pub const SCORE_TETRIS_LINES: u32 = 800;

/// Score per row the piece was soft dropped.
pub const SCORE_SOFT_DROP: u32 = 1;

/// Score per row the piece was hard dropped.
pub const SCORE_HARD_DROP: u32 = 2;

/// Number of cleared lines before the level increments.
pub const LINES_PER_LEVEL: u32 = 10;

/// The level number never goes above this.
pub const MAX_LEVEL: u32 = 20;

/// Fall delay (seconds per row) for each level, starting at level 1.
pub const LEVEL_SPEEDS: [f32; MAX_LEVEL as usize] = [
    0.8, 0.72, 0.63, 0.55, 0.47, 0.38, 0.3, 0.22, 0.13, 0.1, 0.08, 0.08, 0.08, 0.07, 0.07, 0.07,
    0.05, 0.05, 0.05, 0.03,
];

/// Cell layout of each piece type for all 4 rotations, each stored as a
/// row-major 4x4 grid. Non-zero values double as the cell color index.
pub const PIECE_DATA: [[[u8; 16]; 4]; 7] = [
    // I
    [
        [0, 0, 0, 0, 4, 4, 4, 4, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 4, 0, 0, 0, 4, 0, 0, 0, 4, 0, 0, 0, 4, 0],
        [0, 0, 0, 0, 0, 0, 0, 0, 4, 4, 4, 4, 0, 0, 0, 0],
        [0, 4, 0, 0, 0, 4, 0, 0, 0, 4, 0, 0, 0, 4, 0, 0],
    ],
    // J
    [
        [5, 0, 0, 0, 5, 5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 5, 5, 0, 0, 5, 0, 0, 0, 5, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 5, 5, 5, 0, 0, 0, 5, 0, 0, 0, 0, 0],
        [0, 5, 0, 0, 0, 5, 0, 0, 5, 5, 0, 0, 0, 0, 0, 0],
    ],
    // L
    [
        [0, 0, 6, 0, 6, 6, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 6, 0, 0, 0, 6, 0, 0, 0, 6, 6, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 6, 6, 6, 0, 6, 0, 0, 0, 0, 0, 0, 0],
        [6, 6, 0, 0, 0, 6, 0, 0, 0, 6, 0, 0, 0, 0, 0, 0],
    ],
    // O
    [
        [0, 3, 3, 0, 0, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 3, 3, 0, 0, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 3, 3, 0, 0, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 3, 3, 0, 0, 3, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ],
    // S
    [
        [0, 7, 7, 0, 7, 7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 7, 0, 0, 0, 7, 7, 0, 0, 0, 7, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 7, 7, 0, 7, 7, 0, 0, 0, 0, 0, 0],
        [7, 0, 0, 0, 7, 7, 0, 0, 0, 7, 0, 0, 0, 0, 0, 0],
    ],
    // T
    [
        [0, 2, 0, 0, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 2, 0, 0, 0, 2, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 2, 2, 2, 0, 0, 2, 0, 0, 0, 0, 0, 0],
        [0, 2, 0, 0, 2, 2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0],
    ],
    // Z
    [
        [1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0],
        [0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    ],
];

/// Wall-kick offsets tried in order when a plain rotation collides,
/// indexed by the piece's current rotation. Table for J, L, S, T, Z pieces.
/// See <http://www.tetrisconcept.net/wiki/SRS#Wall_Kicks>.
pub const WALL_KICK_TABLE: [[(i32, i32); 4]; 4] = [
    [(-1, 0), (-1, 1), (0, -2), (-1, -2)], // 0 -> R
    [(1, 0), (1, -1), (0, 2), (1, 2)],     // R -> 2
    [(1, 0), (1, 1), (0, -2), (1, -2)],    // 2 -> L
    [(-1, 0), (-1, -1), (0, 2), (-1, 2)],  // L -> 0
];

/// Alternate kick table for the I piece.
pub const WALL_KICK_TABLE_ALT: [[(i32, i32); 4]; 4] = [
    [(-2, 0), (1, 0), (-2, -1), (1, 2)], // 0 -> R
    [(-1, 0), (2, 0), (-1, 2), (2, -1)], // R -> 2
    [(2, 0), (-1, 0), (2, 1), (-1, -2)], // 2 -> L
    [(1, 0), (-2, 0), (1, -2), (-2, 1)], // L -> 0
];
