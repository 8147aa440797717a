use crate::bag::PieceBag;
use crate::constants::{
    FIELD_COLUMN_COUNT, FIELD_ROW_CLEAR_TIME, FIELD_ROW_COUNT, LEVEL_SPEEDS, LINES_PER_LEVEL,
    LOCK_DELAY, MAX_LEVEL, SCORE_DOUBLE_LINES, SCORE_HARD_DROP, SCORE_SINGLE_LINES,
    SCORE_SOFT_DROP, SCORE_TETRIS_LINES, SCORE_TRIPLE_LINES,
};
use crate::events::{AudioSink, FieldEvent, NullAudio, SoundCue};
use crate::grid::Grid;
use crate::piece::{Piece, PieceKind};
use crate::view::{FieldView, ScoreData};

// Game-over text bounce animation bounds.
const BOUNCE_LIMIT: f32 = 4.0;
const BOUNCE_STEP: f32 = 0.65;

/// A playfield running its own physics: piece spawning, gravity,
/// player commands with wall kicks, lock delay, row clearing, scoring
/// and leveling.
///
/// The host drives it with `update` once per fixed tick; commands are
/// synchronous calls made from input handling before `update` runs.
/// Replay playback lives in [`crate::replay::ReplayedField`], which never
/// runs physics.
pub struct SimulatedField {
    grid: Grid,
    rows_to_clear: Vec<usize>,
    row_clear_time: f32,
    active: Option<Piece>,
    ghost: Option<Piece>,
    next: Piece,
    bag: PieceBag,
    fall_time: f32,
    lock_time: f32,
    fall_speed: f32,
    level: u32,
    score: u32,
    lines: u32,
    game_over: bool,
    bounce: f32,
    bounce_step: f32,
    paused: bool,
    audio: Box<dyn AudioSink + Send>,
    events: flume::Sender<FieldEvent>,
    events_rx: flume::Receiver<FieldEvent>,
}

impl SimulatedField {
    /// Fresh field with an OS-seeded piece bag.
    pub fn new() -> SimulatedField {
        SimulatedField::with_bag(PieceBag::new())
    }

    /// Fresh field with a deterministic piece sequence.
    pub fn with_seed(seed: u64) -> SimulatedField {
        SimulatedField::with_bag(PieceBag::with_seed(seed))
    }

    fn with_bag(mut bag: PieceBag) -> SimulatedField {
        let (events, events_rx) = flume::unbounded();
        let next = Piece::spawn(bag.next_kind());
        SimulatedField {
            grid: Grid::new(),
            rows_to_clear: Vec::new(),
            row_clear_time: 0.0,
            active: None,
            ghost: None,
            next,
            bag,
            fall_time: 0.0,
            lock_time: 0.0,
            fall_speed: LEVEL_SPEEDS[0],
            level: 1,
            score: 0,
            lines: 0,
            game_over: false,
            bounce: 0.0,
            bounce_step: BOUNCE_STEP,
            paused: false,
            audio: Box::new(NullAudio),
            events,
            events_rx,
        }
    }

    /// Replaces the audio collaborator.
    pub fn set_audio_sink(&mut self, sink: Box<dyn AudioSink + Send>) {
        self.audio = sink;
    }

    /// Receiver for field events; the host drains this once per tick.
    pub fn events(&self) -> flume::Receiver<FieldEvent> {
        self.events_rx.clone()
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Tries to shift the active piece one column left.
    pub fn move_left(&mut self) {
        if self.paused {
            return;
        }
        if !self.collides(-1, 0, 0) {
            if let Some(piece) = self.active.as_mut() {
                piece.cell_x -= 1;
            }
            self.lock_time = LOCK_DELAY;
            self.piece_updated();
            self.audio.play(SoundCue::Shift);
        }
    }

    /// Tries to shift the active piece one column right.
    pub fn move_right(&mut self) {
        if self.paused {
            return;
        }
        if !self.collides(1, 0, 0) {
            if let Some(piece) = self.active.as_mut() {
                piece.cell_x += 1;
            }
            self.lock_time = LOCK_DELAY;
            self.piece_updated();
            self.audio.play(SoundCue::Shift);
        }
    }

    /// Drops the active piece one row, scoring for the drop.
    pub fn soft_drop(&mut self) {
        if self.paused {
            return;
        }
        if !self.collides(0, 1, 0) {
            if let Some(piece) = self.active.as_mut() {
                piece.cell_y += 1;
            }
            self.fall_time = 0.0;
            self.score += SCORE_SOFT_DROP;
            self.lock_time = LOCK_DELAY;
            self.piece_updated();
            self.audio.play(SoundCue::Shift);
        }
    }

    /// Drops the active piece until it rests, scoring per row advanced.
    /// The piece locks on the next tick.
    pub fn hard_drop(&mut self) {
        if self.paused {
            return;
        }
        let Some(mut piece) = self.active else {
            return;
        };
        let mut dropped = 0u32;
        while !self.grid.collides(&piece, 0, 1, 0) {
            piece.cell_y += 1;
            dropped += 1;
        }
        if dropped > 0 {
            self.active = Some(piece);
            self.piece_updated();
            self.score += dropped * SCORE_HARD_DROP;
            self.fall_time = 0.0;
            self.lock_time = 0.0;
        }
    }

    /// Tries to rotate the active piece clockwise, attempting wall kicks
    /// in table order when the plain rotation collides. A rotation that
    /// fails every kick leaves the piece untouched.
    pub fn rotate(&mut self) {
        if self.paused {
            return;
        }
        let Some(mut piece) = self.active else {
            return;
        };

        if !self.grid.collides(&piece, 0, 0, 1) {
            piece.rotation = (piece.rotation + 1) % 4;
            self.active = Some(piece);
            self.lock_time = LOCK_DELAY;
            self.piece_updated();
            self.audio.play(SoundCue::Rotate);
            return;
        }

        let table = if piece.kind == PieceKind::I {
            &crate::constants::WALL_KICK_TABLE_ALT
        } else {
            &crate::constants::WALL_KICK_TABLE
        };
        for &(d_col, d_row) in &table[piece.rotation as usize] {
            if !self.grid.collides(&piece, d_col, d_row, 1) {
                piece.rotation = (piece.rotation + 1) % 4;
                piece.cell_x += d_col;
                piece.cell_y += d_row;
                self.active = Some(piece);
                self.lock_time = LOCK_DELAY;
                self.piece_updated();
                self.audio.play(SoundCue::Rotate);
                break;
            }
        }
    }

    /// Advances the simulation by one fixed step: row-clear animation,
    /// spawning, gravity and locking.
    pub fn update(&mut self, step: f32) {
        if self.paused {
            return;
        }

        if self.game_over {
            // Bounded bounce of the game-over text; no physics runs.
            self.bounce += self.bounce_step;
            if self.bounce > BOUNCE_LIMIT {
                self.bounce = BOUNCE_LIMIT;
                self.bounce_step = -self.bounce_step;
            } else if self.bounce < -BOUNCE_LIMIT {
                self.bounce = -BOUNCE_LIMIT;
                self.bounce_step = -self.bounce_step;
            }
            return;
        }

        if !self.rows_to_clear.is_empty() {
            self.animate_row_clear(step);
        }

        match self.active {
            None => {
                // Spawning waits for the clear animation to finish.
                if self.row_clear_time <= 0.0 {
                    self.spawn();
                }
            }
            Some(piece) if self.grid.collides(&piece, 0, 1, 0) => {
                // Resting on something: count down to lock.
                self.lock_time -= step;
                if self.lock_time <= 0.0 {
                    self.lock(piece);
                }
            }
            Some(mut piece) => {
                self.fall_time += step;
                if self.fall_time >= self.fall_speed && !self.grid.collides(&piece, 0, 1, 0) {
                    self.fall_time = 0.0;
                    piece.cell_y += 1;
                    self.active = Some(piece);
                    self.lock_time = LOCK_DELAY;
                }
            }
        }
    }

    fn spawn(&mut self) {
        self.lock_time = LOCK_DELAY;
        let spawned = std::mem::replace(&mut self.next, Piece::spawn(self.bag.next_kind()));
        if self.grid.collides(&spawned, 0, 0, 0) {
            // No room at the spawn position: the game is over.
            self.game_over = true;
            self.active = None;
            tracing::debug!(score = self.score, lines = self.lines, "game over");
            self.audio.play(SoundCue::GameOver);
            let _ = self.events.send(FieldEvent::GameOver);
        } else {
            self.active = Some(spawned);
            self.piece_updated();
        }
    }

    fn lock(&mut self, piece: Piece) {
        self.grid.merge(&piece);
        self.audio.play(SoundCue::Hit);
        self.active = None;
        self.piece_updated();
        self.field_updated();

        // Locking may have completed rows; scan bottom to top so pending
        // rows are stored in descending index order for the collapse.
        for row in (0..FIELD_ROW_COUNT).rev() {
            if self.grid.row_full(row) {
                self.rows_to_clear.push(row);
                self.row_clear_time = FIELD_ROW_CLEAR_TIME;
            }
        }
        if !self.rows_to_clear.is_empty() {
            self.audio.play(SoundCue::Clear);
        }
    }

    fn animate_row_clear(&mut self, step: f32) {
        self.row_clear_time -= step;
        let normalized = 1.0 - self.row_clear_time / FIELD_ROW_CLEAR_TIME;

        if normalized >= 1.0 {
            // Animation done: collapse the pending rows. Each collapse
            // shifts the rows above it, so later entries are offset by the
            // number of rows already removed.
            let rows = std::mem::take(&mut self.rows_to_clear);
            let mut cleared = 0u32;
            for (i, row) in rows.into_iter().enumerate() {
                self.grid.collapse_row(row + i);
                cleared += 1;
            }
            self.field_updated();

            self.lines += cleared;
            self.score += self.level
                * match cleared {
                    1 => SCORE_SINGLE_LINES,
                    2 => SCORE_DOUBLE_LINES,
                    3 => SCORE_TRIPLE_LINES,
                    4 => SCORE_TETRIS_LINES,
                    // Not reachable with a single piece.
                    _ => 0,
                };

            let new_level = ((self.lines + LINES_PER_LEVEL) / LINES_PER_LEVEL).min(MAX_LEVEL);
            if new_level > self.level {
                self.level = new_level;
                self.fall_speed = LEVEL_SPEEDS[(self.level - 1) as usize];
                tracing::debug!(level = self.level, "level changed");
                let _ = self.events.send(FieldEvent::LevelChanged(self.level));
            }
        } else {
            // Wipe cells symmetrically from the center of each pending row
            // outward; the rows only collapse once the animation finishes.
            let removed = ((FIELD_COLUMN_COUNT as f32 / 2.0) * normalized).round() as usize;
            for x in 0..removed {
                let left = FIELD_COLUMN_COUNT / 2 - x - 1;
                let right = FIELD_COLUMN_COUNT / 2 + x;
                for &row in &self.rows_to_clear {
                    self.grid.clear_cell(left, row);
                    self.grid.clear_cell(right, row);
                }
            }
        }
    }

    /// Collision test for the active piece under a displacement. A missing
    /// active piece always collides, so commands no-op uniformly.
    fn collides(&self, d_col: i32, d_row: i32, d_rotation: u8) -> bool {
        match &self.active {
            Some(piece) => self.grid.collides(piece, d_col, d_row, d_rotation),
            None => true,
        }
    }

    fn piece_updated(&mut self) {
        self.update_ghost();
        let _ = self.events.send(FieldEvent::PieceUpdated);
    }

    fn field_updated(&mut self) {
        let _ = self.events.send(FieldEvent::FieldUpdated);
    }

    /// Drops the ghost straight down from the active piece's current
    /// column and rotation until it rests.
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

impl Default for SimulatedField {
    fn default() -> Self {
        SimulatedField::new()
    }
}

impl FieldView for SimulatedField {
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
        Some(&self.next)
    }

    fn score_data(&self) -> ScoreData {
        ScoreData {
            score: self.score,
            level: self.level,
            lines: self.lines,
        }
    }

    fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn game_over_bounce(&self) -> f32 {
        self.bounce
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TIME_STEP;

    fn field_with_active(kind: PieceKind) -> SimulatedField {
        let mut field = SimulatedField::with_seed(0);
        field.active = Some(Piece::spawn(kind));
        field.update_ghost();
        field
    }

    fn fill_row(field: &mut SimulatedField, row: usize, except: &[usize]) {
        for col in 0..FIELD_COLUMN_COUNT {
            if !except.contains(&col) {
                set_cell(field, col, row, 1);
            }
        }
    }

    fn set_cell(field: &mut SimulatedField, col: usize, row: usize, value: u8) {
        let mut cells = field.grid.cells().to_vec();
        cells[row * FIELD_COLUMN_COUNT + col] = value;
        field.grid = Grid::from_cells(cells).unwrap();
    }

    #[test]
    fn hard_drop_of_i_piece_from_spawn() {
        let mut field = field_with_active(PieceKind::I);
        field.hard_drop();
        // The I mask occupies only row 1 of its box, so from cell_y = 0 it
        // advances 20 rows before resting on the floor.
        let piece = field.active.unwrap();
        assert_eq!(piece.cell_y, 20);
        assert_eq!(field.score, 20 * SCORE_HARD_DROP);
        assert_eq!(field.lock_time, 0.0);
        assert_eq!(field.fall_time, 0.0);
    }

    #[test]
    fn hard_drop_with_no_active_piece_is_a_no_op() {
        let mut field = SimulatedField::with_seed(0);
        field.hard_drop();
        assert_eq!(field.score, 0);
        assert!(field.active.is_none());
    }

    #[test]
    fn soft_drop_scores_one_and_resets_timers() {
        let mut field = field_with_active(PieceKind::T);
        field.fall_time = 0.3;
        field.soft_drop();
        assert_eq!(field.active.unwrap().cell_y, 1);
        assert_eq!(field.score, SCORE_SOFT_DROP);
        assert_eq!(field.fall_time, 0.0);
        assert_eq!(field.lock_time, LOCK_DELAY);
    }

    #[test]
    fn moves_stop_at_the_walls() {
        let mut field = field_with_active(PieceKind::O);
        // O occupies mask columns 1..3: leftmost legal cell_x is -1.
        for _ in 0..20 {
            field.move_left();
        }
        assert_eq!(field.active.unwrap().cell_x, -1);
        for _ in 0..20 {
            field.move_right();
        }
        assert_eq!(field.active.unwrap().cell_x, FIELD_COLUMN_COUNT as i32 - 3);
    }

    #[test]
    fn successful_move_resets_lock_delay() {
        let mut field = field_with_active(PieceKind::O);
        field.hard_drop();
        field.lock_time = 0.2;
        field.move_left();
        assert_eq!(field.lock_time, LOCK_DELAY);
    }

    #[test]
    fn resting_piece_locks_after_lock_delay() {
        let mut field = field_with_active(PieceKind::O);
        field.hard_drop();
        // Hard drop zeroes the lock timer, so the next tick locks.
        field.update(TIME_STEP);
        assert!(field.active.is_none());
        // O locked at the bottom: rows 20 and 21 hold its four cells.
        assert_eq!(field.grid.cell(4, 20), 3);
        assert_eq!(field.grid.cell(5, 20), 3);
        assert_eq!(field.grid.cell(4, 21), 3);
        assert_eq!(field.grid.cell(5, 21), 3);
    }

    #[test]
    fn gravity_advances_piece_after_fall_speed_elapses() {
        let mut field = field_with_active(PieceKind::T);
        let mut elapsed = 0.0;
        while elapsed < LEVEL_SPEEDS[0] {
            assert_eq!(field.active.unwrap().cell_y, 0);
            field.update(TIME_STEP);
            elapsed += TIME_STEP;
        }
        assert_eq!(field.active.unwrap().cell_y, 1);
        assert_eq!(field.lock_time, LOCK_DELAY);
    }

    #[test]
    fn completing_a_row_schedules_clear_and_scores() {
        let mut field = field_with_active(PieceKind::O);
        fill_row(&mut field, 21, &[4, 5]);
        field.update_ghost();
        field.hard_drop();
        field.update(TIME_STEP); // locks, schedules the row
        assert_eq!(field.rows_to_clear, vec![21]);
        assert_eq!(field.row_clear_time, FIELD_ROW_CLEAR_TIME);

        let drop_score = field.score;
        // Run out the clear animation (one extra tick absorbs float error).
        for _ in 0..5 {
            field.update(0.1);
        }
        assert!(field.rows_to_clear.is_empty());
        assert_eq!(field.lines, 1);
        assert_eq!(field.score, drop_score + SCORE_SINGLE_LINES);
        // Row 21 now holds what was in row 20: the O piece's upper cells.
        assert_eq!(field.grid.cell(4, 21), 3);
        assert_eq!(field.grid.cell(0, 21), 0);
    }

    #[test]
    fn clear_wipe_zeroes_columns_from_the_center_out() {
        let mut field = SimulatedField::with_seed(0);
        fill_row(&mut field, 21, &[]);
        field.rows_to_clear = vec![21];
        field.row_clear_time = FIELD_ROW_CLEAR_TIME;
        field.update(0.2); // normalized 0.5 -> 3 column pairs removed
        for col in [2, 3, 4, 5, 6, 7] {
            assert_eq!(field.grid.cell(col, 21), 0);
        }
        for col in [0, 1, 8, 9] {
            assert_ne!(field.grid.cell(col, 21), 0);
        }
    }

    #[test]
    fn double_clear_scores_double_and_shifts_twice() {
        let mut field = SimulatedField::with_seed(0);
        fill_row(&mut field, 20, &[]);
        fill_row(&mut field, 21, &[]);
        set_cell(&mut field, 0, 10, 5);
        field.rows_to_clear = vec![21, 20];
        field.row_clear_time = FIELD_ROW_CLEAR_TIME;
        field.update(FIELD_ROW_CLEAR_TIME);
        assert_eq!(field.lines, 2);
        assert_eq!(field.score, SCORE_DOUBLE_LINES);
        assert_eq!(field.grid.cell(0, 12), 5);
        assert_eq!(field.grid.cell(0, 10), 0);
    }

    #[test]
    fn triple_clear_scores_triple_and_shifts_three_times() {
        let mut field = SimulatedField::with_seed(0);
        for row in 19..=21 {
            fill_row(&mut field, row, &[]);
        }
        set_cell(&mut field, 0, 10, 5);
        field.rows_to_clear = vec![21, 20, 19];
        field.row_clear_time = FIELD_ROW_CLEAR_TIME;
        field.update(FIELD_ROW_CLEAR_TIME);
        assert_eq!(field.lines, 3);
        assert_eq!(field.score, SCORE_TRIPLE_LINES);
        assert_eq!(field.grid.cell(0, 13), 5);
        assert_eq!(field.grid.cell(0, 10), 0);
    }

    #[test]
    fn tetris_clear_scores_tetris_and_shifts_four_times() {
        let mut field = SimulatedField::with_seed(0);
        for row in 18..=21 {
            fill_row(&mut field, row, &[]);
        }
        set_cell(&mut field, 0, 10, 5);
        field.rows_to_clear = vec![21, 20, 19, 18];
        field.row_clear_time = FIELD_ROW_CLEAR_TIME;
        field.update(FIELD_ROW_CLEAR_TIME);
        assert_eq!(field.lines, 4);
        assert_eq!(field.score, SCORE_TETRIS_LINES);
        assert_eq!(field.grid.cell(0, 14), 5);
        assert_eq!(field.grid.cell(0, 10), 0);
    }

    #[test]
    fn line_clear_score_scales_with_level() {
        let mut field = SimulatedField::with_seed(0);
        field.level = 3;
        fill_row(&mut field, 21, &[]);
        field.rows_to_clear = vec![21];
        field.row_clear_time = FIELD_ROW_CLEAR_TIME;
        field.update(FIELD_ROW_CLEAR_TIME);
        assert_eq!(field.score, 3 * SCORE_SINGLE_LINES);
    }

    #[test]
    fn level_increases_with_lines_and_emits_event() {
        let mut field = SimulatedField::with_seed(0);
        let events = field.events();
        field.lines = 9;
        fill_row(&mut field, 21, &[]);
        field.rows_to_clear = vec![21];
        field.row_clear_time = FIELD_ROW_CLEAR_TIME;
        field.update(FIELD_ROW_CLEAR_TIME);
        assert_eq!(field.lines, 10);
        assert_eq!(field.level, 2);
        assert_eq!(field.fall_speed, LEVEL_SPEEDS[1]);
        let seen: Vec<FieldEvent> = events.try_iter().collect();
        assert!(seen.contains(&FieldEvent::LevelChanged(2)));
    }

    #[test]
    fn level_never_exceeds_max() {
        let mut field = SimulatedField::with_seed(0);
        field.lines = 10_000;
        fill_row(&mut field, 21, &[]);
        field.rows_to_clear = vec![21];
        field.row_clear_time = FIELD_ROW_CLEAR_TIME;
        field.update(FIELD_ROW_CLEAR_TIME);
        assert_eq!(field.level, MAX_LEVEL);
    }

    #[test]
    fn blocked_spawn_is_game_over() {
        let mut field = SimulatedField::with_seed(0);
        let events = field.events();
        fill_row(&mut field, 0, &[]);
        fill_row(&mut field, 1, &[]);
        field.update(TIME_STEP);
        assert!(field.game_over);
        assert!(field.active.is_none());
        let seen: Vec<FieldEvent> = events.try_iter().collect();
        assert!(seen.contains(&FieldEvent::GameOver));
    }

    #[test]
    fn game_over_bounce_stays_bounded() {
        let mut field = SimulatedField::with_seed(0);
        field.game_over = true;
        let mut reversed = false;
        let mut last_step = field.bounce_step;
        for _ in 0..100 {
            field.update(TIME_STEP);
            assert!(field.bounce.abs() <= BOUNCE_LIMIT);
            if field.bounce_step != last_step {
                reversed = true;
                last_step = field.bounce_step;
            }
        }
        assert!(reversed);
    }

    #[test]
    fn spawn_promotes_next_and_rolls_a_new_one() {
        let mut field = SimulatedField::with_seed(11);
        let mut expected = PieceBag::with_seed(11);
        let first = expected.next_kind();
        let second = expected.next_kind();
        assert_eq!(field.next.kind, first);
        field.update(TIME_STEP);
        assert_eq!(field.active.unwrap().kind, first);
        assert_eq!(field.next.kind, second);
    }

    #[test]
    fn wall_kick_applies_first_fitting_offset() {
        let mut field = SimulatedField::with_seed(0);
        // T at the left wall, rotation 1: the plain rotation to 2 pokes
        // out of the field, and the first kick offset (1, 0) fits.
        field.active = Some(Piece {
            kind: PieceKind::T,
            cell_x: -1,
            cell_y: 10,
            rotation: 1,
        });
        field.update_ghost();
        field.rotate();
        let piece = field.active.unwrap();
        assert_eq!(piece.rotation, 2);
        assert_eq!(piece.cell_x, 0);
        assert_eq!(piece.cell_y, 10);
    }

    #[test]
    fn rotation_with_no_fitting_kick_changes_nothing() {
        let mut field = SimulatedField::with_seed(0);
        let piece = Piece {
            kind: PieceKind::T,
            cell_x: 3,
            cell_y: 10,
            rotation: 0,
        };
        // Fill everything except the piece's own cells.
        let mut cells = vec![1u8; FIELD_COLUMN_COUNT * FIELD_ROW_COUNT];
        for y in 0..4 {
            for x in 0..4 {
                if piece.cells()[y * 4 + x] != 0 {
                    let col = (piece.cell_x + x as i32) as usize;
                    let row = (piece.cell_y + y as i32) as usize;
                    cells[row * FIELD_COLUMN_COUNT + col] = 0;
                }
            }
        }
        field.grid = Grid::from_cells(cells).unwrap();
        field.active = Some(piece);
        field.update_ghost();
        field.rotate();
        assert_eq!(field.active.unwrap(), piece);
    }

    #[test]
    fn ghost_mirrors_active_at_resting_row() {
        let mut field = field_with_active(PieceKind::T);
        let ghost = field.ghost.unwrap();
        let active = field.active.unwrap();
        assert_eq!(ghost.kind, active.kind);
        assert_eq!(ghost.rotation, active.rotation);
        assert_eq!(ghost.cell_x, active.cell_x);
        // T rotation 0 occupies mask rows 0 and 1.
        assert_eq!(ghost.cell_y, FIELD_ROW_COUNT as i32 - 2);

        field.move_left();
        assert_eq!(field.ghost.unwrap().cell_x, field.active.unwrap().cell_x);
    }

    #[test]
    fn paused_field_ignores_commands_and_updates() {
        let mut field = field_with_active(PieceKind::T);
        field.set_paused(true);
        let before = field.active.unwrap();
        field.move_left();
        field.soft_drop();
        field.rotate();
        field.hard_drop();
        for _ in 0..120 {
            field.update(TIME_STEP);
        }
        assert_eq!(field.active.unwrap(), before);
        assert_eq!(field.score, 0);
    }
}
