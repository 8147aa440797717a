//! # starfall-field
//!
//! The playfield simulation core of a falling-block puzzle game: piece
//! spawning, gravity, player commands with wall-kick resolution, lock
//! delay, row clearing, scoring and leveling, plus deterministic replay
//! playback.
//!
//! ## Overview
//!
//! The crate is built around two field types sharing one read-only view:
//!
//! - [`SimulatedField`] runs the physics state machine and accepts player
//!   commands (`move_left`, `move_right`, `soft_drop`, `hard_drop`,
//!   `rotate`).
//! - [`ReplayedField`] paints itself purely from a recorded instruction
//!   stream; no physics run during playback.
//!
//! A host drives either one with `update` at a fixed timestep, draining
//! [`FieldEvent`]s once per tick. Rendering, input repeat timing, audio
//! playback and network transport are external collaborators: renderers
//! read through [`FieldView`], audio receives [`SoundCue`]s through an
//! injected [`AudioSink`].
//!
//! ## Example
//!
//! ```rust
//! use starfall_field::{FieldView, SimulatedField, TIME_STEP};
//!
//! let mut field = SimulatedField::with_seed(42);
//! field.update(TIME_STEP); // spawns the first piece
//! field.move_left();
//! field.hard_drop();
//! assert!(field.active_piece().is_some());
//! ```

// Module declarations
pub mod bag;
pub mod constants;
pub mod error;
pub mod events;
pub mod field;
pub mod grid;
pub mod piece;
pub mod replay;
pub mod view;

// Re-exports for convenience
pub use bag::PieceBag;
pub use constants::{
    FIELD_COLUMN_COUNT, FIELD_HIDDEN_ROW_COUNT, FIELD_ROW_COUNT, LOCK_DELAY, MAX_LEVEL, TIME_STEP,
};
pub use error::ReplayError;
pub use events::{AudioSink, FieldEvent, NullAudio, SoundCue};
pub use field::SimulatedField;
pub use grid::Grid;
pub use piece::{Piece, PieceKind};
pub use replay::{parse_instructions, ReplayInstruction, ReplayedField};
pub use view::{FieldView, ScoreData};
