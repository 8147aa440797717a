//! Side-effect fan-out: sound cues for the audio collaborator and field
//! events drained by the host once per tick.

/// Fire-and-forget sound signals keyed by gameplay event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Shift,
    Rotate,
    Hit,
    Clear,
    GameOver,
}

/// Audio collaborator interface. Implementations must not block; the
/// simulation never waits for playback.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Audio sink that discards every cue.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Events emitted by the field for the host to observe, in emission order.
/// Delivered over a `flume` channel so the host can drain them once per
/// tick before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    /// The active piece spawned, moved, rotated or was cleared.
    PieceUpdated,
    /// The grid contents changed (piece locked or rows collapsed).
    FieldUpdated,
    /// The level increased; drives the external warp-effect collaborator.
    LevelChanged(u32),
    /// The field reached its terminal state.
    GameOver,
}
