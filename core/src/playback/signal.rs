//! Low-level playback signals.
//!
//! Mirrors what a playback surface actually reports: a play/pause
//! transition, a position jump, or a routine position update. Positions
//! are seconds from the start of the asset.

/// One observation from the playback surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackSignal {
    /// Playback began (fires once per play action).
    Played,
    /// Playback was paused.
    Paused,
    /// The position jumped, including the implicit seek-to-zero some
    /// playback surfaces perform when looping.
    Seeked { position: f64 },
    /// Routine position report while playing.
    PositionUpdate { position: f64 },
}
