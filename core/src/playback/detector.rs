//! Loop-start detection.
//!
//! No single playback signal reliably reports looping across surfaces, so
//! three independent heuristics are layered and reconciled into one
//! semantic event:
//!
//! 1. the first play ever observed counts as a loop start (the initial
//!    playback start is scheduled identically to a loop);
//! 2. a seek landing below [`SEEK_LOOP_THRESHOLD_SECS`] while playing;
//! 3. a position update that moved backwards and landed below
//!    [`REWIND_LOOP_THRESHOLD_SECS`].
//!
//! The same physical loop may satisfy more than one heuristic; duplicate
//! emissions are expected and the consumer's reset is idempotent.

use super::signal::PlaybackSignal;

/// A seek below this position counts as a loop restart.
pub const SEEK_LOOP_THRESHOLD_SECS: f64 = 1.0;

/// A backwards position update landing below this counts as a loop restart.
pub const REWIND_LOOP_THRESHOLD_SECS: f64 = 2.0;

/// Zero-payload signal: playback has resumed from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopStarted;

/// Turns raw playback signals into [`LoopStarted`] events.
///
/// State is deliberately minimal: the last observed position, the playing
/// flag, and a one-shot flag for the initial play.
#[derive(Debug, Default)]
pub struct LoopDetector {
    last_position: Option<f64>,
    playing: bool,
    initial_fired: bool,
}

impl LoopDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one signal; returns `Some(LoopStarted)` when a loop restart is
    /// detected. The tracked position updates on every position report,
    /// whether or not an event fired.
    pub fn observe(&mut self, signal: &PlaybackSignal) -> Option<LoopStarted> {
        match signal {
            PlaybackSignal::Played => {
                self.playing = true;
                if !self.initial_fired {
                    self.initial_fired = true;
                    return Some(LoopStarted);
                }
                None
            }
            PlaybackSignal::Paused => {
                self.playing = false;
                None
            }
            PlaybackSignal::Seeked { position } => {
                if self.playing && *position < SEEK_LOOP_THRESHOLD_SECS {
                    Some(LoopStarted)
                } else {
                    None
                }
            }
            PlaybackSignal::PositionUpdate { position } => {
                let fired = match self.last_position {
                    Some(previous)
                        if *position < previous && *position < REWIND_LOOP_THRESHOLD_SECS =>
                    {
                        Some(LoopStarted)
                    }
                    _ => None,
                };
                self.last_position = Some(*position);
                fired
            }
        }
    }
}
