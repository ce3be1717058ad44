//! Playback observation
//!
//! This module provides:
//! - **Signals**: the low-level vocabulary emitted by a playback surface
//! - **Detector**: reconciles those signals into discrete loop-start events
//! - **Transport**: a looping playback clock standing in for the video surface

mod detector;
mod signal;
mod transport;


pub use detector::{
    LoopDetector, LoopStarted, REWIND_LOOP_THRESHOLD_SECS, SEEK_LOOP_THRESHOLD_SECS,
};
pub use signal::PlaybackSignal;
pub use transport::PlaybackClock;
