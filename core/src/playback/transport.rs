//! Looping playback clock.
//!
//! The native stand-in for the video surface: a position that advances on
//! a fixed cadence and wraps at the loop boundary. On wrap it reports the
//! same pair of signals a looping video surface produces — an implicit
//! seek back near zero followed by a position update.

use std::time::Duration;

use super::signal::PlaybackSignal;

/// Simulated playback position, looping at a fixed duration.
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    loop_duration: Duration,
    update_period: Duration,
    position: f64,
}

impl PlaybackClock {
    pub fn new(loop_duration: Duration, update_period: Duration) -> Self {
        Self {
            loop_duration,
            update_period,
            position: 0.0,
        }
    }

    /// Cadence at which [`advance`](Self::advance) should be driven.
    pub fn update_period(&self) -> Duration {
        self.update_period
    }

    /// Current position in seconds.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Begin playback from the current position.
    pub fn play(&mut self) -> PlaybackSignal {
        PlaybackSignal::Played
    }

    /// Advance by one update period, wrapping at the loop boundary.
    /// Returns the signals the surface reports for this step.
    pub fn advance(&mut self) -> Vec<PlaybackSignal> {
        self.position += self.update_period.as_secs_f64();

        let loop_secs = self.loop_duration.as_secs_f64();
        if self.position >= loop_secs {
            self.position -= loop_secs;
            return vec![
                PlaybackSignal::Seeked {
                    position: self.position,
                },
                PlaybackSignal::PositionUpdate {
                    position: self.position,
                },
            ];
        }

        vec![PlaybackSignal::PositionUpdate {
            position: self.position,
        }]
    }
}
