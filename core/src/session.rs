//! Session wiring: detector → scheduler → ledger.
//!
//! One `PlaybackSession` exists per run and owns all mutable scheduling
//! state (the detector's last-known position, the scheduler's cancellable
//! handle set, the live counter values). Callers pass the timer driver
//! explicitly; nothing here is global.

use tracing::info;

use crate::counters::CounterLedger;
use crate::playback::{LoopDetector, PlaybackSignal};
use crate::schedule::{PhaseScheduler, TimerDriver, TimerEvent, Timeline};

pub struct PlaybackSession {
    detector: LoopDetector,
    scheduler: PhaseScheduler,
    ledger: CounterLedger,
}

impl PlaybackSession {
    pub fn new(timeline: Timeline, ledger: CounterLedger) -> Self {
        Self {
            detector: LoopDetector::new(),
            scheduler: PhaseScheduler::new(timeline),
            ledger,
        }
    }

    /// Feed one playback signal. Returns true when it was recognized as a
    /// loop start and the timeline was rescheduled.
    pub fn handle_signal(&mut self, signal: &PlaybackSignal, driver: &mut dyn TimerDriver) -> bool {
        if self.detector.observe(signal).is_some() {
            info!("loop start detected; rescheduling timeline");
            self.scheduler.restart_cycle(driver);
            return true;
        }
        false
    }

    /// Apply one fired timer event.
    pub fn handle_timer(&mut self, event: TimerEvent, driver: &mut dyn TimerDriver) {
        self.scheduler.handle_timer(event, driver, &mut self.ledger);
    }

    pub fn ledger(&self) -> &CounterLedger {
        &self.ledger
    }
}

impl std::fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("detector", &self.detector)
            .field("ledger", &self.ledger)
            .finish()
    }
}
