//! Phase scheduling per loop cycle.
//!
//! On every loop start the scheduler tears down the previous cycle in full
//! — interval handles, pending phase-start timers, pending phase-stop
//! timers, and the boop one-shot — then schedules a fresh timeline.
//! Invariant: at most one set of phase timers is live at any moment.
//! Loop-start events arriving in quick succession are tolerated because
//! each reset supersedes the last completely.

use tracing::{debug, trace, warn};

use crate::counters::CounterLedger;

use super::driver::{TimerDriver, TimerEvent, TimerHandle};
use super::timeline::Timeline;

/// Schedules the timeline against a [`TimerDriver`] and routes its tick
/// events into the counter ledger.
#[derive(Debug)]
pub struct PhaseScheduler {
    timeline: Timeline,
    /// Every handle belonging to the current cycle (the cancellable set).
    active: Vec<TimerHandle>,
    /// Interval handle per phase index, while that phase is ticking.
    phase_ticks: Vec<Option<TimerHandle>>,
}

impl PhaseScheduler {
    pub fn new(timeline: Timeline) -> Self {
        let phase_count = timeline.phases.len();
        Self {
            timeline,
            active: Vec::new(),
            phase_ticks: vec![None; phase_count],
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Begin a fresh cycle: cancel everything from the previous one, then
    /// schedule the boop one-shot and every phase start.
    pub fn restart_cycle(&mut self, driver: &mut dyn TimerDriver) {
        self.cancel_all(driver);

        self.active
            .push(driver.schedule_once(self.timeline.boop_offset, TimerEvent::BoopTick));

        for (idx, phase) in self.timeline.phases.iter().enumerate() {
            self.active
                .push(driver.schedule_once(phase.start_offset, TimerEvent::PhaseStart(idx)));
        }

        debug!(
            phases = self.timeline.phases.len(),
            "loop cycle restarted"
        );
    }

    fn cancel_all(&mut self, driver: &mut dyn TimerDriver) {
        for handle in self.active.drain(..) {
            driver.cancel(handle);
        }
        for slot in &mut self.phase_ticks {
            *slot = None;
        }
    }

    /// Apply one fired timer event. Store failures are logged and the
    /// cycle keeps running; the displayed counts are already updated.
    pub fn handle_timer(
        &mut self,
        event: TimerEvent,
        driver: &mut dyn TimerDriver,
        ledger: &mut CounterLedger,
    ) {
        match event {
            TimerEvent::PhaseStart(idx) => {
                let phase = self.timeline.phases[idx];
                let ticks = driver.schedule_repeating(phase.tick_period, TimerEvent::TurnTick(idx));
                self.active.push(ticks);
                self.phase_ticks[idx] = Some(ticks);
                self.active
                    .push(driver.schedule_once(phase.active_duration, TimerEvent::PhaseStop(idx)));
                trace!(phase = idx, "phase started");
            }
            TimerEvent::PhaseStop(idx) => {
                if let Some(handle) = self.phase_ticks[idx].take() {
                    driver.cancel(handle);
                    self.active.retain(|h| *h != handle);
                }
                trace!(phase = idx, "phase stopped");
            }
            TimerEvent::TurnTick(idx) => {
                if let Err(error) = ledger.add_turn() {
                    warn!(%error, phase = idx, "failed to persist turn count");
                }
            }
            TimerEvent::BoopTick => {
                if let Err(error) = ledger.add_boop() {
                    warn!(%error, "failed to persist boop count");
                }
            }
        }
    }
}
