//! Simulated-clock timer driver.
//!
//! Fires events only when the caller pumps the clock, which makes the
//! scheduler's temporal behavior assertable without real sleeps. Events
//! due at the same instant fire in registration order.

use std::time::Duration;

use super::driver::{TimerDriver, TimerEvent, TimerHandle};

#[derive(Debug, Clone, Copy)]
struct Entry {
    handle: TimerHandle,
    due: Duration,
    period: Option<Duration>,
    event: TimerEvent,
    seq: u64,
}

/// Timer driver over a manually advanced clock.
#[derive(Debug, Default)]
pub struct ManualTimerDriver {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    entries: Vec<Entry>,
}

impl ManualTimerDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of scheduled (not yet cancelled or expired) timers.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Move the clock forward without firing anything. Callers use this to
    /// park the clock at a deadline after draining due events.
    pub fn advance_to(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }

    /// Pop the earliest event due at or before `deadline`, advancing the
    /// clock to its due time. Repeating timers are re-armed one period
    /// later under the same handle. Returns `None` once nothing is due.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<(TimerHandle, TimerEvent)> {
        let mut best: Option<usize> = None;
        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.due > deadline {
                continue;
            }
            match best {
                Some(b) => {
                    let cur = &self.entries[b];
                    if (entry.due, entry.seq) < (cur.due, cur.seq) {
                        best = Some(idx);
                    }
                }
                None => best = Some(idx),
            }
        }

        let idx = best?;
        let entry = self.entries[idx];
        self.now = self.now.max(entry.due);

        match entry.period {
            Some(period) => self.entries[idx].due = entry.due + period,
            None => {
                self.entries.swap_remove(idx);
            }
        }

        Some((entry.handle, entry.event))
    }

    fn push(&mut self, due: Duration, period: Option<Duration>, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            handle,
            due,
            period,
            event,
            seq,
        });
        handle
    }
}

impl TimerDriver for ManualTimerDriver {
    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        self.push(self.now + delay, None, event)
    }

    fn schedule_repeating(&mut self, period: Duration, event: TimerEvent) -> TimerHandle {
        self.push(self.now + period, Some(period), event)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.entries.retain(|e| e.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn fires_in_due_order_then_registration_order() {
        let mut driver = ManualTimerDriver::new();
        driver.schedule_once(ms(20), TimerEvent::BoopTick);
        driver.schedule_once(ms(10), TimerEvent::PhaseStart(0));
        driver.schedule_once(ms(10), TimerEvent::PhaseStart(1));

        assert_eq!(
            driver.pop_due(ms(30)).unwrap().1,
            TimerEvent::PhaseStart(0)
        );
        assert_eq!(
            driver.pop_due(ms(30)).unwrap().1,
            TimerEvent::PhaseStart(1)
        );
        assert_eq!(driver.pop_due(ms(30)).unwrap().1, TimerEvent::BoopTick);
        assert!(driver.pop_due(ms(30)).is_none());
        assert_eq!(driver.now(), ms(20));
    }

    #[test]
    fn repeating_timers_rearm_under_the_same_handle() {
        let mut driver = ManualTimerDriver::new();
        let handle = driver.schedule_repeating(ms(100), TimerEvent::TurnTick(0));

        for _ in 0..5 {
            let (fired, event) = driver.pop_due(ms(1_000)).unwrap();
            assert_eq!(fired, handle);
            assert_eq!(event, TimerEvent::TurnTick(0));
        }
        assert_eq!(driver.now(), ms(500));
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut driver = ManualTimerDriver::new();
        let once = driver.schedule_once(ms(10), TimerEvent::BoopTick);
        let repeating = driver.schedule_repeating(ms(10), TimerEvent::TurnTick(0));
        driver.cancel(once);
        driver.cancel(repeating);

        assert_eq!(driver.pending(), 0);
        assert!(driver.pop_due(ms(1_000)).is_none());
    }

    #[test]
    fn nothing_fires_past_the_deadline() {
        let mut driver = ManualTimerDriver::new();
        driver.schedule_once(ms(50), TimerEvent::BoopTick);
        assert!(driver.pop_due(ms(49)).is_none());
        assert!(driver.pop_due(ms(50)).is_some());
    }
}
