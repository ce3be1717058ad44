//! Abstract timer capability and the tokio-backed driver.
//!
//! The scheduler core never touches wall-clock APIs directly; it asks a
//! [`TimerDriver`] for one-shot and repeating timers and cancels them by
//! handle. That keeps the choreography testable against a simulated clock
//! (see [`super::ManualTimerDriver`]).

use std::time::Duration;

use hashbrown::HashMap;
use tokio::sync::mpsc;

/// Opaque handle identifying one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub(crate) u64);

/// Payload delivered when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// A phase's start offset elapsed; begin its tick interval.
    PhaseStart(usize),
    /// A phase's active duration elapsed; stop its tick interval.
    PhaseStop(usize),
    /// One recurring turn tick from the given phase.
    TurnTick(usize),
    /// The single-shot boop tick.
    BoopTick,
}

/// Schedule-once / schedule-repeating / cancel-by-handle capability.
pub trait TimerDriver {
    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle;
    fn schedule_repeating(&mut self, period: Duration, event: TimerEvent) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

/// Tokio-backed driver. Each timer is a spawned task sending
/// `(handle, event)` pairs over an unbounded channel; the receiving loop
/// must check [`is_live`](Self::is_live) before applying an event, which
/// drops anything a cancelled timer managed to push in flight.
pub struct TokioTimerDriver {
    next_id: u64,
    tx: mpsc::UnboundedSender<(TimerHandle, TimerEvent)>,
    tasks: HashMap<TimerHandle, tokio::task::JoinHandle<()>>,
}

impl TokioTimerDriver {
    /// Create the driver and the receiving end of its event channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<(TimerHandle, TimerEvent)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                next_id: 0,
                tx,
                tasks: HashMap::new(),
            },
            rx,
        )
    }

    fn next_handle(&mut self) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        handle
    }

    /// Whether the handle has not been cancelled. One-shot timers stay
    /// live after firing until the next cycle reset cancels them.
    pub fn is_live(&self, handle: TimerHandle) -> bool {
        self.tasks.contains_key(&handle)
    }
}

impl TimerDriver for TokioTimerDriver {
    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        let handle = self.next_handle();
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send((handle, event));
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn schedule_repeating(&mut self, period: Duration, event: TimerEvent) -> TimerHandle {
        let handle = self.next_handle();
        let tx = self.tx.clone();
        // Plain sleep loop: the first tick lands one period after start,
        // matching interval-timer semantics on the web surface.
        let task = tokio::spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                if tx.send((handle, event)).is_err() {
                    break;
                }
            }
        });
        self.tasks.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.tasks.remove(&handle) {
            task.abort();
        }
    }
}
