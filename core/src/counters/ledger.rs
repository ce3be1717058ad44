//! Tick application and persistence policy.
//!
//! The ledger owns the live (displayed) counter values and decides when a
//! tick also touches durable storage:
//! - **turn** ticks persist only when the count reaches a multiple of 100,
//!   so storage holds the last century mark reached;
//! - **boop** ticks persist on every tick.
//!
//! Displays are updated on every tick regardless of the write policy.

use super::display::DisplaySet;
use super::error::StoreError;
use super::store::{CounterKind, CounterStore};

/// Persist a turn count once per this many increments.
const TURN_PERSIST_STRIDE: u64 = 100;

/// Live counter state bound to a store and a set of displays.
pub struct CounterLedger {
    store: CounterStore,
    displays: DisplaySet,
    turns: u64,
    boops: u64,
}

impl CounterLedger {
    /// Initialize both counters (idempotent), load their stored values,
    /// and render them into every display.
    pub fn open(store: CounterStore, displays: DisplaySet) -> Result<Self, StoreError> {
        for kind in CounterKind::ALL {
            store.ensure_initialized(kind)?;
        }
        let turns = store.read(CounterKind::Turns)?;
        let boops = store.read(CounterKind::Boops)?;

        let mut ledger = Self {
            store,
            displays,
            turns,
            boops,
        };
        ledger.render_all();
        Ok(ledger)
    }

    fn render_all(&mut self) {
        self.displays.render(CounterKind::Turns, self.turns);
        self.displays.render(CounterKind::Boops, self.boops);
    }

    /// Apply one turn tick. Displays always update; storage is written only
    /// at century marks. The displayed value is bumped before any write, so
    /// a failing backend never stalls the visible count.
    pub fn add_turn(&mut self) -> Result<u64, StoreError> {
        self.turns += 1;
        self.displays.render(CounterKind::Turns, self.turns);
        if self.turns % TURN_PERSIST_STRIDE == 0 {
            self.store.write(CounterKind::Turns, self.turns)?;
        }
        Ok(self.turns)
    }

    /// Apply one boop tick. Persisted unconditionally.
    pub fn add_boop(&mut self) -> Result<u64, StoreError> {
        self.boops += 1;
        self.displays.render(CounterKind::Boops, self.boops);
        self.store.write(CounterKind::Boops, self.boops)?;
        Ok(self.boops)
    }

    /// Current displayed turn count.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Current displayed boop count.
    pub fn boops(&self) -> u64 {
        self.boops
    }
}

impl std::fmt::Debug for CounterLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterLedger")
            .field("turns", &self.turns)
            .field("boops", &self.boops)
            .field("displays", &self.displays.len())
            .finish()
    }
}
