//! Counter display fan-out.
//!
//! The kiosk surface can show each counter in any number of places.
//! `DisplaySet` mirrors that: every registered display receives every
//! rendered value, with no ordering guarantee among displays.

use super::store::CounterKind;

/// A single surface that can show a counter value.
pub trait CounterDisplay: Send {
    fn render(&mut self, kind: CounterKind, value: u64);
}

/// The set of all registered counter displays.
#[derive(Default)]
pub struct DisplaySet {
    displays: Vec<Box<dyn CounterDisplay>>,
}

impl DisplaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, display: Box<dyn CounterDisplay>) {
        self.displays.push(display);
    }

    /// Render `value` into every registered display.
    pub fn render(&mut self, kind: CounterKind, value: u64) {
        for display in &mut self.displays {
            display.render(kind, value);
        }
    }

    pub fn len(&self) -> usize {
        self.displays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }
}

impl std::fmt::Debug for DisplaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplaySet")
            .field("displays", &self.displays.len())
            .finish()
    }
}
