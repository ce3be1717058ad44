//! Terminal implementations of the kiosk display surfaces.

use std::io::Write;

use loopkiosk_core::{CounterDisplay, CounterKind, ProgressSink};

/// Single-line terminal counter readout, rewritten in place on every tick.
#[derive(Debug, Default)]
pub struct TermCounterDisplay {
    turns: u64,
    boops: u64,
}

impl CounterDisplay for TermCounterDisplay {
    fn render(&mut self, kind: CounterKind, value: u64) {
        match kind {
            CounterKind::Turns => self.turns = value,
            CounterKind::Boops => self.boops = value,
        }
        print!("\rturns {:>8}  boops {:>8}", self.turns, self.boops);
        let _ = std::io::stdout().flush();
    }
}

/// Loading percentage, rewritten in place per chunk. Non-finite values
/// from a degenerate declared size are printed as-is.
#[derive(Debug, Default)]
pub struct TermProgress;

impl ProgressSink for TermProgress {
    fn progress(&mut self, percent: f64) {
        print!("\rLoading {percent}%");
        let _ = std::io::stdout().flush();
    }
}
