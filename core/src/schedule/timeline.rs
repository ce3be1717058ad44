//! Timeline definitions (the hand-tuned choreography)
//!
//! A `Phase` is a time-boxed span of recurring turn ticks; a `Timeline` is
//! the ordered set of phases plus the single-shot boop, all offsets
//! relative to a loop start. The standard timeline was authored against
//! one specific video and is not derived from anything.

use std::time::Duration;

/// One time-boxed span of recurring ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Offset from loop start at which the phase begins.
    pub start_offset: Duration,
    /// Period between ticks once the phase is running.
    pub tick_period: Duration,
    /// How long the phase stays active, measured from its own start.
    pub active_duration: Duration,
}

const fn phase(start_ms: u64, period_ms: u64, active_ms: u64) -> Phase {
    Phase {
        start_offset: Duration::from_millis(start_ms),
        tick_period: Duration::from_millis(period_ms),
        active_duration: Duration::from_millis(active_ms),
    }
}

/// The full per-loop schedule: ordered phases plus the boop one-shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub phases: Vec<Phase>,
    /// Offset of the single boop tick from loop start.
    pub boop_offset: Duration,
}

impl Timeline {
    /// The standard choreography. Phases 3 and 4 overlap between 34.000 s
    /// and 35.930 s, doubling the tick rate there; that overlap is part of
    /// the authored timeline and is kept verbatim.
    pub fn standard() -> Self {
        Self {
            phases: vec![
                phase(0, 200, 30_060),
                phase(30_060, 800, 4_060),
                phase(33_240, 100, 5_930),
                phase(34_000, 100, 2_230),
                phase(37_030, 200, 2_980),
            ],
            boop_offset: Duration::from_millis(42_290),
        }
    }

    /// Offset at which the last scheduled event of a cycle fires.
    pub fn span(&self) -> Duration {
        self.phases
            .iter()
            .map(|p| p.start_offset + p.active_duration)
            .max()
            .unwrap_or(Duration::ZERO)
            .max(self.boop_offset)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_timeline_shape() {
        let timeline = Timeline::standard();
        assert_eq!(timeline.phases.len(), 5);
        assert_eq!(timeline.phases[0].start_offset, Duration::ZERO);
        assert_eq!(timeline.span(), Duration::from_millis(42_290));
    }

    #[test]
    fn phases_three_and_four_overlap() {
        let timeline = Timeline::standard();
        let p3 = timeline.phases[2];
        let p4 = timeline.phases[3];
        let p3_end = p3.start_offset + p3.active_duration;
        assert!(p4.start_offset < p3_end);
    }
}
