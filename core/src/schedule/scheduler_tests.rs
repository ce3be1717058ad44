//! Simulated-clock tests for the phase scheduler.
//!
//! Each test drives a full `PlaybackSession` (detector → scheduler →
//! ledger) against the `ManualTimerDriver`, asserting the tick counts the
//! standard timeline must produce at known offsets.

use std::time::Duration;

use crate::counters::{CounterKind, CounterLedger, CounterStore, DisplaySet};
use crate::playback::PlaybackSignal;
use crate::schedule::{ManualTimerDriver, Phase, Timeline};
use crate::session::PlaybackSession;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn temp_store(tag: &str) -> CounterStore {
    let dir = std::env::temp_dir().join(format!(
        "loopkiosk-sched-{tag}-{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    CounterStore::open(dir).expect("open store")
}

fn session_with(timeline: Timeline, tag: &str) -> (PlaybackSession, CounterStore) {
    let store = temp_store(tag);
    let ledger = CounterLedger::open(store.clone(), DisplaySet::new()).unwrap();
    (PlaybackSession::new(timeline, ledger), store)
}

/// Drain every event due at or before `deadline`, then park the clock there.
fn run_to(session: &mut PlaybackSession, driver: &mut ManualTimerDriver, deadline: Duration) {
    while let Some((_, event)) = driver.pop_due(deadline) {
        session.handle_timer(event, driver);
    }
    driver.advance_to(deadline);
}

#[test]
fn phase_one_fires_150_ticks_by_its_stop_offset() {
    let (mut session, store) = session_with(Timeline::standard(), "phase1");
    let mut driver = ManualTimerDriver::new();

    session.handle_signal(&PlaybackSignal::Played, &mut driver);
    run_to(&mut session, &mut driver, ms(30_060));

    // 30_060 / 200 = 150 ticks; persistence lags at the century mark.
    assert_eq!(session.ledger().turns(), 150);
    assert_eq!(store.read(CounterKind::Turns).unwrap(), 100);
    assert_eq!(session.ledger().boops(), 0);
}

#[test]
fn phase_two_adds_five_ticks_on_top_of_phase_one() {
    // Phases 1 and 2 in isolation, matching the authored offsets.
    let timeline = Timeline {
        phases: vec![
            Phase {
                start_offset: ms(0),
                tick_period: ms(200),
                active_duration: ms(30_060),
            },
            Phase {
                start_offset: ms(30_060),
                tick_period: ms(800),
                active_duration: ms(4_060),
            },
        ],
        boop_offset: ms(42_290),
    };
    let (mut session, _store) = session_with(timeline, "phase2");
    let mut driver = ManualTimerDriver::new();

    session.handle_signal(&PlaybackSignal::Played, &mut driver);
    run_to(&mut session, &mut driver, ms(34_120));

    // 4_060 / 800 rounds down to 5 ticks: 150 + 5.
    assert_eq!(session.ledger().turns(), 155);
}

#[test]
fn overlapping_phases_double_the_tick_rate() {
    let (mut session, _store) = session_with(Timeline::standard(), "overlap");
    let mut driver = ManualTimerDriver::new();

    session.handle_signal(&PlaybackSignal::Played, &mut driver);
    run_to(&mut session, &mut driver, ms(34_000));
    let before = session.ledger().turns();
    assert_eq!(before, 161);

    run_to(&mut session, &mut driver, ms(35_930));
    let after = session.ledger().turns();

    // Phases 3 and 4 both run 100 ms streams here (19 ticks each), plus
    // phase 2's final tick at 34.060 s.
    assert_eq!(after - before, 39);
}

#[test]
fn boop_fires_exactly_once_at_its_offset() {
    let (mut session, store) = session_with(Timeline::standard(), "boop");
    let mut driver = ManualTimerDriver::new();

    session.handle_signal(&PlaybackSignal::Played, &mut driver);

    run_to(&mut session, &mut driver, ms(42_289));
    assert_eq!(session.ledger().boops(), 0);

    run_to(&mut session, &mut driver, ms(42_290));
    assert_eq!(session.ledger().boops(), 1);
    assert_eq!(store.read(CounterKind::Boops).unwrap(), 1);

    // Nothing else scheduled fires it again.
    run_to(&mut session, &mut driver, ms(60_000));
    assert_eq!(session.ledger().boops(), 1);
}

#[test]
fn full_cycle_totals() {
    let (mut session, store) = session_with(Timeline::standard(), "full-cycle");
    let mut driver = ManualTimerDriver::new();

    session.handle_signal(&PlaybackSignal::Played, &mut driver);
    run_to(&mut session, &mut driver, ms(42_290));

    // Per-phase tick counts: 150 + 5 + 59 + 22 + 14.
    assert_eq!(session.ledger().turns(), 250);
    assert_eq!(session.ledger().boops(), 1);
    assert_eq!(store.read(CounterKind::Turns).unwrap(), 200);
    assert_eq!(store.read(CounterKind::Boops).unwrap(), 1);
}

#[test]
fn second_loop_event_cancels_the_first_cycle_entirely() {
    let (mut session, store) = session_with(Timeline::standard(), "restart");
    let mut driver = ManualTimerDriver::new();

    session.handle_signal(&PlaybackSignal::Played, &mut driver);
    run_to(&mut session, &mut driver, ms(10_000));
    assert_eq!(session.ledger().turns(), 50);

    // Mid-cycle state: phase 1 interval + its stop, four pending phase
    // starts, and the boop one-shot.
    assert_eq!(driver.pending(), 7);

    // A loop restart 10 s in supersedes everything from cycle 1.
    let restarted =
        session.handle_signal(&PlaybackSignal::Seeked { position: 0.4 }, &mut driver);
    assert!(restarted);
    assert_eq!(
        driver.pending(),
        6,
        "exactly one fresh timeline (boop + five phase starts) may be live"
    );

    // No remnant of cycle 1 fires: the fresh phase 1 ticks first at +200 ms.
    run_to(&mut session, &mut driver, ms(10_100));
    assert_eq!(session.ledger().turns(), 50);

    // The second cycle then runs to completion on its own schedule.
    run_to(&mut session, &mut driver, ms(10_000 + 42_290));
    assert_eq!(session.ledger().turns(), 300);
    assert_eq!(session.ledger().boops(), 1, "cycle 1's boop was cancelled");
    assert_eq!(store.read(CounterKind::Turns).unwrap(), 300);
}

#[test]
fn duplicate_loop_events_leave_one_timeline() {
    let (mut session, _store) = session_with(Timeline::standard(), "duplicate");
    let mut driver = ManualTimerDriver::new();

    // A physical loop often satisfies several heuristics back to back.
    session.handle_signal(&PlaybackSignal::Played, &mut driver);
    session.handle_signal(&PlaybackSignal::Seeked { position: 0.1 }, &mut driver);
    session.handle_signal(&PlaybackSignal::PositionUpdate { position: 0.1 }, &mut driver);
    assert_eq!(driver.pending(), 6);

    run_to(&mut session, &mut driver, ms(42_290));
    assert_eq!(session.ledger().turns(), 250);
    assert_eq!(session.ledger().boops(), 1);
}

#[test]
fn persisted_turns_never_exceed_the_displayed_century_mark() {
    let (mut session, store) = session_with(Timeline::standard(), "invariant");
    let mut driver = ManualTimerDriver::new();

    session.handle_signal(&PlaybackSignal::Played, &mut driver);

    let mut checked = 0u32;
    while let Some((_, event)) = driver.pop_due(ms(42_290)) {
        session.handle_timer(event, &mut driver);
        let displayed = session.ledger().turns();
        let persisted = store.read(CounterKind::Turns).unwrap();
        assert_eq!(persisted, 100 * (displayed / 100));
        checked += 1;
    }
    assert!(checked > 250, "expected the full cycle's events to fire");
}
