//! Subcommand implementations.

use std::path::PathBuf;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use loopkiosk_core::{
    CounterKind, CounterLedger, CounterStore, DisplaySet, KioskConfig, ManualTimerDriver,
    PlaybackClock, PlaybackSession, Timeline, TokioTimerDriver, loader,
};

use crate::display::{TermCounterDisplay, TermProgress};

fn open_store(data_dir: Option<PathBuf>) -> Result<CounterStore, String> {
    match data_dir {
        Some(dir) => CounterStore::open(dir),
        None => CounterStore::open_default(),
    }
    .map_err(|e| e.to_string())
}

/// Stream the video, gate on a "click" (Enter), then run the playback loop
/// until interrupted.
pub async fn play(config: KioskConfig) -> Result<(), String> {
    let store = open_store(config.data_dir.clone())?;
    let mut displays = DisplaySet::new();
    displays.register(Box::new(TermCounterDisplay::default()));

    // Stored counts are visible before the asset arrives.
    let ledger = CounterLedger::open(store, displays).map_err(|e| e.to_string())?;
    println!();

    let mut sink = TermProgress::default();
    let video = match loader::load(&config.video_source, &mut sink).await {
        Ok(bytes) => bytes,
        Err(error) => {
            warn!(%error, source = config.video_source, "video load failed");
            println!("\nError loading video");
            return Err(error.to_string());
        }
    };
    info!(bytes = video.len(), "video ready");

    println!("\nClick to start (press Enter)");
    wait_for_click().await?;

    run_playback(&config, ledger).await
}

async fn wait_for_click() -> Result<(), String> {
    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}

async fn run_playback(config: &KioskConfig, ledger: CounterLedger) -> Result<(), String> {
    let mut session = PlaybackSession::new(Timeline::standard(), ledger);
    let (mut driver, mut timer_rx) = TokioTimerDriver::new();
    let mut clock = PlaybackClock::new(
        Duration::from_secs_f64(config.loop_secs),
        Duration::from_millis(config.position_update_ms),
    );

    session.handle_signal(&clock.play(), &mut driver);

    let mut ticker = tokio::time::interval(clock.update_period());
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                for signal in clock.advance() {
                    session.handle_signal(&signal, &mut driver);
                }
            }
            Some((handle, event)) = timer_rx.recv() => {
                // Events from superseded cycles arrive with dead handles.
                if driver.is_live(handle) {
                    session.handle_timer(event, &mut driver);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted; shutting down");
                println!();
                break;
            }
        }
    }
    Ok(())
}

/// Run one full loop cycle against the simulated clock, without touching
/// the stored counters, and print what the timeline produces.
pub fn simulate() -> Result<(), String> {
    let dir = std::env::temp_dir().join(format!("loopkiosk-sim-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let store = CounterStore::open(&dir).map_err(|e| e.to_string())?;
    let ledger = CounterLedger::open(store, DisplaySet::new()).map_err(|e| e.to_string())?;

    let timeline = Timeline::standard();
    let span = timeline.span();
    let mut session = PlaybackSession::new(timeline, ledger);
    let mut driver = ManualTimerDriver::new();

    session.handle_signal(&loopkiosk_core::PlaybackSignal::Played, &mut driver);
    while let Some((_, event)) = driver.pop_due(span) {
        session.handle_timer(event, &mut driver);
    }

    println!(
        "one loop cycle ({:.3} s): {} turn ticks, {} boop tick(s)",
        span.as_secs_f64(),
        session.ledger().turns(),
        session.ledger().boops(),
    );

    let _ = std::fs::remove_dir_all(&dir);
    Ok(())
}

/// Print the stored counter values.
pub fn stats(data_dir: Option<PathBuf>) -> Result<(), String> {
    let store = open_store(data_dir)?;
    for kind in CounterKind::ALL {
        store.ensure_initialized(kind).map_err(|e| e.to_string())?;
        let value = store.read(kind).map_err(|e| e.to_string())?;
        println!("{kind}: {value}");
    }
    Ok(())
}

/// Reset both stored counters to zero.
pub fn reset(data_dir: Option<PathBuf>) -> Result<(), String> {
    let store = open_store(data_dir)?;
    for kind in CounterKind::ALL {
        store.write(kind, 0).map_err(|e| e.to_string())?;
    }
    println!("counters reset");
    Ok(())
}
