pub mod config;
pub mod counters;
pub mod loader;
pub mod playback;
pub mod schedule;
pub mod session;

// Re-exports for convenience
pub use config::{APP_NAME, KioskConfig, load_config};
pub use counters::{CounterDisplay, CounterKind, CounterLedger, CounterStore, DisplaySet, StoreError};
pub use loader::{LoadError, ProgressSink};
pub use playback::{LoopDetector, LoopStarted, PlaybackClock, PlaybackSignal};
pub use schedule::{
    ManualTimerDriver, Phase, PhaseScheduler, Timeline, TimerDriver, TimerEvent, TimerHandle,
    TokioTimerDriver,
};
pub use session::PlaybackSession;
