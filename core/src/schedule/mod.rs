//! Playback-synchronized scheduling
//!
//! This module provides:
//! - **Timeline**: the hand-tuned choreography (phases plus one-shot boop)
//! - **Driver**: the abstract timer capability and its tokio-backed runner
//! - **Sim**: a simulated-clock driver for tests and dry runs
//! - **Scheduler**: cancel-then-reschedule cycle management per loop start

mod driver;
mod scheduler;
mod sim;
mod timeline;

#[cfg(test)]
mod scheduler_tests;

pub use driver::{TimerDriver, TimerEvent, TimerHandle, TokioTimerDriver};
pub use scheduler::PhaseScheduler;
pub use sim::ManualTimerDriver;
pub use timeline::{Phase, Timeline};
