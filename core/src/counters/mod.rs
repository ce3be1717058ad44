//! Persistent counter system
//!
//! This module provides:
//! - **Store**: durable decimal-text storage for the named counters
//! - **Display**: fan-out rendering to every registered counter display
//! - **Ledger**: tick application with per-counter persistence policy

mod display;
mod error;
mod ledger;
mod store;


pub use display::{CounterDisplay, DisplaySet};
pub use error::StoreError;
pub use ledger::CounterLedger;
pub use store::{CounterKind, CounterStore};
