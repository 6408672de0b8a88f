//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the game-state engine
//! and the host it runs inside (storage, wall clock, callback scheduler,
//! timer observers).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete
//! implementations. Tests drive the engine with an in-memory store and a
//! manually advanced clock; the CLI drives it with files and the system clock.

mod kv_store;
mod listener;
mod scheduler;

pub use kv_store::{KeyValueStore, StoreError};
pub use listener::{TimerEvent, TimerListener, TimerStatus};
pub use scheduler::{Clock, ScheduleHandle, Scheduler};
