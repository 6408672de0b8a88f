//! Adapter implementations for port traits
//!
//! This module contains the concrete host-side implementations:
//!
//! - `memory` - In-memory key-value store
//! - `file` - One-file-per-key store under a data directory
//! - `clock` - System and manually advanced wall clocks
//! - `scheduler` - Pending-callback table driven by a host loop

pub mod clock;
pub mod file;
pub mod memory;
pub mod scheduler;

pub use clock::{ManualClock, SystemClock};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use scheduler::LoopScheduler;
