//! Core domain logic for refwatch
//!
//! This module contains the game-state engine with no direct I/O.
//! Storage, time and callback scheduling are reached through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`PackedEventLog`, `TeamRecord`, `CountdownTimer`, `MatchState`, `GameConfig`)
//! - `services/` - Persistence codecs and the host-owned `Session`
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
