//! Key-value store port
//!
//! Defines the byte-oriented persistence interface the engine writes its
//! versioned records and event logs into.

use thiserror::Error;

/// Errors reported by a key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Nothing is stored under the key
    #[error("key {0} not found")]
    NotFound(u32),

    /// Underlying I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistent byte storage addressed by small integer keys
///
/// Writes are expected to replace the whole value stored at a key.
pub trait KeyValueStore {
    /// Whether a value is stored under `key`
    fn exists(&self, key: u32) -> bool;

    /// Length in bytes of the value stored under `key`, if any
    fn size_of(&self, key: u32) -> Option<usize>;

    /// Read the value under `key` into `buf`
    ///
    /// Copies at most `buf.len()` bytes and returns how many were copied.
    fn read(&self, key: u32, buf: &mut [u8]) -> Result<usize, StoreError>;

    /// Replace the value under `key` with `data`
    fn write(&mut self, key: u32, data: &[u8]) -> Result<(), StoreError>;
}
