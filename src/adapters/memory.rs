//! In-memory key-value store

use std::collections::HashMap;

use crate::core::ports::{KeyValueStore, StoreError};

/// Key-value store backed by a `HashMap`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<u32, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw bytes stored under `key`
    #[must_use]
    pub fn get(&self, key: u32) -> Option<&[u8]> {
        self.values.get(&key).map(Vec::as_slice)
    }

    /// Remove the value under `key`
    pub fn remove(&mut self, key: u32) -> Option<Vec<u8>> {
        self.values.remove(&key)
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn exists(&self, key: u32) -> bool {
        self.values.contains_key(&key)
    }

    fn size_of(&self, key: u32) -> Option<usize> {
        self.values.get(&key).map(Vec::len)
    }

    fn read(&self, key: u32, buf: &mut [u8]) -> Result<usize, StoreError> {
        let value = self.values.get(&key).ok_or(StoreError::NotFound(key))?;
        let n = value.len().min(buf.len());
        buf[..n].copy_from_slice(&value[..n]);
        Ok(n)
    }

    fn write(&mut self, key: u32, data: &[u8]) -> Result<(), StoreError> {
        self.values.insert(key, data.to_vec());
        Ok(())
    }
}
