//! File-based key-value store
//!
//! Each key is a file named `<key>.bin` in the data directory. The directory
//! is created on first write.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::ports::{KeyValueStore, StoreError};

/// Key-value store with one file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`
    #[must_use]
    pub fn key_path(&self, key: u32) -> PathBuf {
        self.root.join(format!("{key}.bin"))
    }
}

impl KeyValueStore for FileStore {
    fn exists(&self, key: u32) -> bool {
        self.key_path(key).is_file()
    }

    fn size_of(&self, key: u32) -> Option<usize> {
        fs::metadata(self.key_path(key))
            .ok()
            .filter(fs::Metadata::is_file)
            .map(|m| m.len() as usize)
    }

    fn read(&self, key: u32, buf: &mut [u8]) -> Result<usize, StoreError> {
        let data = fs::read(self.key_path(key)).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                StoreError::NotFound(key)
            } else {
                StoreError::Io(e)
            }
        })?;
        let n = data.len().min(buf.len());
        buf[..n].copy_from_slice(&data[..n]);
        Ok(n)
    }

    fn write(&mut self, key: u32, data: &[u8]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.key_path(key), data)?;
        Ok(())
    }
}
