//! Growable, insertion-ordered log of scoring and penalty entries
//!
//! The log tracks its own capacity so growth is predictable: capacity starts
//! at 1, doubles whenever an append would overflow it, and is kept across
//! [`PackedEventLog::clear`] so repeated resets do not reallocate.

use super::entry::{Entry, quarter_label};
use super::error::MatchError;

/// Bytes used by one entry at the persistence boundary
pub const ENTRY_BYTES: usize = 2;

/// Ordered log of `(quarter, value)` entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedEventLog {
    entries: Vec<Entry>,
    capacity: usize,
}

impl Default for PackedEventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl PackedEventLog {
    /// Create an empty log with capacity 1
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(1),
            capacity: 1,
        }
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current logical capacity
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// All entries in insertion order
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entry at `index`, if present
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Entry> {
        self.entries.get(index).copied()
    }

    /// Most recent entry, if any
    #[must_use]
    pub fn last(&self) -> Option<Entry> {
        self.entries.last().copied()
    }

    /// Append an entry, doubling capacity if the log is full
    pub fn add(&mut self, value: u8, quarter: u8) {
        if self.entries.len() == self.capacity {
            self.grow_to(self.entries.len() + 1);
        }
        self.entries.push(Entry::new(value, quarter));
    }

    /// Replace the value of the most recent entry, keeping its quarter
    pub fn amend_last(&mut self, value: u8) -> Result<(), MatchError> {
        let last = self.entries.last_mut().ok_or(MatchError::EmptyLog)?;
        last.value = value;
        Ok(())
    }

    /// Drop every entry; capacity is retained
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of all entry values
    #[must_use]
    pub fn total_value(&self) -> u16 {
        self.entries
            .iter()
            .fold(0u16, |sum, e| sum.wrapping_add(u16::from(e.value)))
    }

    /// Render entry `index` as `"<Ordinal> - <value>"`
    pub fn text(&self, index: usize, periods: u8) -> Result<String, MatchError> {
        let entry = self.get(index).ok_or(MatchError::EntryOutOfRange {
            index,
            size: self.len(),
        })?;
        Ok(format!("{} - {}", quarter_label(entry.quarter, periods), entry.value))
    }

    /// Encode the entries as packed little-endian 16-bit words
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.entries
            .iter()
            .flat_map(|e| e.to_word().to_le_bytes())
            .collect()
    }

    /// Replace the contents with entries decoded from packed words
    ///
    /// The log is resized to `bytes.len() / 2` entries; a trailing odd byte
    /// is ignored.
    pub fn load_bytes(&mut self, bytes: &[u8]) {
        let count = bytes.len() / ENTRY_BYTES;
        self.grow_to(count);
        self.entries.clear();
        self.entries.extend(
            bytes
                .chunks_exact(ENTRY_BYTES)
                .map(|pair| Entry::from_word(u16::from_le_bytes([pair[0], pair[1]]))),
        );
    }

    fn grow_to(&mut self, needed: usize) {
        let mut capacity = self.capacity.max(1);
        while capacity < needed {
            capacity <<= 1;
        }
        if capacity != self.capacity {
            self.entries.reserve_exact(capacity - self.entries.len());
            self.capacity = capacity;
        }
    }
}
