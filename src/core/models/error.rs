//! Errors raised by match-state operations

use thiserror::Error;

/// Errors that can occur while updating the match state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// An operation needed a last entry but the log is empty
    #[error("event log is empty")]
    EmptyLog,

    /// Log index past the end of the log
    #[error("entry {index} out of range (log has {size} entries)")]
    EntryOutOfRange {
        /// Requested index
        index: usize,
        /// Number of entries in the log
        size: usize,
    },

    /// Extra point attempted without a touchdown awaiting its try
    #[error("no try is pending")]
    NoPendingTry,

    /// A new score was attempted before the pending try was resolved
    #[error("a try is pending; resolve it before scoring again")]
    TryPending,

    /// Extra point value other than 0, 1 or 2
    #[error("invalid extra point value: {0}")]
    InvalidExtraPoint(u8),

    /// Timeout requested by a team with none left this half
    #[error("no timeouts remaining")]
    NoTimeoutsRemaining,
}
