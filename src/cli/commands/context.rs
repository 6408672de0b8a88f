//! Per-invocation settings shared by every command

use std::path::PathBuf;

use refwatch::adapters::{FileStore, LoopScheduler, SystemClock};
use refwatch::core::services::Session;
use refwatch::output::OutputMode;

/// Session type used by the CLI host
pub type HostSession = Session<FileStore, LoopScheduler<SystemClock>>;

/// Resolved options for one invocation
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub mode: OutputMode,
    /// State directory
    pub data_dir: PathBuf,
    /// Ring the terminal bell on expiry
    pub bell: bool,
}

impl Context {
    /// Load the session from the state directory
    pub fn open(&self) -> HostSession {
        log::debug!("opening state in {}", self.data_dir.display());
        Session::open(FileStore::new(&self.data_dir), LoopScheduler::new(SystemClock))
    }
}
