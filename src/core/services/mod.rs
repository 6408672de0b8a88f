//! Persistence and host-side orchestration
//!
//! - [`persistence`] - Versioned match snapshot and event log codecs
//! - [`config_store`] - Loading, saving and updating the game configuration
//! - [`session`] - Host-owned bundle of store, scheduler, config and match

pub mod config_store;
pub mod persistence;
pub mod session;

pub use config_store::{CONFIG_KEY, apply_update, load_config, save_config};
pub use persistence::{
    LoadError, MATCH_BASE_KEY, MATCH_RECORD_VERSION, load_match, read_log, save_match, write_log,
};
pub use session::{PLAY_CLOCK_KEY, Session};
