//! Command implementations

mod clock;
mod config_cmd;
mod context;
mod game;
mod log_cmd;
mod status;

pub use clock::clock;
pub use config_cmd::config_cmd;
pub use context::Context;
pub use game::{penalty, quarter, reset, score, timeout, try_cmd};
pub use log_cmd::log_cmd;
pub use status::status;
