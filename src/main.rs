//! refwatch - A referee's scorekeeper and game clock for American football
//!
//! Each invocation loads the match from the state directory, applies one
//! action and saves it again. The game clock is anchored to wall-clock time,
//! so it keeps counting between invocations.

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata,
    clippy::needless_pass_by_value
)]

mod cli;

/// Main entry point for the refwatch CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
