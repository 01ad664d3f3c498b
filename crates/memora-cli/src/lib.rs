//! memora-cli library root.
//!
//! Re-exports the config layer and command handlers so integration tests
//! can exercise them directly without spawning the binary.

pub mod commands;
pub mod config;
