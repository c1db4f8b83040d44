//! Logging utilities.
//!
//! Centralizes logger initialization behind the `log` facade: `env_logger`
//! on native targets, the browser console on wasm.

mod init;

pub use init::{init_logging, LoggingConfig};
