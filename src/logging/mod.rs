//! Logging setup for the binary.
//!
//! The library only talks to the `log` facade; `env_logger` is wired up here.

mod init;

pub use init::{init_logging, LoggingConfig};
