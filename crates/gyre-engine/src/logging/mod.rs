//! Logging setup.
//!
//! The engine logs through the `log` facade only; `init_logging` installs an
//! `env_logger` backend for binaries that want one.

mod init;

pub use init::{init_logging, LoggingConfig};
