//! Logging setup.
//!
//! Library code only talks to the `log` facade; hosts and tests call
//! `init_logging` to install `env_logger` behind it.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
