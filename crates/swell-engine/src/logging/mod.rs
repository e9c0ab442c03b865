//! Logging utilities.
//!
//! Centralizes logger initialization; everything else logs through the
//! standard `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
