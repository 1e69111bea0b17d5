//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only talks to the `log`
//! facade; binaries pick the backend here.

mod init;

pub use init::{init_logging, LoggingConfig};
