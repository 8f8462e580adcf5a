//! Terminal capability detection
//!
//! Decides color depth and unicode support from the configured intent,
//! TTY status and the usual terminal environment variables.

pub mod capabilities;

pub use capabilities::{TerminalCapabilities, TerminalEnvConfig, TerminalError};
