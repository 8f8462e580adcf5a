//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::api::DEFAULT_MODRINTH_URL;
use crate::networking::NetworkingConfig;
use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const NET_TIMEOUT: &str = "30";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const TTY_CAPS_DETECT_INTENT: &str = "auto";
    pub const MODRINTH_URL: &str = crate::api::DEFAULT_MODRINTH_URL;
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL.parse().unwrap_or(0)
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT.parse().unwrap_or(LogFormat::Text)
    }

    pub fn net_timeout() -> u64 {
        defaults::NET_TIMEOUT.parse().unwrap_or(30)
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT.parse().unwrap_or(LogOutput::Stderr)
    }

    pub fn tty_caps_detect_intent() -> TerminalCapsDetectIntent {
        defaults::TTY_CAPS_DETECT_INTENT
            .parse()
            .unwrap_or(TerminalCapsDetectIntent::Auto)
    }

    pub fn modrinth_url() -> String {
        defaults::MODRINTH_URL.to_string()
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Working directory holding the profile folders
    #[arg(short, long, global = true, env = "MCSWAP_WORKDIR")]
    #[serde(default)]
    pub workdir: Option<PathBuf>,

    /// Minecraft game directory (detected from the host OS when unset)
    #[arg(short, long, global = true, env = "MCSWAP_GAME_DIR")]
    #[serde(default)]
    pub game_dir: Option<PathBuf>,

    /// API timeout in seconds
    #[arg(short, long, global = true, env = "MCSWAP_NET_TIMEOUT", default_value = defaults::NET_TIMEOUT)]
    #[serde(default = "default_fns::net_timeout")]
    pub net_timeout: u64,

    /// Modrinth API base URL
    #[arg(long, global = true, env = "MCSWAP_MODRINTH_URL", default_value = defaults::MODRINTH_URL)]
    #[serde(default = "default_fns::modrinth_url")]
    pub modrinth_url: String,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, global = true, env = "MCSWAP_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Output format (text, json, yaml)
    #[arg(long, global = true, env = "MCSWAP_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, global = true, env = "MCSWAP_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, global = true, env = "MCSWAP_COLOR", default_value = defaults::TTY_CAPS_DETECT_INTENT)]
    #[serde(default = "default_fns::tty_caps_detect_intent")]
    pub color: TerminalCapsDetectIntent,

    /// Never prompt; take the first option instead
    #[arg(short, long, global = true, env = "MCSWAP_YES")]
    #[serde(default)]
    pub yes: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workdir: None,
            game_dir: None,
            net_timeout: default_fns::net_timeout(),
            modrinth_url: default_fns::modrinth_url(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::tty_caps_detect_intent(),
            yes: false,
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig from AppConfig and TerminalCapabilities
    pub fn to_logger_config(
        &self,
        terminal_caps: &crate::terminal::TerminalCapabilities,
    ) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            terminal_caps: terminal_caps.clone(),
        }
    }

    /// HTTP client settings derived from this config
    pub fn networking_config(&self) -> NetworkingConfig {
        NetworkingConfig {
            timeout_seconds: self.net_timeout,
            trace_requests: self.log_level >= 4,
            ..NetworkingConfig::default()
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.workdir.is_some() {
            self.workdir = other.workdir;
        }
        if other.game_dir.is_some() {
            self.game_dir = other.game_dir;
        }

        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }
        if other.net_timeout != default_fns::net_timeout() {
            self.net_timeout = other.net_timeout;
        }
        if other.modrinth_url != DEFAULT_MODRINTH_URL {
            self.modrinth_url = other.modrinth_url;
        }
        if other.yes {
            self.yes = true;
        }

        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, TerminalCapsDetectIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if self.workdir.is_none() {
            self.workdir = Some(
                std::env::current_dir().map_err(|e| ConfigError::CurrentDirError { source: e })?,
            );
        }

        if let Some(workdir) = &self.workdir {
            if workdir.exists() && !workdir.is_dir() {
                return Err(ConfigError::InvalidWorkDir {
                    path: workdir.display().to_string(),
                });
            }
        }

        if self.net_timeout == 0 {
            return Err(ConfigError::ParseError {
                value: "0".to_string(),
                reason: "network timeout must be at least one second".to_string(),
            });
        }

        Ok(())
    }
}
