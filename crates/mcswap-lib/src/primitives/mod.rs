//! mcswap primitives - core types, errors, and coordination
//!
//! Central collection of shared types that the rest of the crate builds on.
//! Terminal caps inform logging, config drives behavior, errors chain properly.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// Shared macros and patterns
mod shared;
use shared::impl_fromstr_for_value_enum;

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// STDERR
    Stderr,
    /// STDOUT
    Stdout,
}

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

/// Output formats for structured logging
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// TEXT
    /// alias: text, txt, plain
    Text,

    /// JSON
    /// alias: json
    Json,

    /// YAML
    /// alias: yaml, yml
    Yaml,
}

/// How terminal capabilities (color, unicode) should be decided
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalCapsDetectIntent {
    /// Let module detect
    /// alias: auto, automatic, detect, default
    Auto,

    /// Explicitly enable (useful in non-interactive)
    /// alias: always, force, on
    Always,

    /// Explicitly disable (also useful in non-interactive)
    /// alias: never, off
    Never,
}

/// Terminal color capability levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TerminalColorCaps {
    None,
    Ansi16,
    Ansi256,
    TrueColor,
}

// ============================================================================
// DOMAIN TYPES
// ============================================================================

/// Content category managed by profiles
///
/// Each category owns one live directory inside the game root and one
/// profile root inside the working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mods,
    Shaderpacks,
    Resourcepacks,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Mods, Category::Shaderpacks, Category::Resourcepacks];

    /// Directory name under the game root that the game reads at runtime
    pub fn live_dir_name(&self) -> &'static str {
        match self {
            Category::Mods => "mods",
            Category::Shaderpacks => "shaderpacks",
            Category::Resourcepacks => "resourcepacks",
        }
    }

    /// Directory name under the working directory that holds this category's profiles
    pub fn profile_root_name(&self) -> &'static str {
        match self {
            Category::Mods => "profiles",
            Category::Shaderpacks => "shaderpack_profiles",
            Category::Resourcepacks => "resourcepack_profiles",
        }
    }

    /// Singular, human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Mods => "mod",
            Category::Shaderpacks => "shaderpack",
            Category::Resourcepacks => "resourcepack",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.live_dir_name())
    }
}

/// Mod-loading frameworks understood by the catalog filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModLoader {
    Fabric,
    Forge,
    #[serde(rename = "neoforge")]
    NeoForge,
    Quilt,
}

impl ModLoader {
    /// Identifier as it appears in catalog version descriptors
    pub fn as_str(&self) -> &'static str {
        match self {
            ModLoader::Fabric => "fabric",
            ModLoader::Forge => "forge",
            ModLoader::NeoForge => "neoforge",
            ModLoader::Quilt => "quilt",
        }
    }
}

impl Default for ModLoader {
    fn default() -> Self {
        ModLoader::Fabric
    }
}

impl fmt::Display for ModLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// LOGGER CONFIGURATION TYPES
// ============================================================================

/// Logger configuration combining terminal capabilities with application config
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub terminal_caps: crate::terminal::TerminalCapabilities,
}

// ============================================================================
// STRUCTURED ERROR TYPES
// ============================================================================

/// Application configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file '{file}': {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Invalid working directory: {path}")]
    InvalidWorkDir { path: String },

    #[error("Failed to parse environment variables: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },

    #[error("Failed to get current directory: {source}")]
    CurrentDirError {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

/// Logger initialization and operation errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to initialize tracing subscriber: {reason}")]
    InitializationFailed { reason: String },

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

impl LogLevel {
    /// Convert verbosity level from AppConfig to LogLevel
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            4.. => LogLevel::Trace,
        }
    }

    /// Directive string understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Error => Some(
                clap::builder::PossibleValue::new("error")
                    .alias("err")
                    .alias("fatal")
                    .alias("critical"),
            ),
            Self::Warning => Some(clap::builder::PossibleValue::new("warn").alias("warning")),
            Self::Info => Some(clap::builder::PossibleValue::new("info").alias("information")),
            Self::Debug => Some(clap::builder::PossibleValue::new("debug").alias("debugging")),
            Self::Trace => Some(
                clap::builder::PossibleValue::new("trace")
                    .alias("tracing")
                    .alias("verbose"),
            ),
        }
    }
}

impl ValueEnum for LogFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Json, Self::Yaml]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Text => Some(
                clap::builder::PossibleValue::new("text")
                    .alias("txt")
                    .alias("plain"),
            ),
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Yaml => Some(clap::builder::PossibleValue::new("yaml").alias("yml")),
        }
    }
}

impl ValueEnum for TerminalCapsDetectIntent {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Auto, Self::Always, Self::Never]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Auto => Some(
                clap::builder::PossibleValue::new("auto")
                    .alias("automatic")
                    .alias("detect")
                    .alias("default"),
            ),
            Self::Always => Some(
                clap::builder::PossibleValue::new("always")
                    .alias("force")
                    .alias("on"),
            ),
            Self::Never => Some(clap::builder::PossibleValue::new("never").alias("off")),
        }
    }
}

impl ValueEnum for Category {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Mods => Some(clap::builder::PossibleValue::new("mods").alias("mod")),
            Self::Shaderpacks => Some(
                clap::builder::PossibleValue::new("shaderpacks")
                    .alias("shaderpack")
                    .alias("shaders")
                    .alias("shader"),
            ),
            Self::Resourcepacks => Some(
                clap::builder::PossibleValue::new("resourcepacks")
                    .alias("resourcepack")
                    .alias("resources")
                    .alias("resource"),
            ),
        }
    }
}

impl ValueEnum for ModLoader {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Fabric, Self::Forge, Self::NeoForge, Self::Quilt]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Fabric => Some(clap::builder::PossibleValue::new("fabric")),
            Self::Forge => Some(clap::builder::PossibleValue::new("forge")),
            Self::NeoForge => Some(
                clap::builder::PossibleValue::new("neoforge").alias("neo-forge"),
            ),
            Self::Quilt => Some(clap::builder::PossibleValue::new("quilt")),
        }
    }
}

// Generate FromStr implementations for all ValueEnum types
impl_fromstr_for_value_enum!(LogLevel, "invalid log level");
impl_fromstr_for_value_enum!(LogFormat, "invalid log format");
impl_fromstr_for_value_enum!(LogOutput, "invalid log output stream");
impl_fromstr_for_value_enum!(TerminalCapsDetectIntent, "invalid color mode");
impl_fromstr_for_value_enum!(Category, "invalid profile category");
impl_fromstr_for_value_enum!(ModLoader, "invalid mod loader");

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
