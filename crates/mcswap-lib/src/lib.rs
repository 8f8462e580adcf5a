//! # mcswap Library
//!
//! Minecraft profile management: named sets of mods, shaderpacks and
//! resourcepacks copied into the game's live folders on demand, plus a small
//! Modrinth client for finding and downloading mods.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types, categories, loaders and errors
//! - [`terminal`] - Cross-platform terminal capability detection
//! - [`logger`] - Structured logging with progress-aware output
//! - [`display`] - User-facing status, tables and spinners
//! - [`networking`] - Async HTTP client
//! - [`platform`] - Game directory discovery
//! - [`profiles`] - Profile store, activation and selection
//! - [`api`] - Modrinth catalog client and workflows
//! - [`application`] - CLI interface, configuration and command handlers
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! mcswap_lib::main().await
//! # }
//! ```

pub mod api;
pub mod application;
pub mod display;
pub mod logger;
pub mod networking;
pub mod platform;
pub mod primitives;
pub mod profiles;
pub mod terminal;

// Re-export commonly used types for convenience
pub use api::{CatalogClient, CatalogError, LiveModrinthClient};
pub use application::{AppConfig, Cli, Commands, execute_command, execute_command_with_session};
pub use logger::Logger;
pub use networking::{NetworkingConfig, NetworkingManager};
pub use platform::{GamePaths, PlatformError};
pub use primitives::{
    Category, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError, ModLoader,
    TerminalCapsDetectIntent, TerminalColorCaps,
};
pub use profiles::{OperationReport, ProfileActivator, ProfileError, ProfileSelection, ProfileStore};
pub use terminal::TerminalCapabilities;

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

pub async fn main() -> Result<()> {
    // .env files feed clap's env fallbacks, so they load before parsing
    application::load_env_files(&std::env::current_dir()?)?;

    let config = CliConfig::load()?;
    execute_command(config).await
}
