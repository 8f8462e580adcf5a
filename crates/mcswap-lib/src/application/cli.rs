use crate::primitives::{Category, ConfigError, ModLoader};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;

/// mcswap CLI - Minecraft profile switching
#[derive(Debug, Clone, Parser)]
#[command(name = "mcswap")]
#[command(about = "Switch between sets of Minecraft mods, shaderpacks and resourcepacks")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// mcswap commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::from_cli(Cli::parse()))
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

/// Available mcswap commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List profiles, for one category or all of them
    List {
        #[arg(value_enum, help = "Category to list: mods, shaderpacks, resourcepacks")]
        category: Option<Category>,
    },

    /// Create an empty profile
    Create {
        #[arg(value_enum)]
        category: Category,

        #[arg(help = "Name of the new profile")]
        name: String,
    },

    /// Remember a profile as the current one for its category
    Select {
        #[arg(value_enum)]
        category: Category,

        #[arg(help = "Existing profile name")]
        name: String,
    },

    /// Copy files into a profile
    Import {
        #[arg(value_enum)]
        category: Category,

        /// Target profile (defaults to the selected one)
        #[arg(short, long)]
        profile: Option<String>,

        #[arg(required = true, help = "Files to copy into the profile")]
        files: Vec<PathBuf>,
    },

    /// Replace the game's live folder with a profile's contents
    Apply {
        #[arg(value_enum)]
        category: Category,

        /// Profile to apply (defaults to the selected one)
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Search Modrinth for mods compatible with a loader and game version
    Search {
        #[arg(help = "Search text")]
        query: String,

        #[arg(short, long, value_enum, default_value_t = ModLoader::Fabric)]
        loader: ModLoader,

        /// Minecraft version (defaults to the newest release)
        #[arg(long)]
        game_version: Option<String>,

        #[arg(long, default_value_t = crate::api::DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Download the first compatible version of a mod into a profile
    Download {
        #[arg(help = "Modrinth project id or slug")]
        project_id: String,

        #[arg(short, long, value_enum, default_value_t = ModLoader::Fabric)]
        loader: ModLoader,

        /// Minecraft version (defaults to the newest release)
        #[arg(long)]
        game_version: Option<String>,

        /// Mod profile to download into (defaults to the selected one)
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// List Minecraft release versions
    GameVersions,

    /// Show the resolved working and game directories
    Paths,

    /// Show version information
    Version,
}

impl Commands {
    /// Whether the command talks to the catalog
    pub fn requires_network(&self) -> bool {
        matches!(
            self,
            Commands::Search { .. } | Commands::Download { .. } | Commands::GameVersions
        )
    }

    /// Whether the command reads or writes the game directory
    pub fn requires_game_dir(&self) -> bool {
        matches!(self, Commands::Apply { .. } | Commands::Paths)
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            command: None,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
