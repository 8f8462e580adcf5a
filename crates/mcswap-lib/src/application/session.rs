//! Command session architecture
//!
//! Implements the Session-Scoped Dependency Injection Pattern.
//! Each command execution creates a session that owns all ephemeral state.

use crate::api::{CatalogClient, LiveModrinthClient};
use crate::application::config::AppConfig;
use crate::display::{DisplayProvider, LiveDisplayProvider};
use crate::networking::NetworkingManager;
use crate::platform::GamePaths;
use crate::profiles::{ProfileActivator, ProfileLayout, ProfileSelection, ProfileStore};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Provider trait for filesystem locations
pub trait FileSystemProvider {
    /// Get current working directory
    fn current_dir(&self) -> Result<PathBuf>;

    /// Resolve the game directory, honoring an explicit override
    fn game_paths(&self, game_dir_override: Option<&Path>) -> Result<GamePaths>;
}

/// Provider trait for network operations
pub trait NetworkProvider {
    /// Build a catalog client from the session's configuration
    fn catalog(&self, config: &AppConfig) -> Result<Box<dyn CatalogClient>>;
}

/// Provider trait for configuration access
pub trait ConfigProvider {
    /// Get the application configuration
    fn app_config(&self) -> &AppConfig;
}

/// Provider trait for interactive user input operations
pub trait InteractiveProvider {
    /// Prompt for fuzzy selection from a list of options
    /// Returns Some(index) if user selected, None if user pressed ESC
    fn fuzzy_select(&self, prompt: &str, options: &[String]) -> Result<Option<usize>>;
}

/// Session trait that both CommandSession and MockCommandSession can implement
pub trait Session {
    /// Get the display provider for this session
    fn display(&self) -> &dyn DisplayProvider;

    /// Get the filesystem provider for this session
    fn filesystem(&self) -> &dyn FileSystemProvider;

    /// Get the network provider for this session
    fn network(&self) -> &dyn NetworkProvider;

    /// Get the config provider for this session
    fn config(&self) -> &dyn ConfigProvider;

    /// Get the interactive provider for this session
    fn interactive(&self) -> &dyn InteractiveProvider;

    /// Directory holding the profile roots and `selection.toml`
    fn workdir(&self) -> Result<PathBuf> {
        match &self.config().app_config().workdir {
            Some(dir) => Ok(dir.clone()),
            None => self.filesystem().current_dir(),
        }
    }

    fn profile_layout(&self) -> Result<ProfileLayout> {
        Ok(ProfileLayout::new(self.workdir()?))
    }

    fn profile_store(&self) -> Result<ProfileStore> {
        Ok(ProfileStore::new(self.profile_layout()?))
    }

    fn game_paths(&self) -> Result<GamePaths> {
        let game_dir = self.config().app_config().game_dir.clone();
        self.filesystem().game_paths(game_dir.as_deref())
    }

    fn profile_activator(&self) -> Result<ProfileActivator> {
        let game_paths = self.game_paths()?;
        Ok(ProfileActivator::new(self.profile_layout()?, game_paths.root))
    }

    /// Persisted per-category selection
    fn load_selection(&self) -> Result<ProfileSelection> {
        let path = self.profile_layout()?.selection_file();
        Ok(ProfileSelection::load(&path)?)
    }

    fn save_selection(&self, selection: &ProfileSelection) -> Result<()> {
        let path = self.profile_layout()?.selection_file();
        Ok(selection.save(&path)?)
    }
}

/// Live implementation of FileSystemProvider
pub struct LiveFileSystemProvider;

impl FileSystemProvider for LiveFileSystemProvider {
    fn current_dir(&self) -> Result<PathBuf> {
        env::current_dir().context("Failed to get current directory")
    }

    fn game_paths(&self, game_dir_override: Option<&Path>) -> Result<GamePaths> {
        GamePaths::discover(game_dir_override).context("Failed to locate the Minecraft directory")
    }
}

/// Live implementation of NetworkProvider
#[derive(Default)]
pub struct LiveNetworkProvider;

impl LiveNetworkProvider {
    pub fn new() -> Self {
        Self
    }
}

impl NetworkProvider for LiveNetworkProvider {
    fn catalog(&self, config: &AppConfig) -> Result<Box<dyn CatalogClient>> {
        let networking = NetworkingManager::new(config.networking_config())
            .context("Failed to create HTTP client")?;

        Ok(Box::new(LiveModrinthClient::with_base_url(
            Arc::new(networking),
            config.modrinth_url.clone(),
        )))
    }
}

/// Live implementation of ConfigProvider
pub struct LiveConfigProvider {
    app_config: AppConfig,
}

impl LiveConfigProvider {
    pub fn new(app_config: AppConfig) -> Self {
        Self { app_config }
    }
}

impl ConfigProvider for LiveConfigProvider {
    fn app_config(&self) -> &AppConfig {
        &self.app_config
    }
}

/// Live implementation of InteractiveProvider
pub struct LiveInteractiveProvider {
    yes_mode: bool,
}

impl LiveInteractiveProvider {
    pub fn new(yes_mode: bool) -> Self {
        Self { yes_mode }
    }

    /// Check if we're in a TTY environment suitable for interactive prompts
    fn is_tty() -> bool {
        use std::io::IsTerminal;
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }
}

impl InteractiveProvider for LiveInteractiveProvider {
    fn fuzzy_select(&self, prompt: &str, options: &[String]) -> Result<Option<usize>> {
        if options.is_empty() {
            return Ok(None);
        }

        // --yes or no terminal: first option
        if self.yes_mode || !Self::is_tty() {
            return Ok(Some(0));
        }

        use dialoguer::FuzzySelect;

        FuzzySelect::new()
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .max_length(6)
            .interact_opt()
            .context("Failed to read fuzzy selection")
    }
}

/// CommandSession owns all ephemeral state for a single command execution
pub struct CommandSession<F, N, C, I>
where
    F: FileSystemProvider,
    N: NetworkProvider,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    display_provider: LiveDisplayProvider,
    filesystem_provider: F,
    network_provider: N,
    config_provider: C,
    interactive_provider: I,
}

impl
    CommandSession<
        LiveFileSystemProvider,
        LiveNetworkProvider,
        LiveConfigProvider,
        LiveInteractiveProvider,
    >
{
    /// Create a new command session with owned state (production composition)
    pub fn new(app_config: AppConfig) -> Self {
        // Display and logging are process-wide; the first session sets them up
        if let Ok(terminal_caps) =
            crate::terminal::TerminalCapabilities::detect_from_config(&app_config)
        {
            let _ = crate::display::Display::init(terminal_caps.clone());
            let logger_config = app_config.to_logger_config(&terminal_caps);
            let _ = crate::logger::Logger::init(logger_config);
        }

        Self {
            display_provider: LiveDisplayProvider::new(),
            filesystem_provider: LiveFileSystemProvider,
            network_provider: LiveNetworkProvider::new(),
            config_provider: LiveConfigProvider::new(app_config.clone()),
            interactive_provider: LiveInteractiveProvider::new(app_config.yes),
        }
    }
}

impl<F, N, C, I> CommandSession<F, N, C, I>
where
    F: FileSystemProvider,
    N: NetworkProvider,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    /// Create a new generic command session with custom providers (for testing)
    #[cfg(feature = "test-utils")]
    pub fn new_with_providers(
        filesystem_provider: F,
        network_provider: N,
        config_provider: C,
        interactive_provider: I,
    ) -> Self {
        Self {
            display_provider: LiveDisplayProvider::new(),
            filesystem_provider,
            network_provider,
            config_provider,
            interactive_provider,
        }
    }
}

impl<F, N, C, I> Session for CommandSession<F, N, C, I>
where
    F: FileSystemProvider,
    N: NetworkProvider,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    fn display(&self) -> &dyn DisplayProvider {
        &self.display_provider
    }

    fn filesystem(&self) -> &dyn FileSystemProvider {
        &self.filesystem_provider
    }

    fn network(&self) -> &dyn NetworkProvider {
        &self.network_provider
    }

    fn config(&self) -> &dyn ConfigProvider {
        &self.config_provider
    }

    fn interactive(&self) -> &dyn InteractiveProvider {
        &self.interactive_provider
    }
}
