//! Mock implementations of session providers for testing
//!
//! Command handlers still touch the real filesystem through the profile
//! store, so tests point the mock filesystem at temporary directories.

use crate::api::{CatalogClient, MockModrinthClient};
use crate::application::config::AppConfig;
use crate::application::session::*;
use crate::display::{DisplayProvider, MockDisplayProvider};
use crate::platform::GamePaths;
use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock filesystem provider for testing
#[derive(Clone)]
pub struct MockFileSystemProvider {
    pub current_dir: PathBuf,
    pub game_dir: Option<PathBuf>,
}

impl MockFileSystemProvider {
    pub fn new() -> Self {
        Self {
            current_dir: PathBuf::from("/test/workdir"),
            game_dir: Some(PathBuf::from("/test/.minecraft")),
        }
    }

    pub fn with_current_dir(mut self, dir: PathBuf) -> Self {
        self.current_dir = dir;
        self
    }

    pub fn with_game_dir(mut self, dir: PathBuf) -> Self {
        self.game_dir = Some(dir);
        self
    }

    /// Behave like a host whose game directory cannot be resolved
    pub fn without_game_dir(mut self) -> Self {
        self.game_dir = None;
        self
    }
}

impl Default for MockFileSystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemProvider for MockFileSystemProvider {
    fn current_dir(&self) -> Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn game_paths(&self, game_dir_override: Option<&Path>) -> Result<GamePaths> {
        let root = match (game_dir_override, &self.game_dir) {
            (Some(dir), _) => dir.to_path_buf(),
            (None, Some(dir)) => dir.clone(),
            (None, None) => return Err(anyhow!("Failed to locate the Minecraft directory")),
        };
        Ok(GamePaths { root })
    }
}

/// Mock network provider handing out a shared mock catalog
#[derive(Clone, Default)]
pub struct MockNetworkProvider {
    client: MockModrinthClient,
    unavailable: Option<String>,
    catalog_calls: Arc<Mutex<usize>>,
}

impl MockNetworkProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(mut self, client: MockModrinthClient) -> Self {
        self.client = client;
        self
    }

    /// Fail to build a catalog client at all
    pub fn with_client_error(mut self, message: &str) -> Self {
        self.unavailable = Some(message.to_string());
        self
    }

    /// The catalog every session call shares
    pub fn client(&self) -> &MockModrinthClient {
        &self.client
    }

    pub fn catalog_calls(&self) -> usize {
        *self.catalog_calls.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl NetworkProvider for MockNetworkProvider {
    fn catalog(&self, _config: &AppConfig) -> Result<Box<dyn CatalogClient>> {
        *self.catalog_calls.lock().unwrap_or_else(|p| p.into_inner()) += 1;

        if let Some(message) = &self.unavailable {
            return Err(anyhow!(message.clone()));
        }
        Ok(Box::new(self.client.clone()))
    }
}

/// Mock config provider
pub struct MockConfigProvider {
    app_config: AppConfig,
}

impl MockConfigProvider {
    pub fn new(app_config: AppConfig) -> Self {
        Self { app_config }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn app_config(&self) -> &AppConfig {
        &self.app_config
    }
}

/// Mock interactive provider with scripted answers
#[derive(Clone, Default)]
pub struct MockInteractiveProvider {
    pub fuzzy_select_calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
    fuzzy_select_response: Option<Option<usize>>,
}

impl MockInteractiveProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fuzzy_select(mut self, response: usize) -> Self {
        self.fuzzy_select_response = Some(Some(response));
        self
    }

    /// Simulate the user pressing ESC
    pub fn with_fuzzy_select_cancelled(mut self) -> Self {
        self.fuzzy_select_response = Some(None);
        self
    }

    /// Recorded (prompt, options) pairs
    pub fn get_fuzzy_select_calls(&self) -> Vec<(String, Vec<String>)> {
        self.fuzzy_select_calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }
}

impl InteractiveProvider for MockInteractiveProvider {
    fn fuzzy_select(&self, prompt: &str, options: &[String]) -> Result<Option<usize>> {
        self.fuzzy_select_calls
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push((prompt.to_string(), options.to_vec()));

        if options.is_empty() {
            return Ok(None);
        }

        // Unscripted prompts pick the first option, like --yes
        Ok(self.fuzzy_select_response.unwrap_or(Some(0)))
    }
}

/// Mock command session for testing
pub struct MockCommandSession {
    display_provider: MockDisplayProvider,
    filesystem_provider: MockFileSystemProvider,
    network_provider: MockNetworkProvider,
    config_provider: MockConfigProvider,
    interactive_provider: MockInteractiveProvider,
}

impl MockCommandSession {
    pub fn new() -> Self {
        Self {
            display_provider: MockDisplayProvider::new(),
            filesystem_provider: MockFileSystemProvider::new(),
            network_provider: MockNetworkProvider::new(),
            config_provider: MockConfigProvider::new(AppConfig::default()),
            interactive_provider: MockInteractiveProvider::new(),
        }
    }

    /// Session rooted at `workdir` with its game directory at `game_dir`
    pub fn in_dirs(workdir: &Path, game_dir: &Path) -> Self {
        Self::new().with_filesystem(
            MockFileSystemProvider::new()
                .with_current_dir(workdir.to_path_buf())
                .with_game_dir(game_dir.to_path_buf()),
        )
    }

    pub fn with_filesystem(mut self, filesystem: MockFileSystemProvider) -> Self {
        self.filesystem_provider = filesystem;
        self
    }

    pub fn with_network(mut self, network: MockNetworkProvider) -> Self {
        self.network_provider = network;
        self
    }

    pub fn with_catalog(self, client: MockModrinthClient) -> Self {
        self.with_network(MockNetworkProvider::new().with_client(client))
    }

    pub fn with_config(mut self, config: MockConfigProvider) -> Self {
        self.config_provider = config;
        self
    }

    pub fn with_interactive(mut self, interactive: MockInteractiveProvider) -> Self {
        self.interactive_provider = interactive;
        self
    }

    /// Recording display, for assertions on user-facing output
    pub fn mock_display(&self) -> &MockDisplayProvider {
        &self.display_provider
    }

    pub fn mock_network(&self) -> &MockNetworkProvider {
        &self.network_provider
    }

    pub fn mock_interactive(&self) -> &MockInteractiveProvider {
        &self.interactive_provider
    }
}

impl Default for MockCommandSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for MockCommandSession {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_filesystem_provider() {
        let provider = MockFileSystemProvider::new()
            .with_current_dir(PathBuf::from("/custom/path"))
            .with_game_dir(PathBuf::from("/custom/.minecraft"));

        assert_eq!(provider.current_dir().unwrap(), PathBuf::from("/custom/path"));
        assert_eq!(
            provider.game_paths(None).unwrap().root,
            PathBuf::from("/custom/.minecraft")
        );
        assert_eq!(
            provider.game_paths(Some(Path::new("/override"))).unwrap().root,
            PathBuf::from("/override")
        );
        assert!(provider.without_game_dir().game_paths(None).is_err());
    }

    #[test]
    fn test_session_workdir_prefers_config() {
        let session = MockCommandSession::new().with_config(MockConfigProvider::new(AppConfig {
            workdir: Some(PathBuf::from("/configured")),
            ..AppConfig::default()
        }));
        assert_eq!(session.workdir().unwrap(), PathBuf::from("/configured"));

        let session = MockCommandSession::new();
        assert_eq!(session.workdir().unwrap(), PathBuf::from("/test/workdir"));
    }

    #[test]
    fn test_mock_network_shares_client_state() {
        let network = MockNetworkProvider::new();
        let session = MockCommandSession::new().with_network(network.clone());

        let _client = session.network().catalog(&AppConfig::default()).unwrap();
        assert_eq!(network.catalog_calls(), 1);

        let failing = MockNetworkProvider::new().with_client_error("offline");
        assert!(failing.catalog(&AppConfig::default()).is_err());
    }

    #[test]
    fn test_mock_interactive_records_prompts() {
        let interactive = MockInteractiveProvider::new().with_fuzzy_select(1);
        let options = vec!["a".to_string(), "b".to_string()];

        assert_eq!(interactive.fuzzy_select("Pick", &options).unwrap(), Some(1));
        assert_eq!(interactive.fuzzy_select("Empty", &[]).unwrap(), None);
        assert_eq!(interactive.get_fuzzy_select_calls().len(), 2);
    }
}
