//! Hermetic test environment for E2E testing
//!
//! A temporary tree with a working directory (profile roots) and a fake
//! game directory, plus sessions built from the live providers so commands
//! run exactly as the binary would, minus the real Modrinth.

use anyhow::Result;
use mcswap_lib::application::config::AppConfig;
use mcswap_lib::application::session::{
    CommandSession, LiveConfigProvider, LiveFileSystemProvider, LiveInteractiveProvider,
    LiveNetworkProvider,
};
use mcswap_lib::primitives::{Category, TerminalCapsDetectIntent};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Live-provider session used by the E2E tests
pub type HermeticSession = CommandSession<
    LiveFileSystemProvider,
    LiveNetworkProvider,
    LiveConfigProvider,
    LiveInteractiveProvider,
>;

/// Temporary working and game directories
pub struct TestEnvironment {
    /// Removed on drop
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
    /// Holds the profile roots and `selection.toml`
    pub work_path: PathBuf,
    /// Stands in for `.minecraft`
    pub game_path: PathBuf,
    /// Loose files to import from
    pub source_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root_path = temp_dir.path().to_path_buf();
        let work_path = root_path.join("work");
        let game_path = root_path.join(".minecraft");
        let source_path = root_path.join("downloads");

        fs::create_dir_all(&work_path)?;
        fs::create_dir_all(&game_path)?;
        fs::create_dir_all(&source_path)?;

        Ok(Self {
            temp_dir,
            root_path,
            work_path,
            game_path,
            source_path,
        })
    }

    /// Config pointing at this environment; no prompts, no color
    pub fn app_config(&self, modrinth_url: Option<String>) -> AppConfig {
        let mut config = AppConfig {
            workdir: Some(self.work_path.clone()),
            game_dir: Some(self.game_path.clone()),
            color: TerminalCapsDetectIntent::Never,
            yes: true,
            ..AppConfig::default()
        };
        if let Some(url) = modrinth_url {
            config.modrinth_url = url;
        }
        config
    }

    /// Session over the live providers, optionally against a mock catalog
    pub fn session(&self, modrinth_url: Option<String>) -> HermeticSession {
        let config = self.app_config(modrinth_url);
        let yes = config.yes;
        CommandSession::new_with_providers(
            LiveFileSystemProvider,
            LiveNetworkProvider::new(),
            LiveConfigProvider::new(config),
            LiveInteractiveProvider::new(yes),
        )
    }

    /// Write a loose file that can be imported
    pub fn source_file(&self, name: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.source_path.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn profile_dir(&self, category: Category, name: &str) -> PathBuf {
        self.work_path
            .join(category.profile_root_name())
            .join(name)
    }

    pub fn live_dir(&self, category: Category) -> PathBuf {
        self.game_path.join(category.live_dir_name())
    }

    /// Seed a file straight into a category's live directory
    pub fn seed_live_file(&self, category: Category, name: &str, content: &[u8]) -> Result<PathBuf> {
        let dir = self.live_dir(category);
        fs::create_dir_all(&dir)?;
        let path = dir.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Sorted file names directly under `dir`; empty if it does not exist
    pub fn entries(dir: &Path) -> Result<Vec<String>> {
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    pub fn live_entries(&self, category: Category) -> Result<Vec<String>> {
        Self::entries(&self.live_dir(category))
    }

    pub fn profile_entries(&self, category: Category, name: &str) -> Result<Vec<String>> {
        Self::entries(&self.profile_dir(category, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_creation() {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        assert!(env.work_path.is_dir());
        assert!(env.game_path.is_dir());
        assert!(env.source_path.is_dir());
    }

    #[test]
    fn test_app_config_points_into_environment() {
        let env = TestEnvironment::new().unwrap();
        let config = env.app_config(Some("http://127.0.0.1:1".to_string()));

        assert_eq!(config.workdir.as_deref(), Some(env.work_path.as_path()));
        assert_eq!(config.game_dir.as_deref(), Some(env.game_path.as_path()));
        assert_eq!(config.modrinth_url, "http://127.0.0.1:1");
        assert!(config.yes);
    }

    #[test]
    fn test_entries_of_missing_dir_is_empty() {
        let env = TestEnvironment::new().unwrap();
        assert!(env.live_entries(Category::Mods).unwrap().is_empty());

        env.seed_live_file(Category::Mods, "b.jar", b"b").unwrap();
        env.seed_live_file(Category::Mods, "a.jar", b"a").unwrap();
        assert_eq!(env.live_entries(Category::Mods).unwrap(), vec!["a.jar", "b.jar"]);
    }
}
