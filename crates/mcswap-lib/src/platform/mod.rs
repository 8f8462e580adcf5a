//! Game directory discovery
//!
//! Maps the host OS to the game's root data directory and the live
//! category folders inside it. Resolution is pure over [`BaseLocations`];
//! only [`BaseLocations::detect`] touches the environment.

use crate::primitives::Category;
use directories::BaseDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Platform-specific path discovery errors
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Platform not supported: {platform}")]
    UnsupportedPlatform { platform: String },

    #[error("Could not determine the {what} directory for this user")]
    MissingBaseDirectory { what: String },
}

/// Host operating system families with a known game directory convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Windows,
    MacOs,
    Linux,
}

impl HostOs {
    /// Parse an OS identity as reported by `std::env::consts::OS`
    pub fn from_identity(identity: &str) -> Result<Self, PlatformError> {
        match identity {
            "windows" => Ok(HostOs::Windows),
            "macos" => Ok(HostOs::MacOs),
            "linux" => Ok(HostOs::Linux),
            other => Err(PlatformError::UnsupportedPlatform {
                platform: other.to_string(),
            }),
        }
    }
}

/// Per-user base directories the game directory is derived from
#[derive(Debug, Clone, PartialEq)]
pub struct BaseLocations {
    pub home: PathBuf,
    /// Roaming application data (`%APPDATA%` on Windows)
    pub roaming_data: Option<PathBuf>,
}

impl BaseLocations {
    pub fn detect() -> Result<Self, PlatformError> {
        let dirs = BaseDirs::new().ok_or_else(|| PlatformError::MissingBaseDirectory {
            what: "home".to_string(),
        })?;

        Ok(Self {
            home: dirs.home_dir().to_path_buf(),
            roaming_data: Some(dirs.data_dir().to_path_buf()),
        })
    }
}

/// Resolve the game's root data directory for an OS identity
pub fn resolve_game_dir(
    os_identity: &str,
    locations: &BaseLocations,
) -> Result<PathBuf, PlatformError> {
    let dir = match HostOs::from_identity(os_identity)? {
        HostOs::Windows => locations
            .roaming_data
            .as_ref()
            .ok_or_else(|| PlatformError::MissingBaseDirectory {
                what: "roaming application data".to_string(),
            })?
            .join(".minecraft"),
        HostOs::MacOs => locations
            .home
            .join("Library")
            .join("Application Support")
            .join("minecraft"),
        HostOs::Linux => locations.home.join(".minecraft"),
    };

    tracing::trace!(os = os_identity, game_dir = %dir.display(), "Resolved game directory");
    Ok(dir)
}

/// Live folder the game reads for a category
pub fn live_dir(game_dir: &Path, category: Category) -> PathBuf {
    game_dir.join(category.live_dir_name())
}

/// Game root plus its live category folders
#[derive(Debug, Clone, PartialEq)]
pub struct GamePaths {
    pub root: PathBuf,
}

impl GamePaths {
    /// Use an explicit override, or resolve for the running host
    pub fn discover(game_dir_override: Option<&Path>) -> Result<Self, PlatformError> {
        if let Some(dir) = game_dir_override {
            return Ok(Self {
                root: dir.to_path_buf(),
            });
        }

        let locations = BaseLocations::detect()?;
        let root = resolve_game_dir(std::env::consts::OS, &locations)?;
        Ok(Self { root })
    }

    pub fn live_dir(&self, category: Category) -> PathBuf {
        live_dir(&self.root, category)
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
