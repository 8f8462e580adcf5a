//! Profile management
//!
//! A profile is a named directory of content files under a per-category
//! root in the working directory. Applying a profile replaces the game's
//! live directory for that category with the profile's contents.
//!
//! ## Modules
//!
//! - [`store`] - List, create and import into profiles
//! - [`activator`] - Copy a profile into the live game directory
//! - [`selection`] - Per-category selected profile, persisted between runs

use crate::platform::PlatformError;
use crate::primitives::Category;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod activator;
pub mod selection;
pub mod store;

pub use activator::ProfileActivator;
pub use selection::{ProfileSelection, SELECTION_FILE};
pub use store::ProfileStore;

/// Errors fatal to a profile operation
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Invalid profile name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("No {} profile selected", .category.label())]
    NoActiveProfile { category: Category },

    #[error("{} profile '{name}' does not exist at {}", .category.label(), .path.display())]
    ProfileNotFound {
        category: Category,
        name: String,
        path: PathBuf,
    },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse selection file {}: {source}", .path.display())]
    SelectionParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize selection: {source}")]
    SelectionSerialize {
        #[from]
        source: toml::ser::Error,
    },

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

impl ProfileError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ProfileError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A single item that could not be processed
#[derive(Debug, Clone, PartialEq)]
pub struct ItemWarning {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of a best-effort operation over many items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationReport {
    pub succeeded: usize,
    pub warnings: Vec<ItemWarning>,
}

impl OperationReport {
    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    /// Record and log a per-item failure
    pub fn record_failure(&mut self, path: &Path, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(path = %path.display(), "{}", message);
        self.warnings.push(ItemWarning {
            path: path.to_path_buf(),
            message,
        });
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Where each category's profiles live under the working directory
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLayout {
    root: PathBuf,
}

impl ProfileLayout {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            root: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.root
    }

    pub fn category_root(&self, category: Category) -> PathBuf {
        self.root.join(category.profile_root_name())
    }

    pub fn profile_dir(&self, category: Category, name: &str) -> PathBuf {
        self.category_root(category).join(name)
    }

    pub fn selection_file(&self) -> PathBuf {
        self.root.join(SELECTION_FILE)
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
