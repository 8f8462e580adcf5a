use super::ProfileError;
use crate::primitives::Category;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// File in the working directory holding the selected profiles
pub const SELECTION_FILE: &str = "selection.toml";

/// Selected profile per category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSelection {
    pub mods: Option<String>,
    pub shaderpacks: Option<String>,
    pub resourcepacks: Option<String>,
}

impl ProfileSelection {
    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Mods => self.mods.as_deref(),
            Category::Shaderpacks => self.shaderpacks.as_deref(),
            Category::Resourcepacks => self.resourcepacks.as_deref(),
        }
    }

    pub fn set(&mut self, category: Category, name: impl Into<String>) {
        let slot = match category {
            Category::Mods => &mut self.mods,
            Category::Shaderpacks => &mut self.shaderpacks,
            Category::Resourcepacks => &mut self.resourcepacks,
        };
        *slot = Some(name.into());
    }

    /// An explicit name wins over the stored selection
    pub fn resolve<'a>(&'a self, category: Category, explicit: Option<&'a str>) -> Option<&'a str> {
        explicit.or_else(|| self.get(category))
    }

    /// Load from `path`; a missing file is an empty selection
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ProfileError::io(path, e)),
        };

        toml::from_str(&content).map_err(|source| ProfileError::SelectionParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ProfileError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ProfileError::io(parent, e))?;
        }
        fs::write(path, content).map_err(|e| ProfileError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    include!("selection.test.rs");
}
