use super::{OperationReport, ProfileError, ProfileLayout};
use crate::primitives::Category;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Filesystem registry of named profiles per category
#[derive(Debug, Clone)]
pub struct ProfileStore {
    layout: ProfileLayout,
}

impl ProfileStore {
    pub fn new(layout: ProfileLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ProfileLayout {
        &self.layout
    }

    /// Immediate subdirectory names of the category root, in directory order
    ///
    /// A missing or unreadable root yields an empty list.
    pub fn list_profiles(&self, category: Category) -> Vec<String> {
        let root = self.layout.category_root(category);
        let entries = match fs::read_dir(&root) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(root = %root.display(), error = %e, "No profiles root");
                return Vec::new();
            }
        };

        entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect()
    }

    /// False for names that are not a single directory under the root
    pub fn profile_exists(&self, category: Category, name: &str) -> bool {
        match validate_name(name) {
            Ok(name) => self.layout.profile_dir(category, name).is_dir(),
            Err(_) => false,
        }
    }

    /// Create an empty profile; an existing one is left as is
    pub fn create_profile(&self, category: Category, name: &str) -> Result<PathBuf, ProfileError> {
        let name = validate_name(name)?;
        let dir = self.layout.profile_dir(category, name);

        fs::create_dir_all(&dir).map_err(|e| ProfileError::io(&dir, e))?;
        info!(category = %category, profile = name, "Created profile");
        Ok(dir)
    }

    /// Copy files into a profile, overwriting same-named files
    ///
    /// Each source lands at `<profile>/<basename>`. Unreadable sources and
    /// directories are reported as warnings; the rest are still copied.
    pub fn import_files(
        &self,
        category: Category,
        profile: Option<&str>,
        sources: &[PathBuf],
    ) -> Result<OperationReport, ProfileError> {
        let name = profile.ok_or(ProfileError::NoActiveProfile { category })?;
        let name = validate_name(name)?;
        let dir = self.layout.profile_dir(category, name);
        fs::create_dir_all(&dir).map_err(|e| ProfileError::io(&dir, e))?;

        let mut report = OperationReport::default();
        for source in sources {
            match import_one(source, &dir) {
                Ok(destination) => {
                    debug!(from = %source.display(), to = %destination.display(), "Imported");
                    report.record_success();
                }
                Err(message) => report.record_failure(source, message),
            }
        }

        info!(
            category = %category,
            profile = name,
            imported = report.succeeded,
            skipped = report.warnings.len(),
            "Import finished"
        );
        Ok(report)
    }
}

fn import_one(source: &Path, profile_dir: &Path) -> Result<PathBuf, String> {
    if source.is_dir() {
        return Err("is a directory, only files can be imported".to_string());
    }

    let file_name = source
        .file_name()
        .ok_or_else(|| "has no file name".to_string())?;
    let destination = profile_dir.join(file_name);

    fs::copy(source, &destination)
        .map(|_| destination)
        .map_err(|e| format!("copy failed: {}", e))
}

/// Trimmed name, usable as a single directory under the category root
pub fn validate_name(raw: &str) -> Result<&str, ProfileError> {
    let name = raw.trim();
    let invalid = |reason: &str| ProfileError::InvalidName {
        name: raw.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name == "." || name == ".." {
        return Err(invalid("name is reserved"));
    }
    if name.contains(['/', '\\']) {
        return Err(invalid("name contains a path separator"));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    include!("store.test.rs");
}
