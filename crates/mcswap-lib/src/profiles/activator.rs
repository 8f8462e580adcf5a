use super::store::validate_name;
use super::{OperationReport, ProfileError, ProfileLayout};
use crate::platform::live_dir;
use crate::primitives::Category;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Replaces a category's live game directory with a profile's contents
#[derive(Debug, Clone)]
pub struct ProfileActivator {
    layout: ProfileLayout,
    game_dir: PathBuf,
}

impl ProfileActivator {
    pub fn new(layout: ProfileLayout, game_dir: impl Into<PathBuf>) -> Self {
        Self {
            layout,
            game_dir: game_dir.into(),
        }
    }

    pub fn live_dir(&self, category: Category) -> PathBuf {
        live_dir(&self.game_dir, category)
    }

    /// Clear the live directory, then copy every profile entry into it
    ///
    /// An invalid name or a missing profile fails before the live directory
    /// is touched. Entries that cannot be removed or copied are reported as
    /// warnings.
    pub fn apply(&self, category: Category, name: &str) -> Result<OperationReport, ProfileError> {
        let name = validate_name(name)?;
        let live = self.live_dir(category);
        let profile = self.layout.profile_dir(category, name);

        if !profile.is_dir() {
            return Err(ProfileError::ProfileNotFound {
                category,
                name: name.to_string(),
                path: profile,
            });
        }

        let mut report = OperationReport::default();
        clear_directory(&live, &mut report)?;
        debug!(live_dir = %live.display(), "Cleared live directory");
        copy_entries(&profile, &live, &mut report)?;

        info!(
            category = %category,
            profile = name,
            live_dir = %live.display(),
            copied = report.succeeded,
            warnings = report.warnings.len(),
            "Applied profile"
        );
        Ok(report)
    }
}

/// Create `dir` if absent, otherwise remove every entry in it
fn clear_directory(dir: &Path, report: &mut OperationReport) -> Result<(), ProfileError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ProfileError::io(dir, e))?;
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| ProfileError::io(dir, e))? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.record_failure(dir, format!("could not read entry: {}", e));
                continue;
            }
        };

        let path = entry.path();
        // Symlinks are removed as links, never followed
        let result = match fs::symlink_metadata(&path) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(&path),
            Ok(_) => fs::remove_file(&path),
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            report.record_failure(&path, format!("could not remove: {}", e));
        }
    }
    Ok(())
}

/// Copy each entry of `from` into `to`, counting top-level successes
fn copy_entries(from: &Path, to: &Path, report: &mut OperationReport) -> Result<(), ProfileError> {
    for entry in fs::read_dir(from).map_err(|e| ProfileError::io(from, e))? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.record_failure(from, format!("could not read entry: {}", e));
                continue;
            }
        };

        let source = entry.path();
        let destination = to.join(entry.file_name());

        // A directory counts once, and only if nothing inside it failed
        let warnings_before = report.warnings.len();
        let result = if source.is_dir() {
            replace_dir(&source, &destination, report)
        } else {
            copy_file_preserving(&source, &destination)
        };

        match result {
            Ok(()) if report.warnings.len() == warnings_before => report.record_success(),
            Ok(()) => {}
            Err(e) => report.record_failure(&source, format!("could not copy: {}", e)),
        }
    }
    Ok(())
}

fn replace_dir(
    source: &Path,
    destination: &Path,
    report: &mut OperationReport,
) -> std::io::Result<()> {
    if destination.exists() {
        fs::remove_dir_all(destination)?;
    }
    copy_dir_recursive(source, destination, report)
}

/// Copy a directory tree; entries that fail are recorded and skipped
fn copy_dir_recursive(
    source: &Path,
    destination: &Path,
    report: &mut OperationReport,
) -> std::io::Result<()> {
    fs::create_dir_all(destination)?;
    for entry in fs::read_dir(source)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                report.record_failure(source, format!("could not read entry: {}", e));
                continue;
            }
        };

        let from = entry.path();
        let to = destination.join(entry.file_name());
        let result = if from.is_dir() {
            copy_dir_recursive(&from, &to, report)
        } else {
            copy_file_preserving(&from, &to)
        };

        if let Err(e) = result {
            report.record_failure(&from, format!("could not copy: {}", e));
        }
    }
    Ok(())
}

/// `fs::copy` plus the source's modification time
///
/// The copy inherits the source's permissions, so the time is set through
/// a handle that does not need write access to the file contents.
fn copy_file_preserving(source: &Path, destination: &Path) -> std::io::Result<()> {
    fs::copy(source, destination)?;
    let modified = fs::metadata(source)?.modified()?;
    open_for_timestamps(destination)?.set_modified(modified)
}

#[cfg(unix)]
fn open_for_timestamps(path: &Path) -> std::io::Result<fs::File> {
    fs::File::open(path)
}

#[cfg(windows)]
fn open_for_timestamps(path: &Path) -> std::io::Result<fs::File> {
    use std::os::windows::fs::OpenOptionsExt;

    const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
    fs::OpenOptions::new()
        .access_mode(FILE_WRITE_ATTRIBUTES)
        .open(path)
}

#[cfg(not(any(unix, windows)))]
fn open_for_timestamps(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new().write(true).open(path)
}

#[cfg(test)]
mod tests {
    include!("activator.test.rs");
}
